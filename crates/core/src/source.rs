use crate::Result;
use crate::SourcePath;
use crate::Status;

/// Content tree filtered by gitignore-style patterns.
#[derive(Debug, Clone)]
pub struct Source {
    root: std::path::PathBuf,
    ignore: ignore::gitignore::Gitignore,
}

impl Source {
    pub fn new<'i>(
        root: &std::path::Path,
        ignores: impl IntoIterator<Item = &'i str>,
    ) -> Result<Self> {
        let mut ignore = ignore::gitignore::GitignoreBuilder::new(root);
        for line in ignores {
            ignore.add_line(None, line).map_err(|e| {
                Status::new("Invalid ignore entry")
                    .with_source(e)
                    .context_with(|c| c.insert("Pattern", line.to_owned()))
            })?;
        }
        let ignore = ignore
            .build()
            .map_err(|e| Status::new("Invalid ignore entry").with_source(e))?;

        let source = Self {
            root: root.to_owned(),
            ignore,
        };
        Ok(source)
    }

    pub fn includes_file(&self, file: &std::path::Path) -> bool {
        let is_dir = false;
        self.includes_path(file, is_dir)
    }

    pub fn includes_dir(&self, dir: &std::path::Path) -> bool {
        let is_dir = true;
        self.includes_path(dir, is_dir)
    }

    /// Included files, sorted by name within each directory.
    pub fn iter(&self) -> impl Iterator<Item = SourcePath> + '_ {
        walkdir::WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| self.includes_entry(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(move |e| SourcePath::from_root(&self.root, e.path()))
    }

    fn includes_path(&self, path: &std::path::Path, is_dir: bool) -> bool {
        if path == self.root {
            return true;
        }

        let parent = path.parent();
        if let Some(parent) = parent {
            if parent.starts_with(&self.root) && !self.includes_path(parent, true) {
                return false;
            }
        }

        self.includes_path_leaf(path, is_dir)
    }

    fn includes_path_leaf(&self, path: &std::path::Path, is_dir: bool) -> bool {
        match self.ignore.matched(path, is_dir) {
            ignore::Match::None => true,
            ignore::Match::Ignore(glob) => {
                log::trace!("{:?}: ignored {:?}", path, glob.original());
                false
            }
            ignore::Match::Whitelist(glob) => {
                log::trace!("{:?}: allowed {:?}", path, glob.original());
                true
            }
        }
    }

    fn includes_entry(&self, entry: &walkdir::DirEntry) -> bool {
        // Parents were already filtered by the walk.
        let is_dir = entry.file_type().is_dir();
        self.includes_path_leaf(entry.path(), is_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_includes_dir {
        ($root:expr, $ignores:expr, $test:expr, $included:expr) => {
            let root = $root;
            let ignores = $ignores.clone();
            let files = Source::new(std::path::Path::new(root), ignores).unwrap();
            assert_eq!(files.includes_dir(std::path::Path::new($test)), $included);
        };
    }
    macro_rules! assert_includes_file {
        ($root:expr, $ignores:expr, $test:expr, $included:expr) => {
            let root = $root;
            let ignores = $ignores.clone();
            let files = Source::new(std::path::Path::new(root), ignores).unwrap();
            assert_eq!(files.includes_file(std::path::Path::new($test)), $included);
        };
    }

    #[test]
    fn includes_root_dir() {
        assert_includes_dir!("/srv/blog/content", &[], "/srv/blog/content", true);

        assert_includes_dir!("./", &[], "./", true);
    }

    #[test]
    fn includes_article() {
        assert_includes_file!(
            "/srv/blog/content",
            &[],
            "/srv/blog/content/2013/hello.md",
            true
        );
    }

    #[test]
    fn excludes_anchored_dir() {
        assert_includes_dir!(
            "/srv/blog/content",
            &["/extra/"],
            "/srv/blog/content/extra",
            false
        );
        assert_includes_file!(
            "/srv/blog/content",
            &["/extra/"],
            "/srv/blog/content/extra/CNAME",
            false
        );
        assert_includes_file!(
            "/srv/blog/content",
            &["/extra/"],
            "/srv/blog/content/posts/extra.md",
            true
        );
    }

    #[test]
    fn ignore_hidden_not_ignored_by_parent() {
        assert_includes_file!(
            "/tmp/.cache/blog/content",
            &[".*"],
            "/tmp/.cache/blog/content/post.md",
            true
        );
        assert_includes_file!(
            "/tmp/.cache/blog/content",
            &[".*"],
            "/tmp/.cache/blog/content/.draft.md",
            false
        );
    }

    #[test]
    fn iter_walks_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("posts")).unwrap();
        std::fs::create_dir_all(root.join("extra")).unwrap();
        std::fs::write(root.join("posts/b.md"), "b").unwrap();
        std::fs::write(root.join("posts/a.md"), "a").unwrap();
        std::fs::write(root.join("extra/CNAME"), "example.com").unwrap();

        let source = Source::new(root, ["/extra/"]).unwrap();
        let files: Vec<_> = source.iter().map(|p| p.rel_path.to_string()).collect();
        assert_eq!(files, vec!["posts/a.md".to_owned(), "posts/b.md".to_owned()]);
    }
}
