use std::fmt;
use std::path;

use super::*;

/// Name of the project file looked up by [`Config::from_cwd`].
pub const PROJECT_FILE: &str = "_siteconf.yml";

/// One layer of site configuration, as written on disk.
///
/// Every setting is optional so that a layer can be placed on top of another with
/// [`Config::merge`]; defaults are applied when the layers are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    #[serde(skip)]
    pub root: path::PathBuf,
    /// Configuration this layer is placed on top of, relative to this file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherit: Option<path::PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<RelPath>,
    pub site: Site,
    pub theme: Theme,
    pub articles: Articles,
    pub feeds: Feeds,
    pub pagination: Pagination,
    pub integrations: Integrations,
    pub markdown: Markdown,
    pub links: Links,
    pub static_files: StaticFiles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_urls: Option<bool>,
}

impl Config {
    /// Read a single layer, ignoring `inherit`.
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse config")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }
        // The theme may live outside of the site, so it is anchored here rather than
        // against whichever layer ends up on top.
        config.theme.dir = config.theme.dir.map(|dir| root.join(dir));
        config.root = root;

        Ok(config)
    }

    /// Read a layer and every layer it inherits from, merged into one.
    pub fn load<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        let mut seen = Vec::new();
        Self::load_internal(path.into(), &mut seen)
    }

    fn load_internal(path: path::PathBuf, seen: &mut Vec<path::PathBuf>) -> Result<Config> {
        let key = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if seen.contains(&key) {
            return Err(Status::new("Config inherits from itself")
                .context_with(|c| c.insert("Path", path.display().to_string())));
        }
        seen.push(key);

        let config = Self::from_file(&path)?;
        match config.inherit.as_ref() {
            Some(parent) => {
                let parent_path = config.root.join(parent);
                log::debug!(
                    "`{}` inherits from `{}`",
                    path.display(),
                    parent_path.display()
                );
                let parent = Self::load_internal(parent_path, seen)?;
                Ok(config.merge(&parent))
            }
            None => Ok(config),
        }
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, PROJECT_FILE);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::load(&p)
            })
            .unwrap_or_else(|| {
                log::warn!("No {PROJECT_FILE} file found in current directory, using default config.");
                let config = Config {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    /// Place `self` on top of `other`.  `root` and `inherit` always come from `self`, so
    /// site-relative paths inherited from `other` are read against the top layer's root.
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            root,
            inherit,
            source,
            destination,
            site,
            theme,
            articles,
            feeds,
            pagination,
            integrations,
            markdown,
            links,
            static_files,
            relative_urls,
        } = self;
        Self {
            root,
            inherit,
            source: source.or_else(|| other.source.clone()),
            destination: destination.or_else(|| other.destination.clone()),
            site: site.merge(&other.site),
            theme: theme.merge(&other.theme),
            articles: articles.merge(&other.articles),
            feeds: feeds.merge(&other.feeds),
            pagination: pagination.merge(&other.pagination),
            integrations: integrations.merge(&other.integrations),
            markdown: markdown.merge(&other.markdown),
            links: links.merge(&other.links),
            static_files: static_files.merge(&other.static_files),
            relative_urls: relative_urls.or(other.relative_urls),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        let converted = converted.strip_prefix("---").unwrap_or(&converted).trim();
        write!(f, "{converted}")
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_file_ok() {
        let result = Config::from_file("tests/fixtures/config/_siteconf.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.site.author.as_deref(), Some("Jonny Reeves"));
        assert_eq!(result.pagination.per_page, Some(10));
        assert_eq!(result.links.blogroll.as_ref().map(|l| l.len()), Some(3));
    }

    #[test]
    fn test_from_file_empty() {
        let result = Config::from_file("tests/fixtures/config/empty.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.site, Site::default());
    }

    #[test]
    fn test_from_file_invalid_syntax() {
        let result = Config::from_file("tests/fixtures/config/invalid_syntax.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_not_found() {
        let result = Config::from_file("tests/fixtures/config/config_does_not_exist.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_ignores_inherit() {
        let result = Config::from_file("tests/fixtures/config/publish.yml").unwrap();
        assert_eq!(result.site.author, None);
        assert_eq!(result.inherit, Some(path::PathBuf::from("_siteconf.yml")));
    }

    #[test]
    fn test_load_inherit() {
        let result = Config::load("tests/fixtures/config/publish.yml").unwrap();
        assert_eq!(result.site.author.as_deref(), Some("Jonny Reeves"));
        assert_eq!(result.site.url.as_deref(), Some("https://jonnyreeves.co.uk"));
        assert_eq!(result.relative_urls, Some(false));
        assert_eq!(result.feeds.all_atom, Some(Feed::Toggle(true)));
        assert_eq!(
            result.theme.dir,
            Some(path::PathBuf::from("tests/fixtures/config/../themes/svbhack"))
        );
    }

    #[test]
    fn test_load_inherit_cycle() {
        let result = Config::load("tests/fixtures/config/cycle_a.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_cwd_ok() {
        let result = Config::from_cwd("tests/fixtures/config/child").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
    }

    #[test]
    fn test_from_cwd_not_found() {
        let result = Config::from_cwd("tests/fixtures").unwrap();
        assert_eq!(result.root, path::Path::new("tests/fixtures").to_path_buf());
    }

    #[test]
    fn merge_keeps_own_root() {
        let parent = Config {
            root: "parent".into(),
            relative_urls: Some(true),
            ..Default::default()
        };
        let child = Config {
            root: "child".into(),
            ..Default::default()
        };
        let merged = child.merge(&parent);
        assert_eq!(merged.root, path::PathBuf::from("child"));
        assert_eq!(merged.relative_urls, Some(true));
    }

    #[test]
    fn display_round_trips() {
        let config = Config::from_file("tests/fixtures/config/_siteconf.yml").unwrap();
        let reparsed: Config = serde_yaml::from_str(&config.to_string()).unwrap();
        assert_eq!(reparsed.site, config.site);
        assert_eq!(reparsed.links, config.links);
        assert_eq!(reparsed.static_files, config.static_files);
    }

    #[test]
    fn find_project_file_same_dir() {
        let actual = find_project_file("tests/fixtures/config", PROJECT_FILE).unwrap();
        let expected = path::Path::new("tests/fixtures/config/_siteconf.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_parent_dir() {
        let actual = find_project_file("tests/fixtures/config/child", PROJECT_FILE).unwrap();
        let expected = path::Path::new("tests/fixtures/config/_siteconf.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_doesnt_exist() {
        let expected = path::Path::new("<NOT FOUND>");
        let actual =
            find_project_file("tests/fixtures/", PROJECT_FILE).unwrap_or_else(|| expected.into());
        assert_eq!(actual, expected);
    }
}
