use siteconf_core::Source;
use siteconf_core::SourcePath;

use crate::error::Result;
use crate::siteconf_model::ArticleMeta;
use crate::Config;

/// File extensions treated as article sources.
pub const ARTICLE_EXTENSIONS: &[&str] = &["md", "markdown", "mdown"];

/// Article sources under the content directory.
///
/// Excluded directories and static paths are skipped, as are hidden files.
pub fn discover(config: &Config) -> Result<Vec<SourcePath>> {
    let mut ignores = vec![".*".to_owned()];
    ignores.extend(
        config
            .article_excludes
            .iter()
            .chain(config.static_paths.iter())
            .map(|p| format!("/{p}")),
    );
    log::trace!("Article ignores: {ignores:?}");

    let source = Source::new(&config.source, ignores.iter().map(String::as_str))?;
    let articles = source
        .iter()
        .filter(|file| {
            file.rel_path
                .extension()
                .is_some_and(|ext| ARTICLE_EXTENSIONS.contains(&ext))
        })
        .collect();
    Ok(articles)
}

/// Metadata derived from an article's file name.
pub fn meta_for(file: &SourcePath) -> ArticleMeta {
    let name = file.rel_path.file_name().unwrap_or_default();
    ArticleMeta::from_file_name(name)
}
