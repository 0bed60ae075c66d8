use std::collections::BTreeMap;
use std::fmt;
use std::path;

use liquid_core::model::KString;
use siteconf_config::{
    Articles, Feed, Integrations, Link, Pagination, Permalink, RelPath, Site,
    DEFAULT_ALL_ATOM, DEFAULT_CATEGORY_ATOM, DEFAULT_PER_PAGE, DEFAULT_TRANSLATION_ATOM,
};

use crate::error::Result;
use crate::permalink;

use super::ArticleMeta;

pub const DEFAULT_SOURCE: &str = "content";
pub const DEFAULT_DESTINATION: &str = "output";
pub const DEFAULT_OUTPUT_FORMAT: &str = "html5";

/// Site configuration with every layer merged and defaults applied.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    pub source: path::PathBuf,
    pub destination: path::PathBuf,
    pub site: Site,
    pub theme_dir: Option<path::PathBuf>,
    pub logo: Option<KString>,
    pub favicon: Option<KString>,
    pub article_url: Permalink,
    pub article_save_as: Permalink,
    pub article_excludes: Vec<RelPath>,
    pub feeds: FeedTargets,
    pub per_page: i32,
    pub integrations: Integrations,
    pub markdown_extensions: BTreeMap<KString, liquid_core::Object>,
    pub markdown_output_format: KString,
    pub blogroll: Vec<Link>,
    pub social: Vec<Link>,
    pub projects: Vec<Link>,
    pub static_paths: Vec<RelPath>,
    pub extra_path_metadata: BTreeMap<RelPath, RelPath>,
    pub relative_urls: bool,
}

/// Output location of each enabled feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FeedTargets {
    pub all_atom: Option<RelPath>,
    pub category_atom: Option<RelPath>,
    pub translation_atom: Option<RelPath>,
}

impl Config {
    pub fn from_config(source: siteconf_config::Config) -> Self {
        let siteconf_config::Config {
            root,
            inherit: _,
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
        } = source;

        let source = source
            .unwrap_or_else(|| RelPath::from_unchecked(DEFAULT_SOURCE))
            .to_path(&root);
        let destination = destination
            .unwrap_or_else(|| RelPath::from_unchecked(DEFAULT_DESTINATION))
            .to_path(&root);

        let Articles {
            url,
            save_as,
            excludes,
        } = articles.merge(&Articles::with_defaults());

        let resolve = |feed: Option<Feed>, default: &str| feed.and_then(|f| f.resolve(default));
        let feeds = FeedTargets {
            all_atom: resolve(feeds.all_atom, DEFAULT_ALL_ATOM),
            category_atom: resolve(feeds.category_atom, DEFAULT_CATEGORY_ATOM),
            translation_atom: resolve(feeds.translation_atom, DEFAULT_TRANSLATION_ATOM),
        };

        let per_page = pagination
            .merge(&Pagination::with_defaults())
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE);

        let extra_path_metadata = static_files
            .extra_path_metadata
            .unwrap_or_default()
            .into_iter()
            .map(|(path, metadata)| (path, metadata.path))
            .collect();

        Self {
            source,
            destination,
            site,
            theme_dir: theme.dir,
            logo: theme.logo,
            favicon: theme.favicon,
            article_url: url.unwrap_or_default(),
            article_save_as: save_as.unwrap_or_default(),
            article_excludes: excludes.unwrap_or_default(),
            feeds,
            per_page,
            integrations,
            markdown_extensions: markdown.extension_configs.unwrap_or_default(),
            markdown_output_format: markdown
                .output_format
                .unwrap_or_else(|| KString::from_static(DEFAULT_OUTPUT_FORMAT)),
            blogroll: links.blogroll.unwrap_or_default(),
            social: links.social.unwrap_or_default(),
            projects: links.projects.unwrap_or_default(),
            static_paths: static_files.paths.unwrap_or_default(),
            extra_path_metadata,
            relative_urls: relative_urls.unwrap_or(false),
        }
    }

    /// Site URL without a trailing `/`.
    pub fn site_url(&self) -> Option<&str> {
        self.site
            .url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    /// URL of a file published with the site.
    ///
    /// With `relative_urls` the path is left document-relative, otherwise it is
    /// anchored to the site URL (or the server root when there is none).
    pub fn asset_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.relative_urls {
            path.to_owned()
        } else {
            format!("{}/{}", self.site_url().unwrap_or(""), path)
        }
    }

    pub fn logo_url(&self) -> Option<String> {
        self.logo.as_deref().map(|logo| self.asset_url(logo))
    }

    pub fn favicon_url(&self) -> Option<String> {
        self.favicon.as_deref().map(|favicon| self.asset_url(favicon))
    }

    /// Article URL, relative to the site root.
    pub fn article_url(&self, article: &ArticleMeta) -> Result<String> {
        let attributes = article.attributes(self.site.language.as_deref());
        permalink::explode_permalink(&self.article_url, &attributes)
    }

    /// Where the article is written, relative to the output directory.
    pub fn article_save_as(&self, article: &ArticleMeta) -> Result<relative_path::RelativePathBuf> {
        let attributes = article.attributes(self.site.language.as_deref());
        let save_as = permalink::explode_permalink(&self.article_save_as, &attributes)?;
        Ok(permalink::format_url_as_file(save_as))
    }

    /// Named link collections, in the order themes conventionally render them.
    pub fn link_collections(&self) -> [(&'static str, &[Link]); 3] {
        [
            ("blogroll", self.blogroll.as_slice()),
            ("social", self.social.as_slice()),
            ("projects", self.projects.as_slice()),
        ]
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        let converted = converted.strip_prefix("---").unwrap_or(&converted).trim();
        write!(f, "{converted}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fixture() -> Config {
        let raw = siteconf_config::Config::load("tests/fixtures/blog/_siteconf.yml").unwrap();
        Config::from_config(raw)
    }

    fn date(year: i32, month: time::Month, day: u8) -> time::Date {
        time::Date::from_calendar_date(year, month, day).unwrap()
    }

    #[test]
    fn defaults_applied() {
        let config = Config::from_config(siteconf_config::Config {
            root: "site".into(),
            ..Default::default()
        });
        assert_eq!(config.source, path::PathBuf::from("site/content"));
        assert_eq!(config.destination, path::PathBuf::from("site/output"));
        assert_eq!(config.per_page, 10);
        assert_eq!(config.feeds, FeedTargets::default());
        assert_eq!(config.article_url.as_str(), siteconf_config::DEFAULT_ARTICLE_URL);
        assert_eq!(config.markdown_output_format.as_str(), "html5");
        assert!(!config.relative_urls);
        assert!(config.social.is_empty());
    }

    #[test]
    fn fixture_resolves() {
        let config = fixture();
        assert_eq!(config.source, path::PathBuf::from("tests/fixtures/blog/content"));
        assert_eq!(config.blogroll.len(), 3);
        assert_eq!(
            config.extra_path_metadata[&RelPath::from_unchecked("extra/CNAME")],
            RelPath::from_unchecked("CNAME")
        );
    }

    #[test]
    fn logo_url_joins_site_url() {
        let mut config = fixture();
        config.site.url = Some("https://jonnyreeves.co.uk/".into());
        assert_eq!(
            config.logo_url().as_deref(),
            Some("https://jonnyreeves.co.uk/images/avatar.jpg")
        );
    }

    #[test]
    fn logo_url_without_site_url() {
        let mut config = fixture();
        config.site.url = Some("".into());
        assert_eq!(config.logo_url().as_deref(), Some("/images/avatar.jpg"));
    }

    #[test]
    fn logo_url_relative() {
        let mut config = fixture();
        config.relative_urls = true;
        assert_eq!(config.logo_url().as_deref(), Some("images/avatar.jpg"));
        assert_eq!(config.favicon_url(), None);
    }

    #[test]
    fn article_url_default_template() {
        let config = fixture();
        let article = ArticleMeta::new("Hello, World!").with_date(date(2013, time::Month::March, 5));
        assert_eq!(config.article_url(&article).unwrap(), "2013/03/hello-world/");
        assert_eq!(
            config.article_save_as(&article).unwrap().as_str(),
            "2013/03/hello-world/index.html"
        );
    }

    #[test]
    fn article_url_without_date() {
        let config = fixture();
        let article = ArticleMeta::new("Undated");
        assert_eq!(config.article_url(&article).unwrap(), "undated/");
    }

    #[test]
    fn article_url_custom_template() {
        let mut config = fixture();
        config.article_url = Permalink::from_unchecked("{{lang}}/{{category}}/{{slug}}.html");
        let article = ArticleMeta::new("Tips").with_category("Rust Notes");
        assert_eq!(config.article_url(&article).unwrap(), "en/rust-notes/tips.html");
    }
}
