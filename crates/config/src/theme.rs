use std::path;

use liquid_core::model::KString;

/// Presentation: which theme to render with and the site-wide images it shows.
///
/// `dir` is resolved relative to the configuration file and may point outside of
/// the site (themes are commonly shared between sites).  `logo` and `favicon` are
/// paths within the published site.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<path::PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<KString>,
}

impl Theme {
    pub fn merge(self, other: &Self) -> Self {
        let Self { dir, logo, favicon } = self;
        Self {
            dir: dir.or_else(|| other.dir.clone()),
            logo: logo.or_else(|| other.logo.clone()),
            favicon: favicon.or_else(|| other.favicon.clone()),
        }
    }
}
