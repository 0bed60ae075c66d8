use std::fmt;

use liquid_core::model::KString;

use crate::RelPath;

pub const DEFAULT_ARTICLE_URL: &str = "{{year}}/{{month}}/{{slug}}/";
pub const DEFAULT_ARTICLE_SAVE_AS: &str = "{{year}}/{{month}}/{{slug}}/index.html";

/// Where articles are found and where they are published.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Articles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Permalink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_as: Option<Permalink>,
    /// Content subdirectories skipped during article discovery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excludes: Option<Vec<RelPath>>,
}

impl Articles {
    pub fn with_defaults() -> Self {
        Self {
            url: Some(Permalink::from_unchecked(DEFAULT_ARTICLE_URL)),
            save_as: Some(Permalink::from_unchecked(DEFAULT_ARTICLE_SAVE_AS)),
            excludes: Some(Vec::new()),
        }
    }

    pub fn merge(self, other: &Self) -> Self {
        let Self {
            url,
            save_as,
            excludes,
        } = self;
        Self {
            url: url.or_else(|| other.url.clone()),
            save_as: save_as.or_else(|| other.save_as.clone()),
            excludes: excludes.or_else(|| other.excludes.clone()),
        }
    }
}

/// Article URL template.
///
/// Placeholders are liquid variables: `year`, `month`, `day`, `i_month`, `i_day`,
/// `slug`, `lang` and `category`.
#[derive(
    Default,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Permalink(KString);

impl Permalink {
    pub fn from_unchecked(value: &str) -> Self {
        Self(KString::from_ref(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Permalink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::ops::Deref for Permalink {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Permalink {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
