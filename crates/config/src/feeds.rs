use crate::RelPath;

pub const DEFAULT_ALL_ATOM: &str = "feeds/all.atom.xml";
pub const DEFAULT_CATEGORY_ATOM: &str = "feeds/{{slug}}.atom.xml";
pub const DEFAULT_TRANSLATION_ATOM: &str = "feeds/all-{{lang}}.atom.xml";

/// Feed generation toggles.
///
/// Every feed is disabled unless a layer turns it on.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Feeds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_atom: Option<Feed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_atom: Option<Feed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_atom: Option<Feed>,
}

impl Feeds {
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            all_atom,
            category_atom,
            translation_atom,
        } = self;
        Self {
            all_atom: all_atom.or_else(|| other.all_atom.clone()),
            category_atom: category_atom.or_else(|| other.category_atom.clone()),
            translation_atom: translation_atom.or_else(|| other.translation_atom.clone()),
        }
    }
}

/// `false` disables a feed, `true` enables it at its default location, a path
/// enables it at that location.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum Feed {
    Toggle(bool),
    Path(RelPath),
}

impl Feed {
    pub fn resolve(&self, default: &str) -> Option<RelPath> {
        match self {
            Feed::Toggle(false) => None,
            Feed::Toggle(true) => Some(RelPath::from_unchecked(default)),
            Feed::Path(path) => Some(path.clone()),
        }
    }
}
