use liquid_core::model::KString;

/// The three link collections a theme renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Links {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blogroll: Option<Vec<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<Vec<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Link>>,
}

impl Links {
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            blogroll,
            social,
            projects,
        } = self;
        Self {
            blogroll: blogroll.or_else(|| other.blogroll.clone()),
            social: social.or_else(|| other.social.clone()),
            projects: projects.or_else(|| other.projects.clone()),
        }
    }
}

/// A `(label, url)` pair, written in YAML as a two element sequence.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "(KString, KString)", into = "(KString, KString)")]
pub struct Link {
    pub label: KString,
    pub url: KString,
}

impl Link {
    pub fn new(label: impl Into<KString>, url: impl Into<KString>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

impl From<(KString, KString)> for Link {
    fn from((label, url): (KString, KString)) -> Self {
        Self { label, url }
    }
}

impl From<Link> for (KString, KString) {
    fn from(link: Link) -> Self {
        (link.label, link.url)
    }
}
