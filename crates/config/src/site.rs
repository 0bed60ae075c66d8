use liquid_core::model::KString;

/// Identity of the site as shown to readers.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Site {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<KString>,
}

impl Site {
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            author,
            name,
            subtitle,
            url,
            timezone,
            language,
        } = self;
        Self {
            author: author.or_else(|| other.author.clone()),
            name: name.or_else(|| other.name.clone()),
            subtitle: subtitle.or_else(|| other.subtitle.clone()),
            url: url.or_else(|| other.url.clone()),
            timezone: timezone.or_else(|| other.timezone.clone()),
            language: language.or_else(|| other.language.clone()),
        }
    }
}
