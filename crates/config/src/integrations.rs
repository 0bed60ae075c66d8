use liquid_core::model::KString;

/// Identifiers for third-party services the theme embeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Integrations {
    /// Analytics tracking ID, e.g. `UA-12345678-1`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<KString>,
    /// Site name registered with the comment service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_site: Option<KString>,
}

impl Integrations {
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            analytics_id,
            comments_site,
        } = self;
        Self {
            analytics_id: analytics_id.or_else(|| other.analytics_id.clone()),
            comments_site: comments_site.or_else(|| other.comments_site.clone()),
        }
    }
}
