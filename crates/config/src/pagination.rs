/// Number of articles listed per index page.
pub const DEFAULT_PER_PAGE: i32 = 10;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i32>,
}

impl Pagination {
    pub fn with_defaults() -> Self {
        Self {
            per_page: Some(DEFAULT_PER_PAGE),
        }
    }

    pub fn merge(self, other: &Self) -> Self {
        let Pagination { per_page } = self;
        Self {
            per_page: per_page.or(other.per_page),
        }
    }
}
