use std::fmt;

use itertools::Itertools;

/// Normalized, `/`-separated path relative to the configuration root.
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
#[serde(try_from = "String")]
pub struct RelPath(relative_path::RelativePathBuf);

impl RelPath {
    pub fn from_unchecked<S: AsRef<str>>(value: S) -> Self {
        Self(relative_path::RelativePathBuf::from(value.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_path(&self) -> &relative_path::RelativePath {
        self.0.as_relative_path()
    }

    pub fn into_inner(self) -> relative_path::RelativePathBuf {
        self.0
    }
}

impl TryFrom<&str> for RelPath {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.replace('\\', "/");
        if value.starts_with('/') || std::path::Path::new(&value).has_root() {
            return Err("Path must be relative");
        }
        let path = relative_path::RelativePathBuf::from(value).normalize();
        if path.components().next() == Some(relative_path::Component::ParentDir) {
            return Err("Path must not leave the site root");
        }
        Ok(Self(path))
    }
}

impl TryFrom<String> for RelPath {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, fmt)
    }
}

impl std::ops::Deref for RelPath {
    type Target = relative_path::RelativePath;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_path()
    }
}

impl AsRef<str> for RelPath {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

static SLUG_INVALID_CHARS: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"([^a-zA-Z0-9]+)").unwrap());

/// Create a slug for a given title or file stem.
pub fn slugify<S: AsRef<str>>(name: S) -> String {
    slugify_str(name.as_ref())
}

fn slugify_str(name: &str) -> String {
    let name = deunicode::deunicode_with_tofu(name, "-");
    let slug = SLUG_INVALID_CHARS.replace_all(&name, "-");
    slug.trim_matches('-').to_lowercase()
}

/// Format a user-visible title out of a slug.
pub fn titleize_slug<S: AsRef<str>>(slug: S) -> String {
    slug.as_ref().split('-').map(title_case).join(" ")
}

fn title_case(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f
            .to_uppercase()
            .chain(c.flat_map(|t| t.to_lowercase()))
            .collect(),
    }
}

pub fn split_ext(name: &str) -> (&str, Option<&str>) {
    name.rsplit_once('.')
        .map(|(n, e)| (n, Some(e)))
        .unwrap_or((name, None))
}

static DATE_PREFIX_REF: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[- ](.*))?$").unwrap()
});

/// Split `2017-03-05-first-post` into its publish date and the remaining stem.
pub fn parse_file_stem(stem: &str) -> (Option<time::Date>, String) {
    let parts = DATE_PREFIX_REF.captures(stem).and_then(|caps| {
        let date = date_from_parts(&caps[1], &caps[2], &caps[3])?;
        let rest = caps.get(4).map(|m| m.as_str()).unwrap_or_default();
        Some((Some(date), rest.to_owned()))
    });

    parts.unwrap_or_else(|| (None, stem.to_owned()))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<time::Date> {
    match parse_file_stem(value.trim()) {
        (Some(date), rest) if rest.is_empty() => Some(date),
        _ => None,
    }
}

fn date_from_parts(year: &str, month: &str, day: &str) -> Option<time::Date> {
    let year: i32 = year.parse().ok()?;
    let month: u8 = month.parse().ok()?;
    let day: u8 = day.parse().ok()?;
    let month = time::Month::try_from(month).ok()?;
    time::Date::from_calendar_date(year, month, day).ok()
}
