use std::collections::BTreeMap;
use std::fmt;

use liquid_core::model::KString;
use siteconf_config::Link;

use crate::permalink;

use super::Config;

static TIMEZONE: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(?:/[A-Za-z0-9_+\-]+)*$").unwrap()
});

static LANGUAGE: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})*$").unwrap()
});

/// A single problem found by [`Config::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dotted path of the offending setting, e.g. `links.social[1]`
    pub key: String,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Every problem found in a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<Issue>,
}

impl ValidationErrors {
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether `key` was reported.
    pub fn contains(&self, key: &str) -> bool {
        self.issues.iter().any(|i| i.key == key)
    }

    fn push(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue {
            key: key.into(),
            message: message.into(),
        });
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Config {
    /// Check the configuration as a whole, reporting every problem rather than the first.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        self.validate_site(&mut errors);
        self.validate_articles(&mut errors);
        self.validate_links(&mut errors);
        self.validate_statics(&mut errors);
        self.validate_markdown(&mut errors);

        if self.per_page <= 0 {
            errors.push(
                "pagination.per_page",
                format!("must be a positive integer, got {}", self.per_page),
            );
        }

        let integrations = [
            ("integrations.analytics_id", &self.integrations.analytics_id),
            ("integrations.comments_site", &self.integrations.comments_site),
        ];
        for (key, value) in integrations {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                errors.push(key, "must not be empty when set");
            }
        }

        errors.into_result()
    }

    fn validate_site(&self, errors: &mut ValidationErrors) {
        let site = &self.site;
        let required = [
            ("site.author", &site.author),
            ("site.name", &site.name),
            ("site.url", &site.url),
            ("site.timezone", &site.timezone),
            ("site.language", &site.language),
        ];
        for (key, value) in required {
            if let Err(message) = non_empty(value) {
                errors.push(key, message);
            }
        }

        if let Ok(url) = non_empty(&site.url) {
            match url::Url::parse(url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => errors.push(
                    "site.url",
                    format!("expected an http(s) URL, got scheme `{}`", parsed.scheme()),
                ),
                Err(err) => errors.push("site.url", format!("invalid URL `{url}`: {err}")),
            }
        }
        if let Ok(timezone) = non_empty(&site.timezone) {
            if !TIMEZONE.is_match(timezone) {
                errors.push(
                    "site.timezone",
                    format!("`{timezone}` is not a timezone name like `Europe/Paris`"),
                );
            }
        }
        if let Ok(language) = non_empty(&site.language) {
            if !LANGUAGE.is_match(language) {
                errors.push(
                    "site.language",
                    format!("`{language}` is not a language code like `en` or `pt-BR`"),
                );
            }
        }
    }

    fn validate_articles(&self, errors: &mut ValidationErrors) {
        for (key, template) in [
            ("articles.url", &self.article_url),
            ("articles.save_as", &self.article_save_as),
        ] {
            if template.trim().is_empty() {
                errors.push(key, "must not be empty");
            } else if let Err(err) = permalink::check_template(template) {
                errors.push(key, format!("{err:#}"));
            }
        }
    }

    fn validate_links(&self, errors: &mut ValidationErrors) {
        for (name, links) in self.link_collections() {
            for (i, link) in links.iter().enumerate() {
                if let Err(message) = check_link(link) {
                    errors.push(format!("links.{name}[{i}]"), message);
                }
            }
        }
    }

    fn validate_statics(&self, errors: &mut ValidationErrors) {
        for (path, dest) in &self.extra_path_metadata {
            let key = format!("static_files.extra_path_metadata.{path}");
            if !self.static_paths.contains(path) {
                errors.push(key.clone(), "is not listed in `static_files.paths`");
            }
            if dest.as_str().is_empty() {
                errors.push(key, "destination path must not be empty");
            }
        }
    }

    fn validate_markdown(&self, errors: &mut ValidationErrors) {
        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
        for name in self.markdown_extensions.keys() {
            if !siteconf_config::is_known_extension(name) {
                errors.push(
                    format!("markdown.extension_configs.{name}"),
                    "is not a recognized extension",
                );
            }
            let short_name = siteconf_config::extension_short_name(name);
            if let Some(other) = seen.insert(short_name, name.as_str()) {
                errors.push(
                    format!("markdown.extension_configs.{name}"),
                    format!("is also configured as `{other}`"),
                );
            }
        }
    }
}

fn non_empty(value: &Option<KString>) -> Result<&str, &'static str> {
    match value.as_deref().map(str::trim) {
        None => Err("is required"),
        Some("") => Err("must not be empty"),
        Some(value) => Ok(value),
    }
}

/// Labels must be present; URLs must be absolute or site-relative (`/about/`, `#top`).
fn check_link(link: &Link) -> Result<(), String> {
    if link.label.trim().is_empty() {
        return Err("label must not be empty".to_owned());
    }
    let target = link.url.trim();
    if target.is_empty() {
        return Err("URL must not be empty".to_owned());
    }
    match url::Url::parse(target) {
        Ok(_) => Ok(()),
        Err(url::ParseError::RelativeUrlWithoutBase)
            if target.starts_with('/') || target.starts_with('#') =>
        {
            let base = url::Url::parse("http://localhost/").expect("static URL is valid");
            base.join(target)
                .map(|_| ())
                .map_err(|err| format!("invalid URL `{target}`: {err}"))
        }
        Err(err) => Err(format!("invalid URL `{target}`: {err}")),
    }
}
