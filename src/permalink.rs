use anyhow::Context as _;

use crate::error::Result;

static PERMALINK_PARSER: once_cell::sync::Lazy<liquid::Parser> = once_cell::sync::Lazy::new(|| {
    liquid::ParserBuilder::with_stdlib()
        .build()
        .expect("the standard library always builds")
});

/// Variables every article template may reference.
pub const VARIABLES: &[&str] = &[
    "year", "month", "day", "i_month", "i_day", "slug", "lang", "category",
];

pub fn explode_permalink<S: AsRef<str>>(permalink: S, attributes: &liquid::Object) -> Result<String> {
    explode_permalink_string(permalink.as_ref(), attributes)
}

fn explode_permalink_string(permalink: &str, attributes: &liquid::Object) -> Result<String> {
    let p = PERMALINK_PARSER
        .parse(permalink)
        .with_context(|| format!("Failed to parse permalink `{permalink}`"))?;
    let mut p = p
        .render(attributes)
        .with_context(|| format!("Failed to render permalink `{permalink}`"))?;

    // Handle the user doing windows-style
    p = p.replace('\\', "/");

    // Handle cases where substitutions were blank
    while p.contains("//") {
        p = p.replace("//", "/");
    }

    if p.starts_with('/') {
        p.remove(0);
    }

    Ok(p)
}

/// Check that a template parses and only uses known [`VARIABLES`].
pub fn check_template(permalink: &str) -> Result<()> {
    let mut attributes = liquid::Object::new();
    for name in VARIABLES {
        attributes.insert((*name).into(), liquid::model::Value::scalar("x"));
    }
    explode_permalink(permalink, &attributes).map(|_| ())
}

pub fn format_url_as_file<S: AsRef<str>>(permalink: S) -> relative_path::RelativePathBuf {
    format_url_as_file_str(permalink.as_ref())
}

fn format_url_as_file_str(permalink: &str) -> relative_path::RelativePathBuf {
    let mut path_buf = relative_path::RelativePathBuf::from(permalink.trim_matches('/'));

    // explode the url if no extension was specified
    if path_buf.extension().is_none() {
        path_buf.push("index.html");
    }

    path_buf
}
