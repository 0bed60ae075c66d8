use std::collections::BTreeMap;

use liquid_core::model::KString;

/// Prefix some configurations use for the built-in extension names.
pub const EXTENSION_PREFIX: &str = "markdown.extensions.";

/// Extensions a consuming generator is expected to understand.
pub const KNOWN_EXTENSIONS: &[&str] = &[
    "abbr",
    "admonition",
    "attr_list",
    "codehilite",
    "def_list",
    "extra",
    "fenced_code",
    "footnotes",
    "legacy_attrs",
    "legacy_em",
    "md_in_html",
    "meta",
    "nl2br",
    "sane_lists",
    "smarty",
    "tables",
    "toc",
    "wikilinks",
];

/// Markdown processing options, keyed by extension name.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Markdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_configs: Option<BTreeMap<KString, liquid_core::Object>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<KString>,
}

impl Markdown {
    /// Extensions are merged by short name, keeping the spelling of `self`; within an
    /// extension the options of `self` win.
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            extension_configs,
            output_format,
        } = self;
        let extension_configs = match (extension_configs, &other.extension_configs) {
            (Some(mut primary), Some(secondary)) => {
                for (name, options) in secondary {
                    let short_name = extension_short_name(name);
                    let own_name = primary
                        .keys()
                        .find(|own| extension_short_name(own) == short_name)
                        .cloned();
                    match own_name {
                        Some(own_name) => {
                            let own = primary.remove(&own_name).unwrap_or_default();
                            primary.insert(own_name, merge_objects(own, options));
                        }
                        None => {
                            primary.insert(name.clone(), options.clone());
                        }
                    }
                }
                Some(primary)
            }
            (primary, secondary) => primary.or_else(|| secondary.clone()),
        };
        Self {
            extension_configs,
            output_format: output_format.or_else(|| other.output_format.clone()),
        }
    }
}

/// Strip the conventional module prefix from an extension name.
pub fn extension_short_name(name: &str) -> &str {
    name.strip_prefix(EXTENSION_PREFIX).unwrap_or(name)
}

pub fn is_known_extension(name: &str) -> bool {
    KNOWN_EXTENSIONS.contains(&extension_short_name(name))
}

/// Shallow merge of `liquid_core::Object`'s
fn merge_objects(
    mut primary: liquid_core::Object,
    secondary: &liquid_core::Object,
) -> liquid_core::Object {
    for (key, value) in secondary {
        primary
            .entry(key.to_owned())
            .or_insert_with(|| value.clone());
    }
    primary
}
