use std::collections::BTreeMap;

use crate::RelPath;

/// Files copied verbatim into the build output.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct StaticFiles {
    /// Files or directories under the content source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<RelPath>>,
    /// Output overrides for individual static files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_path_metadata: Option<BTreeMap<RelPath, PathMetadata>>,
}

impl StaticFiles {
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            paths,
            extra_path_metadata,
        } = self;
        Self {
            paths: paths.or_else(|| other.paths.clone()),
            extra_path_metadata: extra_path_metadata.or_else(|| other.extra_path_metadata.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct PathMetadata {
    /// Destination, relative to the output directory
    pub path: RelPath,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_cname_mapping() {
        let statics: StaticFiles = serde_yaml::from_str(
            "paths: [images, extra/CNAME]\nextra_path_metadata:\n  extra/CNAME: {path: CNAME}",
        )
        .unwrap();
        assert_eq!(
            statics.paths.unwrap(),
            vec![
                RelPath::from_unchecked("images"),
                RelPath::from_unchecked("extra/CNAME")
            ]
        );
        let metadata = statics.extra_path_metadata.unwrap();
        assert_eq!(
            metadata[&RelPath::from_unchecked("extra/CNAME")].path,
            RelPath::from_unchecked("CNAME")
        );
    }

    #[test]
    fn reject_absolute_destination() {
        let result: Result<StaticFiles, _> =
            serde_yaml::from_str("extra_path_metadata:\n  extra/CNAME: {path: /CNAME}");
        assert!(result.is_err());
    }
}
