use std::collections::BTreeMap;
use std::fs;
use std::path;

use anyhow::Context as _;
use relative_path::RelativePathBuf;
use siteconf_core::Source;

use crate::error::Result;
use crate::Config;

/// One file to copy verbatim into the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticEntry {
    pub source: path::PathBuf,
    pub rel_path: RelativePathBuf,
    /// Destination, relative to the output directory
    pub dest: RelativePathBuf,
}

/// Every static file of a site and where it lands in the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPlan {
    entries: Vec<StaticEntry>,
}

impl StaticPlan {
    pub fn new(config: &Config) -> Result<Self> {
        for static_path in &config.static_paths {
            if !static_path.to_path(&config.source).exists() {
                log::warn!(
                    "Static path `{}` does not exist under {:?}, skipping",
                    static_path,
                    config.source
                );
            }
        }

        let source = Source::new(&config.source, std::iter::empty::<&str>())?;
        let mut entries = Vec::new();
        let mut destinations = BTreeMap::new();
        for file in source.iter() {
            if !config
                .static_paths
                .iter()
                .any(|p| file.is_within(p.as_path()))
            {
                continue;
            }
            let key = siteconf_config::RelPath::from_unchecked(file.rel_path.as_str());
            let dest = match config.extra_path_metadata.get(&key) {
                Some(dest) => {
                    log::debug!("Renaming `{}` to `{}`", file.rel_path, dest);
                    dest.clone().into_inner()
                }
                None => file.rel_path.clone(),
            };
            if let Some(other) = destinations.insert(dest.clone(), file.rel_path.clone()) {
                anyhow::bail!(
                    "Static files `{}` and `{}` would both be copied to `{}`",
                    other,
                    file.rel_path,
                    dest
                );
            }
            entries.push(StaticEntry {
                source: file.abs_path,
                rel_path: file.rel_path,
                dest,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[StaticEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy every entry under `dest_root`, creating directories as needed.
    pub fn copy(&self, dest_root: &path::Path) -> Result<()> {
        for entry in &self.entries {
            let target = entry.dest.to_path(dest_root);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Could not create {}", parent.display()))?;
            }
            fs::copy(&entry.source, &target).with_context(|| {
                format!(
                    "Could not copy {} to {}",
                    entry.source.display(),
                    target.display()
                )
            })?;
            log::debug!("Copied `{}` to {:?}", entry.rel_path, target);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fixture() -> Config {
        let raw = siteconf_config::Config::load("tests/fixtures/blog/_siteconf.yml").unwrap();
        Config::from_config(raw)
    }

    #[test]
    fn plan_renames_cname() {
        let plan = StaticPlan::new(&fixture()).unwrap();
        let pairs: Vec<_> = plan
            .entries()
            .iter()
            .map(|e| (e.rel_path.as_str(), e.dest.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("extra/CNAME", "CNAME"),
                ("images/avatar.jpg", "images/avatar.jpg"),
            ]
        );
    }

    #[test]
    fn plan_skips_missing_paths() {
        let mut config = fixture();
        config.static_paths.push(siteconf_config::RelPath::from_unchecked("downloads"));
        let plan = StaticPlan::new(&config).unwrap();
        assert_eq!(plan.entries().len(), 2);
    }

    #[test]
    fn plan_without_source_dir() {
        let mut config = fixture();
        config.source = "tests/fixtures/blog/missing".into();
        let plan = StaticPlan::new(&config).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn plan_rejects_shared_destination() {
        let mut config = fixture();
        config.extra_path_metadata.insert(
            siteconf_config::RelPath::from_unchecked("extra/CNAME"),
            siteconf_config::RelPath::from_unchecked("images/avatar.jpg"),
        );
        let err = StaticPlan::new(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Static files `extra/CNAME` and `images/avatar.jpg` would both be copied to `images/avatar.jpg`"
        );
    }

    #[test]
    fn copy_into_output() {
        let dest = tempfile::tempdir().unwrap();
        let plan = StaticPlan::new(&fixture()).unwrap();
        plan.copy(dest.path()).unwrap();

        let cname = fs::read_to_string(dest.path().join("CNAME")).unwrap();
        assert_eq!(cname.trim(), "jonnyreeves.co.uk");
        assert!(dest.path().join("images/avatar.jpg").is_file());
        assert!(!dest.path().join("extra").exists());
    }
}
