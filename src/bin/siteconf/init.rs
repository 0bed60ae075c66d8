use std::fs;
use std::path;

use anyhow::Context as _;

use crate::error::*;

const STARTER_CONFIG: &str = "site:
  author: Your Name
  name: My Blog
  url: http://localhost:8000
  timezone: Europe/London
  language: en
articles:
  url: \"{{year}}/{{month}}/{{slug}}/\"
  save_as: \"{{year}}/{{month}}/{{slug}}/index.html\"
feeds:
  all_atom: false
  category_atom: false
  translation_atom: false
pagination:
  per_page: 10
markdown:
  extension_configs:
    markdown.extensions.codehilite:
      css_class: highlight
    markdown.extensions.extra: {}
    markdown.extensions.meta: {}
links:
  blogroll: []
  social: []
static_files:
  paths:
    - images
";

/// Create a starter config in a site folder
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Site folder
    #[arg(value_name = "DIR", default_value = "./")]
    pub(crate) directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let dest = self.directory.join(siteconf_config::PROJECT_FILE);
        if dest.exists() {
            anyhow::bail!("{} already exists", dest.display());
        }

        fs::create_dir_all(&self.directory)
            .with_context(|| format!("Failed to create {}", self.directory.display()))?;
        fs::write(&dest, STARTER_CONFIG)
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        info!("Created {}", dest.display());

        Ok(())
    }
}
