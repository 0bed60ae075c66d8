use crate::args;
use crate::error::*;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the merged config with defaults applied
    Config {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the `site` object themes are rendered with
    Site {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Print article sources and their URLs
    Articles {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Print static files and where they are published
    Statics {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                anstream::println!("{config}");
            }
            Self::Site { config } => {
                let config = config.load_config()?;
                // Round-trip through `serde_json::Value` for a stable key order
                let site = serde_json::to_value(config.site_object())?;
                anstream::println!("{}", serde_json::to_string_pretty(&site)?);
            }
            Self::Articles { config } => {
                let config = config.load_config()?;
                for file in siteconf::articles::discover(&config)? {
                    let meta = siteconf::articles::meta_for(&file);
                    let url = config.article_url(&meta)?;
                    anstream::println!("{} -> {}", file.rel_path, url);
                }
            }
            Self::Statics { config } => {
                let config = config.load_config()?;
                let plan = siteconf::statics::StaticPlan::new(&config)?;
                for entry in plan.entries() {
                    anstream::println!("{} -> {}", entry.rel_path, entry.dest);
                }
            }
        }

        Ok(())
    }
}
