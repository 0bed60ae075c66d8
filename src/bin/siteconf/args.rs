use std::io::Write;
use std::path;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _siteconf.yml]
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<path::PathBuf>,

    /// Output folder [default: ./output]
    #[arg(short, long, value_name = "DIR")]
    pub(crate) destination: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<siteconf::Config> {
        // Fetch config information if available
        let config = if let Some(config_path) = self.config.as_deref() {
            siteconf_config::Config::load(config_path).map_err(|e| {
                anyhow::Error::new(e)
                    .context(format!("Error reading config file {}", config_path.display()))
            })?
        } else {
            let cwd = std::env::current_dir().unwrap_or_default();
            siteconf_config::Config::from_cwd(cwd)?
        };

        let mut config = siteconf::Config::from_config(config);
        if let Some(destination) = self.destination.as_ref() {
            debug!("Overriding destination with {}", destination.display());
            config.destination = destination.clone();
        }

        Ok(config)
    }
}

pub(crate) fn init_logging(
    verbose: &clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
) {
    let mut builder = env_logger::Builder::new();
    builder.format(|buf, record| {
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(buf, "{:8} {}", level, record.args())
    });
    builder.filter_level(verbose.log_level_filter());
    builder.target(env_logger::Target::Stderr);
    builder.init();
}
