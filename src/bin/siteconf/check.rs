use crate::args;
use crate::error::*;

/// Validate the configuration, reporting every problem
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;

        match config.validate() {
            Ok(()) => {
                info!("Configuration is valid");
                Ok(())
            }
            Err(errors) => {
                for issue in errors.issues() {
                    anstream::println!("{issue}");
                }
                anyhow::bail!("{} problem(s) found in configuration", errors.issues().len())
            }
        }
    }
}
