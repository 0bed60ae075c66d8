use crate::args;
use crate::error::*;

/// Copy static paths into the output folder
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct StaticArgs {
    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl StaticArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;

        let plan = siteconf::statics::StaticPlan::new(&config)?;
        if plan.is_empty() {
            info!("No static files to copy");
            return Ok(());
        }

        plan.copy(&config.destination)?;
        info!(
            "Copied {} static file(s) into {}",
            plan.entries().len(),
            config.destination.display()
        );

        Ok(())
    }
}
