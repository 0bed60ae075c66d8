use clap::Parser;

mod args;
mod check;
mod debug;
mod error;
mod init;
mod permalink;
mod statics;

use crate::error::*;

/// Load, layer and validate static-site configuration
#[derive(Debug, Parser)]
#[command(name = "siteconf", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten, next_help_heading = "Logging")]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Init(init::InitArgs),
    Check(check::CheckArgs),
    Permalink(permalink::PermalinkArgs),
    Static(statics::StaticArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> Result<()> {
        match self {
            Self::Init(cmd) => cmd.run(),
            Self::Check(cmd) => cmd.run(),
            Self::Permalink(cmd) => cmd.run(),
            Self::Static(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    args::init_logging(&cli.verbose);

    cli.command.run().map_err(|err| {
        anstream::eprintln!("error: {err:#}");
        proc_exit::Code::FAILURE.as_exit()
    })
}
