//! CLI module graph.

pub mod check;
pub mod command;
pub mod output;
pub mod preview;
pub mod run;

use command::{CheckCommand, Cli, Commands};

use crate::error::Result;

/// Dispatch a parsed command line to its handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.quiet));

    match cli.command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Preview(args) => preview::execute(&args).await,
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(&args),
        Commands::Check(CheckCommand::Telegram(args)) => check::execute_telegram(&args).await,
    }
}
