//! Command-line interface definitions.
//!
//! Defines the CLI structure for the altin bot using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Turkish gold prices, posted to Telegram on a schedule
#[derive(Parser, Debug)]
#[command(name = "altin")]
#[command(version)]
pub struct Cli {
    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the polling loop (foreground)
    Run(RunArgs),

    /// Fetch prices once and print the message without sending it
    Preview(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `altin check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration and credentials.
    Config(ConfigPathArg),
    /// Send a test message to the configured chat.
    Telegram(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Configuration file; without it `config.toml` is read if present
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Configuration file; without it `config.toml` is read if present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stop after this many cycles instead of running forever
    #[arg(long)]
    pub cycles: Option<u64>,

    /// Override the interval between cycles, in seconds
    #[arg(long)]
    pub interval: Option<u64>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
