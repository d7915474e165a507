//! Handler for the `run` command.

use tokio::signal;
use tracing::info;

use super::command::RunArgs;
use super::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap::build_poller;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config = load_run_config(args)?;
    config.init_logging();

    // Credentials are checked here, before the first cycle.
    let poller = build_poller(&config)?;
    let credentials = config.telegram.credentials()?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Source", &config.source.url);
    output::field("Chat ID", credentials.chat_id);
    output::field("Bot token", credentials.masked_token());
    output::field(
        "Interval",
        format!(
            "{}s ({} min)",
            config.schedule.interval_secs,
            config.schedule.interval_secs / 60
        ),
    );
    if let Some(cycles) = args.cycles {
        output::field("Cycles", cycles);
    }

    info!(chat_id = credentials.chat_id, "Gold price bot started");

    match args.cycles {
        Some(cycles) => {
            let stats = poller.run_cycles(cycles).await;
            output::section("Summary");
            output::field("Cycles", stats.cycles);
            output::field("Published", stats.published);
            output::field(
                "Failed",
                stats.fetch_failures + stats.publish_failures + stats.panics,
            );
        }
        None => {
            tokio::select! {
                () = poller.run() => {}
                _ = signal::ctrl_c() => {
                    info!("Shutdown signal received");
                }
            }
        }
    }

    info!("Gold price bot stopped");
    Ok(())
}

/// Load configuration and apply command-line overrides.
fn load_run_config(args: &RunArgs) -> Result<Config> {
    let mut config = Config::load_from(args.config.as_deref())?;

    if let Some(interval) = args.interval {
        config.schedule.interval_secs = interval;
    }
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".into();
    }
    if args.cycles == Some(0) {
        return Err(ConfigError::InvalidValue {
            field: "cycles",
            reason: "must be greater than zero".into(),
        }
        .into());
    }

    config.validate()?;
    Ok(config)
}
