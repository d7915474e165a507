//! Handlers for the `check` subcommands.

use std::path::Path;

use super::command::ConfigPathArg;
use super::output;
use crate::adapter::outbound::telegram::TelegramPublisher;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, DEFAULT_CONFIG_PATH};
use crate::port::Publisher;

/// Validate configuration and report what would be used.
pub fn execute_config(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load_from(args.config.as_deref())?;

    output::section("Configuration");
    match &args.config {
        Some(path) => output::field("File", path.display()),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            output::field("File", DEFAULT_CONFIG_PATH);
        }
        None => output::field("File", "(not found, using defaults)"),
    }
    output::field("Source", &config.source.url);
    output::field("Timeout", format!("{}s", config.source.timeout_secs));
    output::field("Interval", format!("{}s", config.schedule.interval_secs));
    output::field("Send timeout", format!("{}s", config.telegram.timeout_secs));
    output::field("Footer", &config.message.footer);

    match config.telegram.credentials() {
        Ok(credentials) => {
            output::field("Chat ID", credentials.chat_id);
            output::field("Bot token", credentials.masked_token());
            output::success("Configuration is valid");
        }
        Err(e) => {
            output::warning(&format!("Telegram credentials unusable: {e}"));
            output::warning("Set BOT_TOKEN and CHAT_ID in the environment or a .env file");
        }
    }

    Ok(())
}

/// Send a test message to the configured chat.
pub async fn execute_telegram(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load_from(args.config.as_deref())?;
    let credentials = config.telegram.credentials()?;

    output::section("Telegram Check");
    output::field("Bot token", credentials.masked_token());
    output::field("Chat ID", credentials.chat_id);

    let publisher = TelegramPublisher::from_config(&credentials, &config.telegram)?;
    publisher
        .publish("🧪 *Ezeogli Bot test message*\n\nConfiguration validated\\!")
        .await?;

    output::success("Telegram test message sent");
    Ok(())
}
