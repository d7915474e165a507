//! Handler for the `preview` command.

use chrono::Local;

use super::command::ConfigPathArg;
use super::output;
use crate::domain::render_message;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_source;
use crate::infrastructure::config::settings::Config;

/// Fetch once and print the rendered message. Needs no Telegram credentials.
pub async fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load_from(args.config.as_deref())?;
    config.init_logging();

    let source = build_source(&config);
    let record = source.fetch().await?;
    let message = render_message(&record, Local::now().naive_local(), &config.template());

    output::section("Preview (MarkdownV2)");
    println!();
    println!("{message}");
    println!();
    output::field("Instruments", format!("{}/4 reported", record.len()));

    Ok(())
}
