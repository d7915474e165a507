//! Composition root: wires adapters into the poller.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::telegram::TelegramPublisher;
use crate::adapter::outbound::truncgil::TruncgilClient;
use crate::application::Poller;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{Publisher, QuoteSource};

/// Build the quote source described by `[source]`.
#[must_use]
pub fn build_source(config: &Config) -> Arc<dyn QuoteSource> {
    Arc::new(TruncgilClient::from_config(&config.source))
}

/// Build the Telegram publisher.
///
/// # Errors
///
/// Fails when the bot token or chat id is missing or malformed.
pub fn build_publisher(config: &Config) -> Result<Arc<dyn Publisher>> {
    let credentials = config.telegram.credentials()?;
    Ok(Arc::new(TelegramPublisher::from_config(
        &credentials,
        &config.telegram,
    )?))
}

/// Build a poller from configuration.
///
/// Credentials are validated here, once, before any cycle runs.
///
/// # Errors
///
/// Propagates credential errors from [`build_publisher`].
pub fn build_poller(config: &Config) -> Result<Poller> {
    let publisher = build_publisher(config)?;
    let source = build_source(config);

    info!(
        url = %config.source.url,
        interval_secs = config.schedule.interval_secs,
        "Poller configured"
    );

    Ok(Poller::new(
        source,
        publisher,
        config.template(),
        config.schedule.interval(),
    ))
}
