//! Telegram publisher backed by teloxide.

use std::time::Duration;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::debug;

use crate::error::{ConfigError, PublishError, Result};
use crate::infrastructure::config::telegram::{TelegramConfig, TelegramCredentials};
use crate::port::Publisher;

/// Publishes `MarkdownV2` messages to one chat.
///
/// Each send is bounded by `timeout` so a stalled Bot API call cannot hold up
/// the polling loop.
pub struct TelegramPublisher {
    bot: Bot,
    chat_id: ChatId,
    timeout: Duration,
}

impl TelegramPublisher {
    #[must_use]
    pub fn new(credentials: &TelegramCredentials, timeout: Duration) -> Self {
        Self {
            bot: Bot::new(&credentials.bot_token),
            chat_id: ChatId(credentials.chat_id),
            timeout,
        }
    }

    /// Publisher talking to a self-hosted Bot API server instead of
    /// `api.telegram.org`.
    ///
    /// # Errors
    ///
    /// `InvalidValue` when `api_url` does not parse.
    pub fn with_api_url(
        credentials: &TelegramCredentials,
        timeout: Duration,
        api_url: &str,
    ) -> Result<Self> {
        let url = reqwest::Url::parse(api_url).map_err(|e| ConfigError::InvalidValue {
            field: "telegram.api_url",
            reason: format!("'{api_url}': {e}"),
        })?;

        let mut publisher = Self::new(credentials, timeout);
        publisher.bot = publisher.bot.set_api_url(url);
        Ok(publisher)
    }

    /// Build from `[telegram]`, honouring `api_url` when set.
    ///
    /// # Errors
    ///
    /// Propagates an unparseable `api_url`.
    pub fn from_config(credentials: &TelegramCredentials, config: &TelegramConfig) -> Result<Self> {
        match config.api_url.as_deref() {
            Some(api_url) => Self::with_api_url(credentials, config.timeout(), api_url),
            None => Ok(Self::new(credentials, config.timeout())),
        }
    }
}

#[async_trait]
impl Publisher for TelegramPublisher {
    async fn publish(&self, text: &str) -> Result<()> {
        let request = self
            .bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::MarkdownV2);

        match tokio::time::timeout(self.timeout, async move { request.await }).await {
            Ok(Ok(message)) => {
                debug!(
                    chat_id = self.chat_id.0,
                    message_id = message.id.0,
                    "Telegram message delivered"
                );
                Ok(())
            }
            Ok(Err(e)) => Err(PublishError::Telegram(e.to_string()).into()),
            Err(_) => Err(PublishError::Timeout {
                seconds: self.timeout.as_secs(),
            }
            .into()),
        }
    }

    fn name(&self) -> &'static str {
        "Telegram"
    }
}
