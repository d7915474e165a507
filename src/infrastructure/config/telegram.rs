//! Telegram destination configuration.
//!
//! The bot token and chat id are secrets and only ever come from the
//! environment (`BOT_TOKEN`, `CHAT_ID`, with `TELEGRAM_BOT_TOKEN` and
//! `TELEGRAM_CHAT_ID` accepted as fallbacks). The TOML section carries the
//! non-secret knobs.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

const TOKEN_VARS: [&str; 2] = ["BOT_TOKEN", "TELEGRAM_BOT_TOKEN"];
const CHAT_ID_VARS: [&str; 2] = ["CHAT_ID", "TELEGRAM_CHAT_ID"];

/// Telegram settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Bot API token, loaded from the environment.
    #[serde(skip)]
    pub bot_token: Option<String>,
    /// Raw destination chat id, loaded from the environment.
    #[serde(skip)]
    pub chat_id: Option<String>,
    /// Upper bound on a single send, in seconds.
    pub timeout_secs: u64,
    /// Bot API base URL; `None` means `https://api.telegram.org`.
    pub api_url: Option<String>,
}

/// Validated credentials needed to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramCredentials {
    pub bot_token: String,
    pub chat_id: i64,
}

impl TelegramCredentials {
    /// Token with the middle masked out, for display.
    #[must_use]
    pub fn masked_token(&self) -> String {
        let token = &self.bot_token;
        let chars: Vec<char> = token.chars().collect();
        if chars.len() >= 15 {
            let head: String = chars[..10].iter().collect();
            let tail: String = chars[chars.len() - 5..].iter().collect();
            format!("{head}...{tail}")
        } else {
            let head: String = chars.iter().take(4).collect();
            format!("{head}...")
        }
    }
}

impl TelegramConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Fill the secret fields using `lookup` (usually `std::env::var`).
    pub fn load_secrets<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(*name))
                .find(|value| !value.trim().is_empty())
        };

        if let Some(token) = first(&TOKEN_VARS) {
            self.bot_token = Some(token);
        }
        if let Some(chat_id) = first(&CHAT_ID_VARS) {
            self.chat_id = Some(chat_id);
        }
    }

    /// Validate and return the credentials.
    ///
    /// # Errors
    ///
    /// `MissingField` when either secret is absent or blank, `InvalidValue`
    /// when the chat id is not an integer.
    pub fn credentials(&self) -> Result<TelegramCredentials> {
        let bot_token = self
            .bot_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingField { field: "BOT_TOKEN" })?;

        let raw_chat_id = self
            .chat_id
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(ConfigError::MissingField { field: "CHAT_ID" })?;

        let chat_id = raw_chat_id
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidValue {
                field: "CHAT_ID",
                reason: format!("'{raw_chat_id}' is not an integer: {e}"),
            })?;

        Ok(TelegramCredentials {
            bot_token: bot_token.to_string(),
            chat_id,
        })
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            timeout_secs: 30,
            api_url: None,
        }
    }
}
