//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is read from an optional TOML file; the Telegram secrets are
//! always taken from the environment.
//!
//! # Example
//!
//! ```no_run
//! use altin::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_from(None)?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::message::MessageConfig;
use super::schedule::ScheduleConfig;
use super::source::SourceConfig;
use super::telegram::TelegramConfig;
use crate::domain::MessageTemplate;
use crate::error::{ConfigError, Result};

/// File read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main application configuration.
///
/// Every section is optional in the TOML file and falls back to its default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quote source endpoint and timeout.
    pub source: SourceConfig,

    /// Cycle interval.
    pub schedule: ScheduleConfig,

    /// Telegram destination; secrets filled from the environment.
    pub telegram: TelegramConfig,

    /// Message title and footer.
    pub message: MessageConfig,

    /// Logging and tracing configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file, then apply environment secrets.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        config.telegram.load_secrets(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file means "all defaults".
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for files that exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }

        let mut config = Self::default();
        config.telegram.load_secrets(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load an explicitly named file strictly, or the optional default one.
    ///
    /// # Errors
    ///
    /// An explicit `path` that cannot be read is `ConfigError::ReadFile`;
    /// otherwise same as [`Config::load_or_default`].
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_or_default(DEFAULT_CONFIG_PATH),
        }
    }

    /// Parse and validate configuration from TOML content.
    ///
    /// Does not touch the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check non-secret settings. Credentials are checked separately by
    /// [`TelegramConfig::credentials`] since preview mode does not need them.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<()> {
        if self.source.url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "source.url" }.into());
        }
        if !self.source.url.starts_with("http://") && !self.source.url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "source.url",
                reason: format!("'{}' is not an http(s) URL", self.source.url),
            }
            .into());
        }
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "source.timeout_secs",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        if self.schedule.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "schedule.interval_secs",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        if let Some(api_url) = &self.telegram.api_url {
            if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    field: "telegram.api_url",
                    reason: format!("'{api_url}' is not an http(s) URL"),
                }
                .into());
            }
        }
        if self.telegram.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "telegram.timeout_secs",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Template used to render each message.
    #[must_use]
    pub fn template(&self) -> MessageTemplate {
        MessageTemplate::from(&self.message)
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
