//! Quote source configuration.

use serde::Deserialize;

/// Default Truncgil endpoint serving today's prices.
pub const DEFAULT_SOURCE_URL: &str = "https://finans.truncgil.com/v4/today.json";

/// Settings for the HTTP quote source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Endpoint returning the quote document.
    pub url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.into(),
            timeout_secs: 10,
        }
    }
}
