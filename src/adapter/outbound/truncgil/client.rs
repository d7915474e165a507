//! Truncgil REST client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, warn};

use super::dto::TodayResponse;
use crate::domain::QuoteRecord;
use crate::error::{FetchError, Result};
use crate::infrastructure::config::source::SourceConfig;
use crate::port::QuoteSource;

/// HTTP client for the Truncgil `today.json` endpoint.
///
/// Each fetch is a single GET bounded by the configured timeout. Anything
/// other than `200 OK` is an error; there are no retries.
pub struct TruncgilClient {
    http: HttpClient,
    url: String,
}

impl TruncgilClient {
    /// Create a client for `url` with a whole-request `timeout`.
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("altin/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.url.clone(), Duration::from_secs(config.timeout_secs))
    }

    /// Fetch and decode the raw document.
    pub async fn get_today(&self) -> Result<TodayResponse> {
        debug!(url = %self.url, "Fetching gold prices");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(FetchError::from)?;
        let document: TodayResponse =
            serde_json::from_slice(&body).map_err(FetchError::from)?;

        Ok(document)
    }
}

#[async_trait]
impl QuoteSource for TruncgilClient {
    async fn fetch(&self) -> Result<QuoteRecord> {
        let record = QuoteRecord::from(self.get_today().await?);

        // A 200 with none of the tracked keys is an outage page, not prices.
        if record.is_empty() {
            return Err(FetchError::Empty {
                url: self.url.clone(),
            }
            .into());
        }

        if record.len() < 4 {
            warn!(
                reported = record.len(),
                "Source omitted some instruments, rendering zeroes"
            );
        }

        Ok(record)
    }

    fn name(&self) -> &'static str {
        "Truncgil"
    }
}
