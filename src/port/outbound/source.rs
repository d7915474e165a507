//! Quote source port.

use async_trait::async_trait;

use crate::domain::QuoteRecord;
use crate::error::Result;

/// Fetches the current quote record.
///
/// One call issues at most one request. Implementations return an error for
/// transport failures, unexpected statuses and undecodable bodies, and never
/// retry internally.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the latest quotes.
    async fn fetch(&self) -> Result<QuoteRecord>;

    /// Human-readable name for logs.
    fn name(&self) -> &'static str;
}
