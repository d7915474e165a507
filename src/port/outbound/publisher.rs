//! Publisher port.

use async_trait::async_trait;

use crate::error::Result;

/// Delivers a rendered message to the configured destination.
///
/// Failures are returned to the caller; implementations do not retry.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Send `text` as a single message.
    async fn publish(&self, text: &str) -> Result<()>;

    /// Human-readable name for logs.
    fn name(&self) -> &'static str;
}
