//! Recording publisher.

use std::sync::{Arc, Mutex};

use altin::error::{PublishError, Result};
use altin::port::Publisher;
use async_trait::async_trait;
use tokio::time::Instant;

/// Thread-safe message collector for publish assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    messages: Arc<Mutex<Vec<(Instant, String)>>>,
    fail_with: Option<String>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publisher that records the attempt but always fails.
    pub fn failing(reason: &str) -> Self {
        Self {
            messages: Arc::default(),
            fail_with: Some(reason.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.messages.lock().expect("lock messages").len()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .expect("lock messages")
            .iter()
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub fn sent_at(&self) -> Vec<Instant> {
        self.messages
            .lock()
            .expect("lock messages")
            .iter()
            .map(|(at, _)| *at)
            .collect()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, text: &str) -> Result<()> {
        self.messages
            .lock()
            .expect("lock messages")
            .push((Instant::now(), text.to_string()));

        match &self.fail_with {
            Some(reason) => Err(PublishError::Telegram(reason.clone()).into()),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "Recording"
    }
}
