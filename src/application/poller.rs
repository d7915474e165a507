//! The fetch, render, publish cycle and the loop that repeats it.
//!
//! The loop is strictly sequential: one cycle runs to completion, then the
//! poller sleeps the fixed interval, whatever the cycle's outcome. No failure
//! ends the loop; panics inside a stage are caught and reported like errors.

use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use futures_util::FutureExt;
use tokio::time::{sleep, Instant};
use tracing::{error, info, warn};

use crate::domain::{render_message, MessageTemplate};
use crate::port::{Publisher, QuoteSource};

/// How a single cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The message was delivered.
    Published,
    /// The source failed; nothing was published.
    FetchFailed(String),
    /// The message was rendered but delivery failed.
    PublishFailed(String),
    /// A stage panicked.
    Panicked(String),
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Published => f.write_str("published"),
            Self::FetchFailed(reason) => write!(f, "fetch failed: {reason}"),
            Self::PublishFailed(reason) => write!(f, "publish failed: {reason}"),
            Self::Panicked(reason) => write!(f, "panicked: {reason}"),
        }
    }
}

/// Tally over a bounded run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    pub cycles: u64,
    pub published: u64,
    pub fetch_failures: u64,
    pub publish_failures: u64,
    pub panics: u64,
}

impl CycleStats {
    fn record(&mut self, outcome: &CycleOutcome) {
        self.cycles += 1;
        match outcome {
            CycleOutcome::Published => self.published += 1,
            CycleOutcome::FetchFailed(_) => self.fetch_failures += 1,
            CycleOutcome::PublishFailed(_) => self.publish_failures += 1,
            CycleOutcome::Panicked(_) => self.panics += 1,
        }
    }
}

/// Drives the periodic fetch, render, publish loop.
pub struct Poller {
    source: Arc<dyn QuoteSource>,
    publisher: Arc<dyn Publisher>,
    template: MessageTemplate,
    interval: Duration,
}

impl Poller {
    #[must_use]
    pub fn new(
        source: Arc<dyn QuoteSource>,
        publisher: Arc<dyn Publisher>,
        template: MessageTemplate,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            publisher,
            template,
            interval,
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Run forever. Only returns if the surrounding task is cancelled.
    pub async fn run(&self) {
        info!(
            source = self.source.name(),
            publisher = self.publisher.name(),
            interval_secs = self.interval.as_secs(),
            "Poller started"
        );

        loop {
            self.run_cycle().await;
            sleep(self.interval).await;
        }
    }

    /// Run `cycles` cycles, sleeping the interval between consecutive ones.
    pub async fn run_cycles(&self, cycles: u64) -> CycleStats {
        let mut stats = CycleStats::default();

        for n in 0..cycles {
            if n > 0 {
                sleep(self.interval).await;
            }
            let outcome = self.run_cycle().await;
            stats.record(&outcome);
        }

        stats
    }

    /// Run one cycle and log its outcome. Never panics, never fails.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let started = Instant::now();

        let outcome = match AssertUnwindSafe(self.cycle()).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(panic) => CycleOutcome::Panicked(panic_message(panic.as_ref())),
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &outcome {
            CycleOutcome::Published => info!(elapsed_ms, "Prices sent successfully"),
            CycleOutcome::FetchFailed(reason) => {
                warn!(error = %reason, elapsed_ms, "Failed to fetch prices");
            }
            CycleOutcome::PublishFailed(reason) => {
                warn!(error = %reason, elapsed_ms, "Failed to send prices");
            }
            CycleOutcome::Panicked(reason) => {
                error!(error = %reason, elapsed_ms, "Cycle aborted unexpectedly");
            }
        }

        outcome
    }

    async fn cycle(&self) -> CycleOutcome {
        let record = match self.source.fetch().await {
            Ok(record) => record,
            Err(e) => return CycleOutcome::FetchFailed(e.to_string()),
        };

        let text = render_message(&record, Local::now().naive_local(), &self.template);

        match self.publisher.publish(&text).await {
            Ok(()) => CycleOutcome::Published,
            Err(e) => CycleOutcome::PublishFailed(e.to_string()),
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
