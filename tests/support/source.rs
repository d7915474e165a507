//! Scripted quote source.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use altin::domain::QuoteRecord;
use altin::error::{FetchError, Result};
use altin::port::QuoteSource;
use async_trait::async_trait;
use tokio::time::Instant;

/// One scripted response.
#[derive(Debug, Clone)]
pub enum Step {
    Record(QuoteRecord),
    Status(u16),
    Panic(&'static str),
}

/// Quote source that replays a script and remembers when it was called.
///
/// Once the script runs out, the last step repeats.
#[derive(Clone)]
pub struct ScriptedSource {
    steps: Arc<Mutex<VecDeque<Step>>>,
    last: Arc<Mutex<Option<Step>>>,
    calls: Arc<Mutex<Vec<Instant>>>,
}

impl ScriptedSource {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into_iter().collect())),
            last: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn always(record: QuoteRecord) -> Self {
        Self::new([Step::Record(record)])
    }

    pub fn failing(status: u16) -> Self {
        Self::new([Step::Status(status)])
    }

    pub fn calls(&self) -> Vec<Instant> {
        self.calls.lock().expect("lock source calls").clone()
    }

    fn next_step(&self) -> Step {
        let mut steps = self.steps.lock().expect("lock source steps");
        let mut last = self.last.lock().expect("lock last step");
        if let Some(step) = steps.pop_front() {
            *last = Some(step);
        }
        last.clone().expect("scripted source needs at least one step")
    }
}

#[async_trait]
impl QuoteSource for ScriptedSource {
    async fn fetch(&self) -> Result<QuoteRecord> {
        self.calls
            .lock()
            .expect("lock source calls")
            .push(Instant::now());

        match self.next_step() {
            Step::Record(record) => Ok(record),
            Step::Status(status) => Err(FetchError::Status {
                status,
                url: "http://scripted.test/today.json".into(),
            }
            .into()),
            Step::Panic(message) => panic!("{message}"),
        }
    }

    fn name(&self) -> &'static str {
        "Scripted"
    }
}
