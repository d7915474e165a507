//! Application services (use cases).
//!
//! The single use case is the polling loop in [`poller`].

pub mod poller;

pub use poller::{CycleOutcome, CycleStats, Poller};
