//! Infrastructure configuration modules.

pub mod logging;
pub mod message;
pub mod schedule;
pub mod settings;
pub mod source;
pub mod telegram;
