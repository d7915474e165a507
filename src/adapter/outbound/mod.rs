//! Outbound adapters (driven side).

pub mod telegram;
pub mod truncgil;
