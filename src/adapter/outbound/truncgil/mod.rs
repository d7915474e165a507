//! Truncgil Finance quote source.
//!
//! Fetches `today.json` and maps the four gold entries onto a
//! [`QuoteRecord`](crate::domain::QuoteRecord).

pub mod client;
pub mod dto;

pub use client::TruncgilClient;
