//! Altin - Turkish gold prices, republished to Telegram on a schedule.
//!
//! Every cycle fetches one quote document, renders the four tracked gold
//! products into a `MarkdownV2` message and sends it to a single chat, then
//! sleeps a fixed interval. Failures skip the cycle; nothing is retried and
//! nothing is persisted.
//!
//! # Modules
//!
//! - [`domain`] - Instruments, quotes and message rendering
//! - [`port`] - [`QuoteSource`](port::QuoteSource) and [`Publisher`](port::Publisher) traits
//! - [`adapter`] - Truncgil client, Telegram publisher and the CLI
//! - [`application`] - The polling loop
//! - [`infrastructure`] - Configuration and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use altin::infrastructure::bootstrap::build_poller;
//! use altin::infrastructure::config::settings::Config;
//!
//! # async fn run() -> altin::error::Result<()> {
//! let config = Config::load_from(None)?;
//! let poller = build_poller(&config)?;
//! poller.run().await;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
