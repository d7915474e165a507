//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌─────────────┐      ┌─────────────────┐      ┌─────────────┐
//!   │ QuoteSource │ ───► │ Poller (render) │ ───► │  Publisher  │
//!   │  (Truncgil) │      │                 │      │ (Telegram)  │
//!   └─────────────┘      └─────────────────┘      └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`QuoteSource`] - Fetches one [`QuoteRecord`](crate::domain::QuoteRecord) per cycle
//! - [`Publisher`] - Delivers the rendered message to the chat

pub mod outbound;

pub use outbound::publisher::Publisher;
pub use outbound::source::QuoteSource;
