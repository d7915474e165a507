//! Source-agnostic domain types: instruments, quotes and message rendering.

pub mod instrument;
pub mod message;
pub mod price;
pub mod quote;

pub use instrument::Instrument;
pub use message::{render_message, MessageTemplate};
pub use price::{change_emoji, format_change, format_price, ChangeDirection};
pub use quote::{Quote, QuoteRecord};
