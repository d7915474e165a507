//! Telegram publisher.
//!
//! Sends rendered messages to a single chat through the Bot API.

pub mod publisher;

pub use publisher::TelegramPublisher;
