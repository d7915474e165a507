//! Rendering a quote record into the published chat message.
//!
//! The output targets Telegram `MarkdownV2`: prices sit inside code spans and
//! every other piece of free text goes through [`escape_markdown`]. Rendering
//! is total; whatever the record lacks shows up as zero.

use std::fmt::Write as _;

use chrono::NaiveDateTime;

use super::instrument::Instrument;
use super::price::{change_emoji, format_change, format_price};
use super::quote::{Quote, QuoteRecord};

/// Timestamp layout used when the source does not report one.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Configurable parts of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    /// Bold heading on the first line.
    pub title: String,
    /// Signature after the buy/sell legend.
    pub footer: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            title: "ALTIN FİYATLARI".into(),
            footer: "Ezeogli Bot".into(),
        }
    }
}

/// Render `record` into a `MarkdownV2` message.
///
/// `fallback` is shown as the timestamp when the record carries none.
#[must_use]
pub fn render_message(
    record: &QuoteRecord,
    fallback: NaiveDateTime,
    template: &MessageTemplate,
) -> String {
    let timestamp = record
        .timestamp()
        .map_or_else(|| fallback.format(TIMESTAMP_FORMAT).to_string(), str::to_string);

    let mut msg = format!(
        "💰 *{}*\n_{}_\n",
        escape_markdown(&template.title),
        escape_markdown(&timestamp)
    );

    for instrument in Instrument::ALL {
        msg.push('\n');
        msg.push_str(&instrument_line(instrument, &record.quote(instrument)));
        msg.push('\n');
    }

    let _ = write!(
        msg,
        "\n_Alış / Satış • {}_",
        escape_markdown(&template.footer)
    );

    msg
}

/// Single instrument line, e.g. ``🪙 *Gram*: `3.100,00` / `3.150,00` ₺ 📈 0,45%``.
#[must_use]
pub fn instrument_line(instrument: Instrument, quote: &Quote) -> String {
    format!(
        "{} *{}*: `{}` / `{}` ₺ {} {}%",
        instrument.glyph(),
        escape_markdown(instrument.label()),
        format_price(quote.buy_or_zero()),
        format_price(quote.sell_or_zero()),
        change_emoji(quote.change_percent),
        escape_markdown(&format_change(quote.change_percent)),
    )
}

/// Escape special characters for Telegram `MarkdownV2`.
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}
