//! Per-cycle quote record.
//!
//! Every numeric field is optional. Accessors hand back zero for anything the
//! source left out, so a partial feed still yields a complete message.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::instrument::Instrument;

/// Buy, sell and daily change for a single instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quote {
    /// Price the market buys at.
    pub buy: Option<Decimal>,
    /// Price the market sells at.
    pub sell: Option<Decimal>,
    /// Daily change in percent.
    pub change_percent: Option<Decimal>,
}

impl Quote {
    #[must_use]
    pub fn new(buy: Decimal, sell: Decimal, change_percent: Decimal) -> Self {
        Self {
            buy: Some(buy),
            sell: Some(sell),
            change_percent: Some(change_percent),
        }
    }

    #[must_use]
    pub fn buy_or_zero(&self) -> Decimal {
        self.buy.unwrap_or_default()
    }

    #[must_use]
    pub fn sell_or_zero(&self) -> Decimal {
        self.sell.unwrap_or_default()
    }

    /// True when the source supplied none of the three fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buy.is_none() && self.sell.is_none() && self.change_percent.is_none()
    }
}

/// Quotes for all tracked instruments plus the source's update timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRecord {
    /// Update timestamp as reported by the source, verbatim.
    pub updated_at: Option<String>,
    quotes: BTreeMap<Instrument, Quote>,
}

impl QuoteRecord {
    #[must_use]
    pub fn new(updated_at: Option<String>) -> Self {
        Self {
            updated_at,
            quotes: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_quote(mut self, instrument: Instrument, quote: Quote) -> Self {
        self.insert(instrument, quote);
        self
    }

    pub fn insert(&mut self, instrument: Instrument, quote: Quote) {
        self.quotes.insert(instrument, quote);
    }

    /// Quote for `instrument`, or an all-absent quote when the source omitted it.
    #[must_use]
    pub fn quote(&self, instrument: Instrument) -> Quote {
        self.quotes.get(&instrument).cloned().unwrap_or_default()
    }

    /// Number of instruments the source actually reported.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Source timestamp, ignoring blank values.
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.updated_at
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
