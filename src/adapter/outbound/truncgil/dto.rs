//! Wire types for the Truncgil `today.json` document.
//!
//! The feed is loosely typed: amounts show up as JSON numbers, plain numeric
//! strings or Turkish-formatted strings, and entries are occasionally missing.
//! Everything here decodes leniently; anything unusable becomes `None`.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::domain::price::{parse_amount, parse_decimal};
use crate::domain::{Instrument, Quote, QuoteRecord};

const UPDATE_DATE_KEY: &str = "Update_Date";

/// Top-level document: an object keyed by instrument code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TodayResponse(pub Map<String, Value>);

/// A single instrument entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstrumentEntry {
    #[serde(rename = "Buying", default, deserialize_with = "lenient_amount")]
    pub buying: Option<Decimal>,
    #[serde(rename = "Selling", default, deserialize_with = "lenient_amount")]
    pub selling: Option<Decimal>,
    #[serde(rename = "Change", default, deserialize_with = "lenient_amount")]
    pub change: Option<Decimal>,
}

impl TodayResponse {
    /// Source update timestamp, stringified if the feed sent a number.
    #[must_use]
    pub fn update_date(&self) -> Option<String> {
        match self.0.get(UPDATE_DATE_KEY)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Entry for `instrument`; non-object values count as absent.
    #[must_use]
    pub fn entry(&self, instrument: Instrument) -> Option<InstrumentEntry> {
        match self.0.get(instrument.source_key())? {
            value @ Value::Object(_) => InstrumentEntry::deserialize(value).ok(),
            _ => None,
        }
    }
}

impl From<InstrumentEntry> for Quote {
    fn from(entry: InstrumentEntry) -> Self {
        Self {
            buy: entry.buying,
            sell: entry.selling,
            change_percent: entry.change,
        }
    }
}

impl From<TodayResponse> for QuoteRecord {
    fn from(response: TodayResponse) -> Self {
        let mut record = QuoteRecord::new(response.update_date());
        for instrument in Instrument::ALL {
            if let Some(entry) = response.entry(instrument) {
                record.insert(instrument, entry.into());
            }
        }
        record
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(amount_from_value(&value))
}

fn amount_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_amount(s),
        _ => None,
    }
}
