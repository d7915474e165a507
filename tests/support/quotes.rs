//! Sample quote records.

use altin::domain::{Instrument, Quote, QuoteRecord};
use rust_decimal_macros::dec;

/// A complete four-instrument record with a source timestamp.
pub fn full_record() -> QuoteRecord {
    QuoteRecord::new(Some("18.10.2026 14:00:00".into()))
        .with_quote(Instrument::Gram, Quote::new(dec!(3100.25), dec!(3150.5), dec!(0.45)))
        .with_quote(Instrument::Quarter, Quote::new(dec!(5100), dec!(5200), dec!(-0.12)))
        .with_quote(Instrument::Full, Quote::new(dec!(20300), dec!(20700), dec!(0)))
        .with_quote(Instrument::Ata, Quote::new(dec!(21000), dec!(21500.75), dec!(1.3)))
}

/// Body of a realistic `today.json` response.
pub const TODAY_JSON: &str = r#"{
    "Update_Date": "2026-10-18 14:00:02",
    "USD": {"Type": "Currency", "Buying": 41.9, "Selling": 42.0, "Change": 0.05},
    "GRA": {"Type": "Gold", "Name": "Gram Altın", "Buying": 3100.25, "Selling": 3150.5, "Change": 0.45},
    "CEYREKALTIN": {"Type": "Gold", "Buying": 5100, "Selling": 5200, "Change": -0.12},
    "TAMALTIN": {"Type": "Gold", "Buying": 20300, "Selling": 20700, "Change": 0},
    "ATAALTIN": {"Type": "Gold", "Buying": 21000, "Selling": 21500.75, "Change": 1.3}
}"#;
