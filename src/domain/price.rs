//! Turkish number formatting and change direction.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Direction of the daily change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    /// Classify a change; absent values count as flat.
    #[must_use]
    pub fn of(change: Option<Decimal>) -> Self {
        match change {
            Some(c) if c > Decimal::ZERO => Self::Up,
            Some(c) if c < Decimal::ZERO => Self::Down,
            _ => Self::Flat,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Up => "📈",
            Self::Down => "📉",
            Self::Flat => "➖",
        }
    }
}

/// Glyph for a change value.
#[must_use]
pub fn change_emoji(change: Option<Decimal>) -> &'static str {
    ChangeDirection::of(change).emoji()
}

/// Format a price the Turkish way: `1234.5` becomes `1.234,50`.
#[must_use]
pub fn format_price(value: Decimal) -> String {
    let rounded = round2(value);
    let plain = format!("{:.2}", rounded.abs());
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{sign}{},{fraction}", group_thousands(integer))
}

/// Format a change percentage with two decimals and a decimal comma.
#[must_use]
pub fn format_change(change: Option<Decimal>) -> String {
    let rounded = round2(change.unwrap_or_default());
    format!("{rounded:.2}").replace('.', ",")
}

/// Parse an amount as served by the feed.
///
/// Accepts plain decimals (`1234.5`), Turkish-formatted strings (`1.234,50`,
/// `3.100`), scientific notation and a leading or trailing `%`. Dots before a
/// comma must be well-formed thousands groups. Without a comma, a lone dot
/// followed by exactly three digits is a thousands separator. Returns `None`
/// for anything else.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim().trim_start_matches('%').trim_end_matches('%').trim();
    if trimmed.is_empty() {
        return None;
    }

    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };

    let normalized = match body.split_once(',') {
        Some((integer, fraction)) => {
            if fraction.contains(['.', ',']) {
                return None;
            }
            format!("{sign}{}.{fraction}", ungroup(integer)?)
        }
        None if body.matches('.').count() > 1 => format!("{sign}{}", ungroup(body)?),
        None => match body.split_once('.') {
            Some((integer, fraction)) if is_thousands_split(integer, fraction) => {
                format!("{sign}{integer}{fraction}")
            }
            _ => trimmed.to_string(),
        },
    };

    parse_decimal(&normalized)
}

/// Parse a machine-formatted decimal, as found in JSON numbers.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Strip thousands dots from an integer part, rejecting malformed groups.
fn ungroup(integer: &str) -> Option<String> {
    if !integer.contains('.') {
        return Some(integer.to_string());
    }

    let mut groups = integer.split('.');
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 || !is_digits(lead) {
        return None;
    }

    let mut out = lead.to_string();
    for group in groups {
        if group.len() != 3 || !is_digits(group) {
            return None;
        }
        out.push_str(group);
    }
    Some(out)
}

fn is_thousands_split(integer: &str, fraction: &str) -> bool {
    fraction.len() == 3
        && is_digits(fraction)
        && (1..=3).contains(&integer.len())
        && is_digits(integer)
        && !integer.starts_with('0')
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn round2(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // -0.001 rounds to a negative zero
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }

    out
}
