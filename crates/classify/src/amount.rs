use rust_decimal::Decimal;
use std::str::FromStr;

/// Tokens that mean "no value here", as opposed to zero.
const NOT_AVAILABLE: &[&str] = &["-", "\u{2013}", "\u{2014}", "n/a"];

/// Parses a raw cell into a signed decimal amount.
///
/// Handles currency symbols, thousands separators, and accounting-style
/// parenthesized negatives. Blank cells, not-available sentinels, and
/// unparseable text all come back as `None`; cell-level noise is a sentinel
/// here, never an error.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if NOT_AVAILABLE.contains(&s.to_lowercase().as_str()) {
        return None;
    }

    let (negative, s) = if s.starts_with('(') && s.ends_with(')') {
        (true, &s[1..s.len() - 1])
    } else {
        (false, s)
    };

    let cleaned = s.replace([',', '$', '\u{20ac}', '\u{a3}', '\u{a5}', ' '], "");
    if cleaned.is_empty() {
        return None;
    }

    let mut amount = Decimal::from_str(&cleaned).ok()?;
    if negative {
        amount = -amount;
    }
    Some(amount)
}
