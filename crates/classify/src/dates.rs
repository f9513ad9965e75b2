use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use rowhouse_core::period::MONTHS;

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(19|20)\d{2}").expect("invalid regex"))
}

/// Month/year tokens found in a raw header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSignals {
    /// Canonical full month names, e.g. "january".
    pub months: BTreeSet<String>,
    /// 4-digit year strings.
    pub years: BTreeSet<String>,
}

impl DateSignals {
    pub fn has_date(&self) -> bool {
        !self.months.is_empty() || !self.years.is_empty()
    }

    /// True when the header should be routed straight to the `dates` bucket,
    /// skipping keyword matching.
    pub fn is_date_column(&self) -> bool {
        self.has_date()
    }
}

/// Scans a raw header for month tokens (abbreviated or full, substring,
/// case-insensitive) and 4-digit years.
pub fn extract_date_signals(header: &str) -> DateSignals {
    let lower = header.to_lowercase();
    let mut signals = DateSignals::default();

    for (abbr, full, _) in MONTHS {
        if lower.contains(abbr) || lower.contains(full) {
            signals.months.insert((*full).to_string());
        }
    }
    for found in year_re().find_iter(&lower) {
        signals.years.insert(found.as_str().to_string());
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_and_year_both_detected() {
        let signals = extract_date_signals("Jan 2024");
        assert!(signals.months.contains("january"));
        assert!(signals.years.contains("2024"));
        assert!(signals.is_date_column());
    }

    #[test]
    fn full_month_name_detected() {
        let signals = extract_date_signals("December Totals");
        assert!(signals.months.contains("december"));
        assert!(signals.is_date_column());
    }

    #[test]
    fn year_alone_is_a_date_column() {
        let signals = extract_date_signals("2023 Budget");
        assert!(signals.months.is_empty());
        assert_eq!(
            signals.years.iter().collect::<Vec<_>>(),
            vec!["2023"]
        );
        assert!(signals.is_date_column());
    }

    #[test]
    fn century_prefix_is_required_for_years() {
        let signals = extract_date_signals("Unit 1750");
        assert!(signals.years.is_empty());
        assert!(!signals.is_date_column());
    }

    #[test]
    fn month_token_inside_a_word_counts() {
        // Substring month search: "mar" inside "Margin" reads as March.
        let signals = extract_date_signals("Margin");
        assert!(signals.months.contains("march"));
    }

    #[test]
    fn plain_headers_have_no_signals() {
        let signals = extract_date_signals("Tenant Name");
        assert!(!signals.has_date());
        assert!(!signals.is_date_column());
    }
}
