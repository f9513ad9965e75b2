use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

fn month_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s+\d{4}$")
            .expect("invalid regex")
    })
}

/// Layout of an uploaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableFormat {
    /// One column per month: "Jan 2024", "Feb 2024", ...
    #[serde(rename = "month-column")]
    MonthColumn,
    /// A single revenue column; periods are not broken out per header.
    #[serde(rename = "traditional")]
    Traditional,
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::MonthColumn => write!(f, "month-column"),
            TableFormat::Traditional => write!(f, "traditional"),
        }
    }
}

/// True for trimmed headers of the form "Mon YYYY".
pub fn is_month_header(header: &str) -> bool {
    month_header_re().is_match(header.trim())
}

/// A table is month-column when at least `min_month_headers` of its headers
/// look like "Mon YYYY". The minimum keeps tables with one or two incidental
/// month-like headers out of the month-column path.
pub fn detect_format(headers: &[String], min_month_headers: usize) -> TableFormat {
    let count = headers.iter().filter(|h| is_month_header(h)).count();
    if count >= min_month_headers {
        TableFormat::MonthColumn
    } else {
        TableFormat::Traditional
    }
}
