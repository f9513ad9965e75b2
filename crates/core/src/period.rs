use chrono::NaiveDate;

/// Month token table: (abbreviation, full name, month number).
pub const MONTHS: &[(&str, &str, u32)] = &[
    ("jan", "january", 1),
    ("feb", "february", 2),
    ("mar", "march", 3),
    ("apr", "april", 4),
    ("may", "may", 5),
    ("jun", "june", 6),
    ("jul", "july", 7),
    ("aug", "august", 8),
    ("sep", "september", 9),
    ("oct", "october", 10),
    ("nov", "november", 11),
    ("dec", "december", 12),
];

/// Resolves a month token (abbreviated or full, any case) to its number.
pub fn month_number(token: &str) -> Option<u32> {
    let t = token.to_lowercase();
    MONTHS
        .iter()
        .find(|(abbr, full, _)| t == *abbr || t == *full)
        .map(|(_, _, n)| *n)
}

/// Calendar anchor for a "Mon YYYY" period label: the first of that month.
/// Labels that are not a month-year pair have no anchor.
pub fn month_year_start(label: &str) -> Option<NaiveDate> {
    let mut parts = label.trim().split_whitespace();
    let month = month_number(parts.next()?)?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}
