/// Abbreviation expansions applied after punctuation stripping, in table
/// order, at most once each per header. "sq ft" comes before "sqft" so the
/// punctuated form ("Sq. Ft.") expands before the compact one could.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("sq ft", "square feet"),
    ("sqft", "square feet"),
    ("noi", "net operating income"),
    ("ytd", "year to date"),
    ("amt", "amount"),
    ("acct", "account"),
    ("apt", "apartment"),
    ("mgmt", "management"),
    ("bldg", "building"),
];

/// Canonicalizes a raw header for keyword matching: lowercase, punctuation
/// replaced with spaces, runs of whitespace collapsed, known abbreviations
/// expanded.
pub fn normalize_header(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let mut normalized = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    for (abbr, full) in ABBREVIATIONS {
        if normalized.contains(abbr) {
            normalized = normalized.replacen(abbr, full, 1);
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize_header("Tenant-Name!"), "tenant name");
        assert_eq!(normalize_header("Water & Sewer"), "water sewer");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize_header("  Gross   Income  "), "gross income");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize_header(""), "");
        assert_eq!(normalize_header("  ...  "), "");
    }

    #[test]
    fn expands_abbreviations() {
        assert_eq!(normalize_header("NOI"), "net operating income");
        assert_eq!(normalize_header("Sq. Ft."), "square feet");
        assert_eq!(normalize_header("SqFt"), "square feet");
        assert_eq!(normalize_header("Mgmt Fee"), "management fee");
    }

    #[test]
    fn expands_each_abbreviation_at_most_once() {
        assert_eq!(normalize_header("sqft sqft"), "square feet sqft");
    }
}
