use rowhouse_core::AccountCategory;

/// Ordered categorization rules. First category with a substring hit wins,
/// so the income vocabulary shadows everything below it, and a name matching
/// several categories lands in the earliest-listed one.
const CATEGORY_RULES: &[(AccountCategory, &[&str])] = &[
    (
        AccountCategory::Income,
        &[
            "rent",
            "income",
            "revenue",
            "late fee",
            "application fee",
            "pet fee",
            "parking",
            "laundry",
            "recovery",
            "reimbursement",
            "concession",
        ],
    ),
    (
        AccountCategory::Utilities,
        &[
            "water",
            "sewer",
            "electric",
            "gas",
            "trash",
            "garbage",
            "utility",
            "utilities",
            "cable",
            "internet",
            "telephone",
        ],
    ),
    (
        AccountCategory::Maintenance,
        &[
            "maintenance",
            "repair",
            "landscaping",
            "cleaning",
            "janitorial",
            "pest control",
            "snow removal",
            "hvac",
            "plumbing",
            "painting",
            "turnover",
        ],
    ),
    (AccountCategory::Insurance, &["insurance"]),
    (
        AccountCategory::PropertyTax,
        &["property tax", "real estate tax", "tax"],
    ),
];

/// Maps an account-name label to its accounting category. Unmatched names
/// fall to `Other`, never to an absent value.
pub fn categorize_account(name: &str) -> AccountCategory {
    let lowered = name.to_lowercase();
    let text = lowered.trim();

    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return *category;
        }
    }
    AccountCategory::Other
}
