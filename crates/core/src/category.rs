use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse accounting category assigned to each data row's account name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AccountCategory {
    Income,
    Utilities,
    Maintenance,
    Insurance,
    PropertyTax,
    Other,
}

impl AccountCategory {
    /// The categories counted as operating expenses in summaries.
    pub const EXPENSES: &'static [AccountCategory] = &[
        AccountCategory::Utilities,
        AccountCategory::Maintenance,
        AccountCategory::Insurance,
        AccountCategory::PropertyTax,
    ];

    pub fn is_expense(self) -> bool {
        Self::EXPENSES.contains(&self)
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountCategory::Income => write!(f, "income"),
            AccountCategory::Utilities => write!(f, "utilities"),
            AccountCategory::Maintenance => write!(f, "maintenance"),
            AccountCategory::Insurance => write!(f, "insurance"),
            AccountCategory::PropertyTax => write!(f, "property_tax"),
            AccountCategory::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}
