use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A semantic bucket a column header can be assigned to, with the keywords
/// the matcher scores headers against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketDefinition {
    pub name: String,
    pub keywords: Vec<String>,
    pub description: String,
}

impl BucketDefinition {
    pub fn new(name: &str, keywords: &[&str], description: &str) -> Self {
        BucketDefinition {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse bucket config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Bucket '{0}' has no keywords")]
    EmptyBucket(String),
    #[error("Duplicate bucket name: {0}")]
    DuplicateBucket(String),
}

/// Default bucket table: (name, keywords, description).
///
/// Keywords are written the way normalized headers read, since both sides of
/// the similarity comparison have been through the same normalization.
const DEFAULT_BUCKETS: &[(&str, &[&str], &str)] = &[
    (
        "income",
        &[
            "rent",
            "rental income",
            "income",
            "revenue",
            "receipts",
            "fees",
            "charges",
            "lease",
            "concessions",
            "parking",
            "late fees",
            "utility recovery",
            "application fee",
            "pet fees",
        ],
        "Money coming in: rent, fees, recoveries",
    ),
    (
        "expense",
        &[
            "expense",
            "expenses",
            "cost",
            "costs",
            "maintenance",
            "repairs",
            "utilities",
            "insurance",
            "taxes",
            "management fee",
            "legal",
            "accounting",
            "marketing",
            "advertising",
            "cleaning",
            "landscaping",
            "security",
            "supplies",
            "capital",
        ],
        "Money going out: operating and capital costs",
    ),
    (
        "tenant_info",
        &[
            "tenant",
            "tenant name",
            "resident",
            "resident name",
            "unit",
            "unit number",
            "occupant",
            "lease start",
            "lease end",
            "move in",
            "move out",
        ],
        "Who occupies the unit and on what terms",
    ),
    (
        "financial_metric",
        &[
            "net operating income",
            "total",
            "subtotal",
            "balance",
            "gross income",
            "net income",
            "cap rate",
            "occupancy",
            "occupancy rate",
            "vacancy",
            "margin",
        ],
        "Derived figures: NOI, totals, rates",
    ),
    (
        "property_detail",
        &[
            "property",
            "property name",
            "address",
            "square feet",
            "bedrooms",
            "bathrooms",
            "year built",
            "building",
            "lot size",
        ],
        "Physical and descriptive property attributes",
    ),
    (
        "dates",
        &[
            "date",
            "month",
            "year",
            "period",
            "as of date",
            "start date",
            "end date",
        ],
        "Temporal columns",
    ),
    (
        "amount",
        &[
            "amount",
            "total amount",
            "price",
            "value",
            "payment",
            "deposit",
            "debit",
            "credit",
        ],
        "Monetary value columns",
    ),
    (
        "status",
        &[
            "status", "paid", "unpaid", "active", "inactive", "pending", "overdue", "current",
        ],
        "Workflow and payment state columns",
    ),
];

/// Ordered bucket table. Registration order is the tie-break order for
/// equal-scoring matches, so this is a list, not a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketConfig {
    pub buckets: Vec<BucketDefinition>,
}

impl Default for BucketConfig {
    fn default() -> Self {
        BucketConfig {
            buckets: DEFAULT_BUCKETS
                .iter()
                .map(|(name, keywords, description)| {
                    BucketDefinition::new(name, keywords, description)
                })
                .collect(),
        }
    }
}

impl BucketConfig {
    pub fn new(buckets: Vec<BucketDefinition>) -> Self {
        BucketConfig { buckets }
    }

    /// Returns a new configuration with `bucket` registered after the
    /// existing ones. Registering never mutates a shared table, so in-flight
    /// classification runs are unaffected.
    pub fn with_bucket(mut self, bucket: BucketDefinition) -> Self {
        self.buckets.push(bucket);
        self
    }

    /// Returns a new configuration with all of `other`'s buckets appended.
    /// Earlier buckets win score ties, so defaults keep priority over
    /// merged-in custom buckets.
    pub fn merge(mut self, other: BucketConfig) -> Self {
        self.buckets.extend(other.buckets);
        self
    }

    /// Parses a standalone bucket table from TOML:
    ///
    /// ```toml
    /// [[buckets]]
    /// name = "capex"
    /// keywords = ["capital improvement", "capex"]
    /// description = "Capital expenditure columns"
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: BucketConfig = toml::from_str(content)?;
        let mut seen = Vec::with_capacity(config.buckets.len());
        for bucket in &config.buckets {
            if bucket.keywords.is_empty() {
                return Err(ConfigError::EmptyBucket(bucket.name.clone()));
            }
            if seen.contains(&bucket.name.as_str()) {
                return Err(ConfigError::DuplicateBucket(bucket.name.clone()));
            }
            seen.push(bucket.name.as_str());
        }
        Ok(config)
    }
}
