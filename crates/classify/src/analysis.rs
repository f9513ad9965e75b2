use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rowhouse_core::{AccountCategory, Severity};

use crate::rows::ClassifiedRow;

/// Summary confidence reported to callers. A constant, not a computed
/// statistic; downstream consumers calibrate against this value.
pub const SUMMARY_CONFIDENCE: f32 = 0.85;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub message: String,
    pub severity: Severity,
}

/// Totals over one slice of the classified rows (revenue or expenses).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAnalysis {
    pub records: usize,
    pub total: Decimal,
    pub average: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub property: String,
    pub total_records: usize,
    /// Sum of parseable amounts only; `None` amounts are audit entries.
    pub total_amount: Decimal,
    pub unique_accounts: usize,
    pub category_counts: BTreeMap<AccountCategory, usize>,
    pub revenue: Option<SubAnalysis>,
    pub expenses: Option<SubAnalysis>,
    pub anomalies: Vec<Anomaly>,
    pub confidence: f32,
}

/// Aggregates the classified rows for one upload.
pub fn summarize(rows: &[ClassifiedRow], property: &str) -> AnalysisSummary {
    let total_amount: Decimal = rows.iter().filter_map(|r| r.amount).sum();
    let unique_accounts = rows
        .iter()
        .map(|r| r.account.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let mut category_counts: BTreeMap<AccountCategory, usize> = BTreeMap::new();
    for row in rows {
        *category_counts.entry(row.category).or_insert(0) += 1;
    }

    let revenue = sub_analysis(rows, |c| c == AccountCategory::Income);
    let expenses = sub_analysis(rows, |c| c.is_expense());

    let mut anomalies = Vec::new();
    if total_amount < Decimal::ZERO {
        anomalies.push(Anomaly {
            message: format!("Total amount for {property} is negative ({total_amount})"),
            severity: Severity::High,
        });
    }
    if rows.is_empty() {
        anomalies.push(Anomaly {
            message: format!("No records were parsed for {property}"),
            severity: Severity::High,
        });
    }

    AnalysisSummary {
        property: property.to_string(),
        total_records: rows.len(),
        total_amount,
        unique_accounts,
        category_counts,
        revenue,
        expenses,
        anomalies,
        confidence: SUMMARY_CONFIDENCE,
    }
}

fn sub_analysis(
    rows: &[ClassifiedRow],
    pick: impl Fn(AccountCategory) -> bool,
) -> Option<SubAnalysis> {
    let records = rows.iter().filter(|r| pick(r.category)).count();
    if records == 0 {
        return None;
    }
    let amounts: Vec<Decimal> = rows
        .iter()
        .filter(|r| pick(r.category))
        .filter_map(|r| r.amount)
        .collect();
    let total: Decimal = amounts.iter().copied().sum();
    let average = if amounts.is_empty() {
        Decimal::ZERO
    } else {
        total / Decimal::from(amounts.len() as u64)
    };
    Some(SubAnalysis {
        records,
        total,
        average,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn row(account: &str, amount: Option<&str>, category: AccountCategory) -> ClassifiedRow {
        ClassifiedRow {
            account: account.to_string(),
            period: "Jan 2024".to_string(),
            period_start: None,
            amount: amount.map(|a| Decimal::from_str(a).unwrap()),
            amount_raw: amount.unwrap_or("—").to_string(),
            category,
        }
    }

    #[test]
    fn totals_and_histogram() {
        let rows = vec![
            row("Resident Rents", Some("1000"), AccountCategory::Income),
            row("Resident Rents", Some("1100"), AccountCategory::Income),
            row("Water", Some("-50"), AccountCategory::Utilities),
            row("Office Supplies", Some("25"), AccountCategory::Other),
        ];
        let summary = summarize(&rows, "Maple Court");
        assert_eq!(summary.total_records, 4);
        assert_eq!(summary.total_amount, Decimal::from(2075));
        assert_eq!(summary.unique_accounts, 3);
        assert_eq!(summary.category_counts[&AccountCategory::Income], 2);
        assert_eq!(summary.category_counts[&AccountCategory::Utilities], 1);
        assert_eq!(summary.category_counts[&AccountCategory::Other], 1);
        assert_eq!(summary.confidence, SUMMARY_CONFIDENCE);
    }

    #[test]
    fn null_amounts_are_counted_but_not_summed() {
        let rows = vec![
            row("Resident Rents", Some("1000"), AccountCategory::Income),
            row("Resident Rents", None, AccountCategory::Income),
        ];
        let summary = summarize(&rows, "test");
        assert_eq!(summary.total_records, 2);
        assert_eq!(summary.total_amount, Decimal::from(1000));
        let revenue = summary.revenue.unwrap();
        assert_eq!(revenue.records, 2);
        assert_eq!(revenue.total, Decimal::from(1000));
        assert_eq!(revenue.average, Decimal::from(1000));
    }

    #[test]
    fn revenue_and_expense_sub_analyses() {
        let rows = vec![
            row("Resident Rents", Some("1000"), AccountCategory::Income),
            row("Resident Rents", Some("1100"), AccountCategory::Income),
            row("Water", Some("200"), AccountCategory::Utilities),
            row("Repairs", Some("400"), AccountCategory::Maintenance),
        ];
        let summary = summarize(&rows, "test");

        let revenue = summary.revenue.unwrap();
        assert_eq!(revenue.records, 2);
        assert_eq!(revenue.total, Decimal::from(2100));
        assert_eq!(revenue.average, Decimal::from(1050));

        let expenses = summary.expenses.unwrap();
        assert_eq!(expenses.records, 2);
        assert_eq!(expenses.total, Decimal::from(600));
        assert_eq!(expenses.average, Decimal::from(300));
    }

    #[test]
    fn sub_analyses_absent_without_matching_rows() {
        let rows = vec![row("Office Supplies", Some("25"), AccountCategory::Other)];
        let summary = summarize(&rows, "test");
        assert!(summary.revenue.is_none());
        assert!(summary.expenses.is_none());
    }

    #[test]
    fn negative_total_is_a_high_severity_anomaly() {
        let rows = vec![row("Refunds", Some("-100"), AccountCategory::Other)];
        let summary = summarize(&rows, "test");
        assert_eq!(summary.anomalies.len(), 1);
        assert_eq!(summary.anomalies[0].severity, Severity::High);
        assert!(summary.anomalies[0].message.contains("negative"));
    }

    #[test]
    fn empty_input_is_a_high_severity_anomaly() {
        let summary = summarize(&[], "test");
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.total_amount, Decimal::ZERO);
        assert_eq!(summary.unique_accounts, 0);
        assert_eq!(summary.anomalies.len(), 1);
        assert_eq!(summary.anomalies[0].severity, Severity::High);
    }

    #[test]
    fn healthy_input_has_no_anomalies() {
        let rows = vec![row("Resident Rents", Some("1000"), AccountCategory::Income)];
        assert!(summarize(&rows, "test").anomalies.is_empty());
    }
}
