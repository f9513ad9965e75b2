use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rowhouse_core::{period, AccountCategory};

use crate::amount::parse_amount;
use crate::categorize::categorize_account;
use crate::format::{is_month_header, TableFormat};

/// Fixed period label for traditional-format tables, whose single revenue
/// column is a period total rather than a month.
pub const TRADITIONAL_PERIOD: &str = "Total";

/// One normalized (account, period, amount) observation from the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRow {
    pub account: String,
    pub period: String,
    /// Calendar anchor of a month-year period label; `None` for placeholder
    /// periods.
    pub period_start: Option<NaiveDate>,
    /// `None` marks an unparseable or sentinel cell: excluded from sums,
    /// retained for audit alongside the raw text.
    pub amount: Option<Decimal>,
    pub amount_raw: String,
    pub category: AccountCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRows {
    pub rows: Vec<ClassifiedRow>,
    /// Month cells that were blank, sentinels, or unparseable. Not emitted,
    /// but surfaced so dropped cells are visible to callers.
    pub skipped_cells: usize,
}

/// Rows whose account cell is one of these labels are table structure
/// (section banners, subtotal separators), not data.
fn is_section_label(account: &str) -> bool {
    matches!(
        account.trim().to_lowercase().as_str(),
        "" | "income" | "expense" | "total" | "totals"
    )
}

/// Walks the grid (row 0 = headers) and emits one `ClassifiedRow` per
/// observed value.
///
/// Month-column tables emit one row per month header with a parseable cell.
/// Traditional tables emit one row per data row from the first
/// revenue-labeled column; a traditional table with no revenue column but
/// with month-pattern headers falls back to month-cell emission rather than
/// dropping the data.
pub fn process_rows(grid: &[Vec<String>], format: TableFormat, property: &str) -> ProcessedRows {
    let Some((headers, data_rows)) = grid.split_first() else {
        return ProcessedRows::default();
    };

    let month_columns: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| is_month_header(h))
        .map(|(col, _)| col)
        .collect();

    match format {
        TableFormat::MonthColumn => {
            process_month_columns(headers, data_rows, &month_columns)
        }
        TableFormat::Traditional => {
            let revenue_column = headers
                .iter()
                .position(|h| h.to_lowercase().contains("revenue"));
            match revenue_column {
                Some(col) => process_traditional(data_rows, col),
                None if !month_columns.is_empty() => {
                    tracing::debug!(
                        property,
                        months = month_columns.len(),
                        "no revenue column; emitting month cells from traditional table"
                    );
                    process_month_columns(headers, data_rows, &month_columns)
                }
                None => {
                    tracing::debug!(property, "no revenue or month columns; nothing to emit");
                    ProcessedRows::default()
                }
            }
        }
    }
}

fn process_month_columns(
    headers: &[String],
    data_rows: &[Vec<String>],
    month_columns: &[usize],
) -> ProcessedRows {
    // The account label lives in the first non-month column, wherever the
    // export put it.
    let account_column = headers
        .iter()
        .position(|h| !is_month_header(h))
        .unwrap_or(0);

    let mut out = ProcessedRows::default();
    for row in data_rows {
        let account = cell(row, account_column);
        if is_section_label(account) {
            continue;
        }
        let account = account.trim();
        let category = categorize_account(account);

        for &col in month_columns {
            let raw = cell(row, col);
            let period_label = headers[col].trim();
            match parse_amount(raw) {
                Some(amount) => out.rows.push(ClassifiedRow {
                    account: account.to_string(),
                    period: period_label.to_string(),
                    period_start: period::month_year_start(period_label),
                    amount: Some(amount),
                    amount_raw: raw.to_string(),
                    category,
                }),
                None => out.skipped_cells += 1,
            }
        }
    }
    out
}

fn process_traditional(data_rows: &[Vec<String>], revenue_column: usize) -> ProcessedRows {
    let mut out = ProcessedRows::default();
    for row in data_rows {
        let account = cell(row, 0);
        if is_section_label(account) {
            continue;
        }
        let raw = cell(row, revenue_column);
        out.rows.push(ClassifiedRow {
            account: account.trim().to_string(),
            period: TRADITIONAL_PERIOD.to_string(),
            period_start: None,
            amount: parse_amount(raw),
            amount_raw: raw.to_string(),
            category: categorize_account(account),
        });
    }
    out
}

fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or("")
}
