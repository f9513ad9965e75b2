use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use rowhouse_core::BucketConfig;

use crate::analysis::{summarize, AnalysisSummary};
use crate::format::{detect_format, TableFormat};
use crate::matcher::{classify_header, HeaderMatch};
use crate::rows::{process_rows, ClassifiedRow};

/// Tunable thresholds for one classification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyOptions {
    /// Minimum similarity for a header to be assigned a bucket at all.
    pub assign_threshold: f32,
    /// Headers scoring below this are flagged for user confirmation.
    pub confirm_threshold: f32,
    /// Month-pattern headers required before a table counts as month-column.
    pub min_month_headers: usize,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            assign_threshold: 60.0,
            confirm_threshold: 70.0,
            min_month_headers: 3,
        }
    }
}

/// Everything the classification run produced for one uploaded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub property: String,
    pub headers: Vec<String>,
    pub header_matches: Vec<HeaderMatch>,
    /// Bucket name → headers assigned to it, in header order.
    pub bucket_assignments: BTreeMap<String, Vec<String>>,
    /// Header → its match score.
    pub confidence_scores: BTreeMap<String, f32>,
    pub needs_user_confirmation: bool,
    pub low_confidence_headers: Vec<HeaderMatch>,
    pub parsed_data: Vec<ClassifiedRow>,
    pub skipped_cells: usize,
    pub format: TableFormat,
    pub analysis: AnalysisSummary,
}

/// Runs the full pipeline over a parsed grid (row 0 = headers).
pub fn classify_grid(
    grid: &[Vec<String>],
    property: &str,
    config: &BucketConfig,
    options: &ClassifyOptions,
) -> ClassificationResult {
    let headers: Vec<String> = grid.first().cloned().unwrap_or_default();

    let header_matches: Vec<HeaderMatch> = headers
        .iter()
        .map(|h| classify_header(h, config, options.assign_threshold))
        .collect();

    let mut bucket_assignments: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut confidence_scores: BTreeMap<String, f32> = BTreeMap::new();
    for matched in &header_matches {
        bucket_assignments
            .entry(matched.bucket.clone())
            .or_default()
            .push(matched.header.clone());
        confidence_scores.insert(matched.header.clone(), matched.score);
    }

    let low_confidence_headers: Vec<HeaderMatch> = header_matches
        .iter()
        .filter(|m| m.score < options.confirm_threshold)
        .cloned()
        .collect();
    let needs_user_confirmation = !low_confidence_headers.is_empty();

    let format = detect_format(&headers, options.min_month_headers);
    let processed = process_rows(grid, format, property);
    let analysis = summarize(&processed.rows, property);

    tracing::debug!(
        property,
        headers = headers.len(),
        %format,
        rows = processed.rows.len(),
        skipped = processed.skipped_cells,
        "classified table"
    );

    ClassificationResult {
        property: property.to_string(),
        headers,
        header_matches,
        bucket_assignments,
        confidence_scores,
        needs_user_confirmation,
        low_confidence_headers,
        parsed_data: processed.rows,
        skipped_cells: processed.skipped_cells,
        format,
        analysis,
    }
}
