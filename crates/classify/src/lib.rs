//! Header and account classification for messy property-management CSV
//! exports: semantic bucket matching for column headers, accounting
//! categories for account names, lenient monetary parsing, and an analysis
//! summary over the classified rows.

pub mod amount;
pub mod analysis;
pub mod categorize;
pub mod dates;
pub mod engine;
pub mod format;
pub mod ingest;
pub mod matcher;
pub mod normalize;
pub mod rows;
pub mod similarity;

pub use amount::parse_amount;
pub use analysis::{summarize, AnalysisSummary, Anomaly, SubAnalysis, SUMMARY_CONFIDENCE};
pub use categorize::categorize_account;
pub use dates::{extract_date_signals, DateSignals};
pub use engine::{classify_grid, ClassificationResult, ClassifyOptions};
pub use format::{detect_format, is_month_header, TableFormat};
pub use ingest::{classify_csv, read_grid, CsvError};
pub use matcher::{
    classify_header, match_to_bucket, AlternativeBucket, BucketMatch, HeaderMatch,
    DATES_BUCKET, DATE_COLUMN_SCORE, UNKNOWN_BUCKET,
};
pub use normalize::normalize_header;
pub use rows::{process_rows, ClassifiedRow, ProcessedRows, TRADITIONAL_PERIOD};
pub use similarity::{levenshtein_distance, similarity_score};
