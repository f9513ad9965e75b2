use serde::{Deserialize, Serialize};

use rowhouse_core::BucketConfig;

use crate::dates::extract_date_signals;
use crate::normalize::normalize_header;
use crate::similarity::similarity_score;

/// Bucket assigned when no configured bucket clears the threshold.
pub const UNKNOWN_BUCKET: &str = "unknown";

/// Bucket assigned to headers carrying month/year tokens.
pub const DATES_BUCKET: &str = "dates";

/// Fixed confidence for date columns, which bypass keyword matching.
pub const DATE_COLUMN_SCORE: f32 = 95.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeBucket {
    pub bucket: String,
    pub score: f32,
    pub matched_keyword: String,
}

/// Outcome of scoring one normalized header against the bucket table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketMatch {
    pub bucket: String,
    pub score: f32,
    pub matched_keyword: Option<String>,
    /// Every bucket at or above the threshold, best first, with the chosen
    /// bucket excluded.
    pub alternatives: Vec<AlternativeBucket>,
}

/// One classified header. Exactly one of these exists per input header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderMatch {
    pub header: String,
    pub bucket: String,
    pub score: f32,
    pub matched_keyword: Option<String>,
    pub alternatives: Vec<AlternativeBucket>,
}

/// Scores `normalized` against every bucket's keywords. A bucket's score is
/// its best keyword; the global winner is picked with strict `>`, so the
/// first-registered bucket keeps the win on ties.
pub fn match_to_bucket(normalized: &str, config: &BucketConfig, threshold: f32) -> BucketMatch {
    let mut best: Option<(usize, f32, &str)> = None;
    let mut candidates: Vec<AlternativeBucket> = Vec::new();

    for (idx, bucket) in config.buckets.iter().enumerate() {
        let mut bucket_best: Option<(f32, &str)> = None;
        for keyword in &bucket.keywords {
            let score = similarity_score(normalized, keyword);
            if bucket_best.is_none_or(|(s, _)| score > s) {
                bucket_best = Some((score, keyword));
            }
        }
        let Some((score, keyword)) = bucket_best else {
            continue;
        };

        if best.is_none_or(|(_, s, _)| score > s) {
            best = Some((idx, score, keyword));
        }
        if score >= threshold {
            candidates.push(AlternativeBucket {
                bucket: bucket.name.clone(),
                score,
                matched_keyword: keyword.to_string(),
            });
        }
    }

    // Stable descending sort: registration order breaks score ties.
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    match best {
        Some((idx, score, keyword)) if score >= threshold => {
            let name = config.buckets[idx].name.clone();
            let alternatives = candidates
                .into_iter()
                .filter(|c| c.bucket != name)
                .collect();
            BucketMatch {
                bucket: name,
                score,
                matched_keyword: Some(keyword.to_string()),
                alternatives,
            }
        }
        Some((_, score, _)) => BucketMatch {
            bucket: UNKNOWN_BUCKET.to_string(),
            score,
            matched_keyword: None,
            alternatives: candidates,
        },
        None => BucketMatch {
            bucket: UNKNOWN_BUCKET.to_string(),
            score: 0.0,
            matched_keyword: None,
            alternatives: Vec::new(),
        },
    }
}

/// Classifies one raw header: date-signal check first (short-circuits to the
/// `dates` bucket at a fixed 95), then normalization and keyword matching.
pub fn classify_header(header: &str, config: &BucketConfig, threshold: f32) -> HeaderMatch {
    if extract_date_signals(header).is_date_column() {
        return HeaderMatch {
            header: header.to_string(),
            bucket: DATES_BUCKET.to_string(),
            score: DATE_COLUMN_SCORE,
            matched_keyword: None,
            alternatives: Vec::new(),
        };
    }

    let normalized = normalize_header(header);
    let matched = match_to_bucket(&normalized, config, threshold);
    HeaderMatch {
        header: header.to_string(),
        bucket: matched.bucket,
        score: matched.score,
        matched_keyword: matched.matched_keyword,
        alternatives: matched.alternatives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowhouse_core::BucketDefinition;

    const THRESHOLD: f32 = 60.0;

    #[test]
    fn exact_keyword_scores_100() {
        let m = classify_header("Status", &BucketConfig::default(), THRESHOLD);
        assert_eq!(m.bucket, "status");
        assert_eq!(m.score, 100.0);
        assert_eq!(m.matched_keyword.as_deref(), Some("status"));
    }

    #[test]
    fn year_header_short_circuits_to_dates_at_95() {
        let config = BucketConfig::default();
        for header in ["Jan 2024", "FY2024 Budget", "December 2019"] {
            let m = classify_header(header, &config, THRESHOLD);
            assert_eq!(m.bucket, DATES_BUCKET, "header {header:?}");
            assert_eq!(m.score, DATE_COLUMN_SCORE);
            assert!(m.alternatives.is_empty());
        }
    }

    #[test]
    fn date_short_circuit_ignores_keyword_table() {
        // Even an empty table classifies date headers.
        let config = BucketConfig::new(Vec::new());
        let m = classify_header("Jan 2024", &config, THRESHOLD);
        assert_eq!(m.bucket, DATES_BUCKET);
        assert_eq!(m.score, 95.0);
    }

    #[test]
    fn below_threshold_falls_to_unknown_keeping_best_score() {
        let m = classify_header("zzzz qqqq", &BucketConfig::default(), THRESHOLD);
        assert_eq!(m.bucket, UNKNOWN_BUCKET);
        assert!(m.score < THRESHOLD);
        assert!(m.matched_keyword.is_none());
        assert!(m.alternatives.is_empty());
    }

    #[test]
    fn alternatives_exclude_the_chosen_bucket_and_sort_descending() {
        let config = BucketConfig::new(vec![
            BucketDefinition::new("a", &["gross income"], ""),
            BucketDefinition::new("b", &["gross incomes"], ""),
        ]);
        let m = match_to_bucket("gross income", &config, THRESHOLD);
        assert_eq!(m.bucket, "a");
        assert_eq!(m.score, 100.0);
        assert_eq!(m.alternatives.len(), 1);
        assert_eq!(m.alternatives[0].bucket, "b");
        assert!(m.alternatives[0].score < 100.0);
        assert!(m.alternatives.iter().all(|alt| alt.bucket != m.bucket));
    }

    #[test]
    fn tie_goes_to_the_first_registered_bucket() {
        let config = BucketConfig::new(vec![
            BucketDefinition::new("first", &["deposit"], ""),
            BucketDefinition::new("second", &["deposit"], ""),
        ]);
        let m = match_to_bucket("deposit", &config, THRESHOLD);
        assert_eq!(m.bucket, "first");
        assert_eq!(m.alternatives.len(), 1);
        assert_eq!(m.alternatives[0].bucket, "second");
    }

    #[test]
    fn matching_is_deterministic() {
        let config = BucketConfig::default();
        let a = classify_header("Monthly Rent", &config, THRESHOLD);
        let b = classify_header("Monthly Rent", &config, THRESHOLD);
        assert_eq!(a, b);
    }
}
