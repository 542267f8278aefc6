//! Core entities for Content Ordering

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Sentinel owner key substituted when attribution is missing.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// A content item with its attribution and thematic tags.
///
/// Items are immutable once constructed; strategies only change an item's
/// position within a sequence, never the item itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributedItem {
    /// Opaque content payload
    pub content: String,
    /// Attribution key (never empty; `UNKNOWN_OWNER` when missing)
    pub owner_key: String,
    /// Thematic tags (deterministic iteration order)
    pub tags: BTreeSet<String>,
    /// Position in the original input sequence
    pub original_index: usize,
}

impl AttributedItem {
    pub fn new(
        original_index: usize,
        content: impl Into<String>,
        owner_key: Option<String>,
    ) -> Self {
        let owner_key = match owner_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => UNKNOWN_OWNER.to_string(),
        };

        Self {
            content: content.into(),
            owner_key,
            tags: BTreeSet::new(),
            original_index,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// One run of a single owner key exceeding the configured maximum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunViolation {
    /// Index where the offending run starts
    pub start_index: usize,
    /// Owner key of the run
    pub owner_key: String,
    /// Total length of the run
    pub run_length: usize,
}

/// Distribution and coherence metrics for one candidate ordering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequenceAnalysis {
    /// Number of items in the sequence
    pub total_items: usize,
    /// Number of distinct owner keys
    pub unique_keys: usize,
    /// Per-key item counts
    pub key_counts: BTreeMap<String, usize>,
    /// Longest run of any single owner key
    pub max_consecutive_run: usize,
    /// Runs exceeding the configured maximum
    pub violations: Vec<RunViolation>,
    /// 1.0 when no run exceeds the maximum, decreasing as the worst run grows
    pub distribution_score: f64,
    /// Mean adjacent-pair tag similarity (Jaccard), in [0, 1]
    pub coherence_score: f64,
}

impl SequenceAnalysis {
    /// Analysis of the empty sequence: everything zero.
    pub fn empty() -> Self {
        Self {
            total_items: 0,
            unique_keys: 0,
            key_counts: BTreeMap::new(),
            max_consecutive_run: 0,
            violations: Vec::new(),
            distribution_score: 0.0,
            coherence_score: 0.0,
        }
    }

    /// True when no run exceeds the configured maximum.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Combined score under the given distribution/coherence weighting.
    pub fn weighted_score(&self, distribution_weight: f64, coherence_weight: f64) -> f64 {
        distribution_weight * self.distribution_score + coherence_weight * self.coherence_score
    }
}

/// Score movement between the baseline and the chosen ordering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    /// Violations removed (positive = fewer violations after)
    pub violations_delta: i64,
    /// Distribution score gained
    pub distribution_delta: f64,
    /// Coherence score gained
    pub coherence_delta: f64,
}

/// Before/after diff produced by one `optimize` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Analysis of the input ordering
    pub before: SequenceAnalysis,
    /// Analysis of the returned ordering
    pub after: SequenceAnalysis,
    /// Name of the winning strategy, or `"none"` when the input is kept
    pub chosen_strategy: String,
    /// True only when every strategy failed to produce a candidate
    pub degraded: bool,
    /// Score movement between `before` and `after`
    pub improvement: Improvement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_owner_uses_sentinel() {
        let item = AttributedItem::new(0, "body", None);
        assert_eq!(item.owner_key, UNKNOWN_OWNER);

        let blank = AttributedItem::new(1, "body", Some("   ".to_string()));
        assert_eq!(blank.owner_key, UNKNOWN_OWNER);
    }

    #[test]
    fn test_present_owner_kept() {
        let item = AttributedItem::new(0, "body", Some("alice".to_string()));
        assert_eq!(item.owner_key, "alice");
    }

    #[test]
    fn test_with_tags_builder() {
        let item = AttributedItem::new(0, "body", None).with_tags(["science", "health"]);
        assert!(item.tags.contains("science"));
        assert!(item.tags.contains("health"));
        assert_eq!(item.tags.len(), 2);
    }

    #[test]
    fn test_empty_analysis_is_all_zero() {
        let analysis = SequenceAnalysis::empty();
        assert_eq!(analysis.total_items, 0);
        assert_eq!(analysis.unique_keys, 0);
        assert_eq!(analysis.max_consecutive_run, 0);
        assert!(analysis.is_clean());
        assert_eq!(analysis.distribution_score, 0.0);
        assert_eq!(analysis.coherence_score, 0.0);
    }

    #[test]
    fn test_weighted_score() {
        let mut analysis = SequenceAnalysis::empty();
        analysis.distribution_score = 0.5;
        analysis.coherence_score = 1.0;

        let combined = analysis.weighted_score(0.7, 0.3);
        assert!((combined - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = OptimizationReport {
            before: SequenceAnalysis::empty(),
            after: SequenceAnalysis::empty(),
            chosen_strategy: "none".to_string(),
            degraded: false,
            improvement: Improvement {
                violations_delta: 0,
                distribution_delta: 0.0,
                coherence_delta: 0.0,
            },
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["chosen_strategy"], "none");
        assert_eq!(json["degraded"], false);
        assert!(json["improvement"]["violations_delta"].is_i64());
    }
}
