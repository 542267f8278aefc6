//! Sequence analysis: owner-key runs, violations, and scoring
//!
//! Single pass over the sequence, O(n) plus the adjacent-pair tag overlap.

use crate::domain::entities::{AttributedItem, RunViolation, SequenceAnalysis};
use std::collections::{BTreeMap, BTreeSet};

/// Analyze one candidate ordering against a run-length limit.
///
/// Walks the sequence once tracking the current owner-key run; each maximal
/// run longer than `max_consecutive` is recorded as one violation. The
/// distribution score is 1.0 for a violation-free sequence and decays with
/// the worst observed run; the coherence score is the mean Jaccard overlap
/// of adjacent tag sets.
pub fn analyze_sequence(items: &[AttributedItem], max_consecutive: usize) -> SequenceAnalysis {
    if items.is_empty() {
        return SequenceAnalysis::empty();
    }

    let mut key_counts: BTreeMap<String, usize> = BTreeMap::new();
    for item in items {
        *key_counts.entry(item.owner_key.clone()).or_insert(0) += 1;
    }

    let mut violations = Vec::new();
    let mut max_run = 1;
    let mut run_start = 0;
    let mut run_length = 1;

    for i in 1..=items.len() {
        if i < items.len() && items[i].owner_key == items[i - 1].owner_key {
            run_length += 1;
            continue;
        }

        // Run ends at i - 1
        if run_length > max_consecutive {
            violations.push(RunViolation {
                start_index: run_start,
                owner_key: items[run_start].owner_key.clone(),
                run_length,
            });
        }
        max_run = max_run.max(run_length);
        run_start = i;
        run_length = 1;
    }

    let distribution_score = if violations.is_empty() {
        1.0
    } else {
        (1.0 - (max_run - max_consecutive) as f64 / items.len() as f64).max(0.0)
    };

    SequenceAnalysis {
        total_items: items.len(),
        unique_keys: key_counts.len(),
        key_counts,
        max_consecutive_run: max_run,
        violations,
        distribution_score,
        coherence_score: coherence_score(items),
    }
}

/// Mean Jaccard similarity over all adjacent item pairs. A single item has
/// nothing to clash with, so it scores 1.0; pairs where both tag sets are
/// empty contribute 0.
fn coherence_score(items: &[AttributedItem]) -> f64 {
    if items.len() <= 1 {
        return 1.0;
    }

    let total: f64 = items
        .windows(2)
        .map(|pair| jaccard(&pair[0].tags, &pair[1].tags))
        .sum();
    total / (items.len() - 1) as f64
}

fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}
