//! Domain invariants for Content Ordering
//!
//! Pure boolean checkers used by unit and property tests to pin down what
//! any valid optimization result must satisfy.

use super::entities::{AttributedItem, SequenceAnalysis};
use std::collections::BTreeMap;

/// INVARIANT-1: Multiset preservation
/// Reordering never adds, drops, or rewrites items: the output carries the
/// same items (by original index) and the same owner-key multiset.
pub fn invariant_same_multiset(before: &[AttributedItem], after: &[AttributedItem]) -> bool {
    if before.len() != after.len() {
        return false;
    }

    let mut before_indices: Vec<usize> = before.iter().map(|it| it.original_index).collect();
    let mut after_indices: Vec<usize> = after.iter().map(|it| it.original_index).collect();
    before_indices.sort_unstable();
    after_indices.sort_unstable();
    if before_indices != after_indices {
        return false;
    }

    key_histogram(before) == key_histogram(after)
}

/// INVARIANT-2: Violation non-increase
/// The chosen ordering never carries more violations than the input did.
pub fn invariant_violations_not_increased(
    before: &SequenceAnalysis,
    after: &SequenceAnalysis,
) -> bool {
    after.violations.len() <= before.violations.len()
}

/// INVARIANT-3: Score bounds
/// Both scores always stay inside [0, 1].
pub fn invariant_scores_in_range(analysis: &SequenceAnalysis) -> bool {
    (0.0..=1.0).contains(&analysis.distribution_score)
        && (0.0..=1.0).contains(&analysis.coherence_score)
}

fn key_histogram(items: &[AttributedItem]) -> BTreeMap<&str, usize> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item.owner_key.as_str()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(idx: usize, key: &str) -> AttributedItem {
        AttributedItem::new(idx, format!("content {idx}"), Some(key.to_string()))
    }

    #[test]
    fn test_same_multiset_on_permutation() {
        let before = vec![item(0, "a"), item(1, "a"), item(2, "b")];
        let after = vec![item(1, "a"), item(2, "b"), item(0, "a")];

        assert!(invariant_same_multiset(&before, &after));
    }

    #[test]
    fn test_multiset_rejects_dropped_item() {
        let before = vec![item(0, "a"), item(1, "b")];
        let after = vec![item(0, "a")];

        assert!(!invariant_same_multiset(&before, &after));
    }

    #[test]
    fn test_multiset_rejects_swapped_key() {
        let before = vec![item(0, "a"), item(1, "b")];
        let after = vec![item(0, "a"), item(1, "c")];

        assert!(!invariant_same_multiset(&before, &after));
    }

    #[test]
    fn test_multiset_rejects_duplicated_item() {
        let before = vec![item(0, "a"), item(1, "b")];
        let after = vec![item(0, "a"), item(0, "a")];

        assert!(!invariant_same_multiset(&before, &after));
    }

    #[test]
    fn test_violations_not_increased() {
        let mut before = SequenceAnalysis::empty();
        let after = SequenceAnalysis::empty();
        assert!(invariant_violations_not_increased(&before, &after));

        before.violations.push(crate::domain::entities::RunViolation {
            start_index: 0,
            owner_key: "a".to_string(),
            run_length: 5,
        });
        assert!(invariant_violations_not_increased(&before, &after));
        assert!(!invariant_violations_not_increased(&after, &before));
    }
}
