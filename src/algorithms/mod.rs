//! Algorithms module for Content Ordering
//!
//! Contains:
//! - Sequence analyzer (runs, violations, scores)
//! - The reordering strategy library and its registry

pub mod analyzer;
pub mod avoid_repeat_shuffle;
pub mod greedy_spacing;
pub mod round_robin;
pub mod tag_cluster;

pub use analyzer::analyze_sequence;

use crate::classifier::TagClassifier;
use crate::domain::entities::AttributedItem;
use crate::domain::errors::StrategyError;

/// Strategy name reported when the input sequence is kept.
pub const STRATEGY_NONE: &str = "none";

/// Inputs shared by every strategy for one `optimize` call.
pub struct StrategyParams<'a> {
    /// Maximum allowed run length per owner key
    pub max_consecutive: usize,
    /// Seed for strategies that draw randomness
    pub seed: u64,
    /// Theme classifier for tag-aware strategies
    pub classifier: &'a TagClassifier,
}

/// One reordering strategy: a pure (or seeded) permutation generator.
/// Implementations never mutate their input.
pub type StrategyFn =
    fn(&[AttributedItem], &StrategyParams<'_>) -> Result<Vec<AttributedItem>, StrategyError>;

/// The fixed, ordered strategy registry. Registry order is the tie-breaker
/// when candidates score equally, so it must stay stable.
pub fn registry() -> Vec<(&'static str, StrategyFn)> {
    vec![
        ("round_robin", round_robin::reorder as StrategyFn),
        ("greedy_spacing", greedy_spacing::reorder as StrategyFn),
        (
            "avoid_repeat_shuffle",
            avoid_repeat_shuffle::reorder as StrategyFn,
        ),
        ("tag_cluster", tag_cluster::reorder as StrategyFn),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_is_stable() {
        let names: Vec<_> = registry().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "round_robin",
                "greedy_spacing",
                "avoid_repeat_shuffle",
                "tag_cluster"
            ]
        );
    }

    #[test]
    fn test_every_strategy_preserves_multiset() {
        use crate::domain::invariants::invariant_same_multiset;

        let items: Vec<_> = ["a", "a", "b", "c", "a", "b"]
            .iter()
            .enumerate()
            .map(|(i, key)| AttributedItem::new(i, format!("content {i}"), Some(key.to_string())))
            .collect();
        let classifier = TagClassifier::default();
        let params = StrategyParams {
            max_consecutive: 2,
            seed: 11,
            classifier: &classifier,
        };

        for (name, strategy) in registry() {
            let candidate = strategy(&items, &params).unwrap();
            assert!(
                invariant_same_multiset(&items, &candidate),
                "{name} broke the multiset"
            );
        }
    }
}
