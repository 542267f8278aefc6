//! Tag-cluster strategy
//!
//! Buckets items by primary theme (first matching table theme), runs greedy
//! spacing independently inside each bucket, then concatenates buckets in
//! order of first appearance. Trades some spacing optimality for topical
//! grouping, which the coherence score rewards.

use super::{greedy_spacing, StrategyParams};
use crate::domain::entities::AttributedItem;
use crate::domain::errors::StrategyError;

pub fn reorder(
    items: &[AttributedItem],
    params: &StrategyParams<'_>,
) -> Result<Vec<AttributedItem>, StrategyError> {
    let mut buckets: Vec<(String, Vec<AttributedItem>)> = Vec::new();
    for item in items {
        let primary = params.classifier.primary_tag(item);
        match buckets.iter().position(|(tag, _)| *tag == primary) {
            Some(pos) => buckets[pos].1.push(item.clone()),
            None => buckets.push((primary, vec![item.clone()])),
        }
    }

    let mut ordered = Vec::with_capacity(items.len());
    for (_, bucket) in buckets {
        ordered.extend(greedy_spacing::reorder(&bucket, params)?);
    }

    Ok(ordered)
}
