//! Round-robin strategy
//!
//! Groups items by owner key (first-appearance order, relative order kept
//! within each group), then emits one item per surviving group per round.
//! Maximizes spacing between same-key items; ignores topical coherence.

use super::StrategyParams;
use crate::domain::entities::AttributedItem;
use crate::domain::errors::StrategyError;
use std::collections::VecDeque;

pub fn reorder(
    items: &[AttributedItem],
    _params: &StrategyParams<'_>,
) -> Result<Vec<AttributedItem>, StrategyError> {
    let mut groups: Vec<(&str, VecDeque<&AttributedItem>)> = Vec::new();
    for item in items {
        match groups.iter().position(|(key, _)| *key == item.owner_key) {
            Some(pos) => groups[pos].1.push_back(item),
            None => groups.push((item.owner_key.as_str(), VecDeque::from([item]))),
        }
    }

    let mut ordered = Vec::with_capacity(items.len());
    while ordered.len() < items.len() {
        for (_, group) in groups.iter_mut() {
            if let Some(item) = group.pop_front() {
                ordered.push(item.clone());
            }
        }
    }

    Ok(ordered)
}
