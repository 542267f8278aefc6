//! Greedy spacing strategy
//!
//! Builds the output left to right; each step places the remaining item
//! whose owner key has gone the longest without being placed (keys never
//! placed count as infinitely distant). Ties go to the earliest item in the
//! original order, which keeps the strategy fully deterministic.
//!
//! This is the canonical greedy answer to "reorder so repeats of one key
//! are at least k apart". O(n²): the remaining pool is rescanned per step.

use super::StrategyParams;
use crate::domain::entities::AttributedItem;
use crate::domain::errors::StrategyError;
use std::collections::HashMap;

pub fn reorder(
    items: &[AttributedItem],
    _params: &StrategyParams<'_>,
) -> Result<Vec<AttributedItem>, StrategyError> {
    let mut remaining: Vec<&AttributedItem> = items.iter().collect();
    let mut last_placed: HashMap<&str, usize> = HashMap::new();
    let mut ordered = Vec::with_capacity(items.len());

    for step in 0..items.len() {
        // `None` distance means the key was never placed: farther than any
        // finite gap.
        let mut best: Option<(usize, Option<usize>)> = None;
        for (idx, candidate) in remaining.iter().enumerate() {
            let distance = last_placed
                .get(candidate.owner_key.as_str())
                .map(|&at| step - at);
            let displaces = match best {
                Some((_, incumbent)) => farther(distance, incumbent),
                None => true,
            };
            if displaces {
                best = Some((idx, distance));
            }
        }

        let Some((idx, _)) = best else {
            return Err(StrategyError::PoolExhausted { step });
        };
        let chosen = remaining.remove(idx);
        last_placed.insert(chosen.owner_key.as_str(), step);
        ordered.push(chosen.clone());
    }

    Ok(ordered)
}

/// Strict "farther than": `None` beats any finite distance, equal distances
/// do not displace the incumbent.
fn farther(candidate: Option<usize>, incumbent: Option<usize>) -> bool {
    match (candidate, incumbent) {
        (None, Some(_)) => true,
        (None, None) | (Some(_), None) => false,
        (Some(c), Some(i)) => c > i,
    }
}
