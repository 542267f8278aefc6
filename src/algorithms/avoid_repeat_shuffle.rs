//! Avoid-repeat shuffle strategy
//!
//! Seeded random construction: each step picks uniformly from the remaining
//! items whose owner key differs from the one just placed, falling back to
//! the whole remaining pool only when every leftover item shares that key.
//!
//! The random source is owned per call and seeded from `StrategyParams`, so
//! identical seeds reproduce identical orderings and concurrent calls never
//! share RNG state.

use super::StrategyParams;
use crate::domain::entities::AttributedItem;
use crate::domain::errors::StrategyError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn reorder(
    items: &[AttributedItem],
    params: &StrategyParams<'_>,
) -> Result<Vec<AttributedItem>, StrategyError> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut remaining: Vec<&AttributedItem> = items.iter().collect();
    let mut ordered: Vec<AttributedItem> = Vec::with_capacity(items.len());

    while !remaining.is_empty() {
        let previous_key = ordered.last().map(|it| it.owner_key.as_str());
        let eligible: Vec<usize> = remaining
            .iter()
            .enumerate()
            .filter(|(_, it)| Some(it.owner_key.as_str()) != previous_key)
            .map(|(idx, _)| idx)
            .collect();

        let idx = if eligible.is_empty() {
            rng.gen_range(0..remaining.len())
        } else {
            eligible[rng.gen_range(0..eligible.len())]
        };
        ordered.push(remaining.remove(idx).clone());
    }

    Ok(ordered)
}
