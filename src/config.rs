//! Configuration for the Content Ordering subsystem

use crate::domain::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Tolerance when checking that the two score weights sum to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Seed used when the caller does not supply one, so repeated calls with
/// identical input stay reproducible.
const DEFAULT_SEED: u64 = 0x5EED;

/// Optimizer configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Maximum allowed run length per owner key
    pub max_consecutive: usize,
    /// Weight of the distribution score in candidate ranking
    pub distribution_weight: f64,
    /// Weight of the coherence score in candidate ranking
    pub coherence_weight: f64,
    /// Seed for the shuffle strategy; `None` uses a fixed default
    pub random_seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_consecutive: 3,
            distribution_weight: 0.7,
            coherence_weight: 0.3,
            random_seed: None,
        }
    }
}

impl OptimizerConfig {
    /// Reject caller misuse before any work happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_consecutive == 0 {
            return Err(ConfigError::InvalidMaxConsecutive {
                value: self.max_consecutive,
            });
        }

        let sum = self.distribution_weight + self.coherence_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE
            || self.distribution_weight < 0.0
            || self.coherence_weight < 0.0
        {
            return Err(ConfigError::InvalidWeights { sum });
        }

        Ok(())
    }

    /// Seed handed to the shuffle strategy for this call.
    pub fn resolved_seed(&self) -> u64 {
        self.random_seed.unwrap_or(DEFAULT_SEED)
    }
}
