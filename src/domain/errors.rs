//! Error types for Content Ordering

use thiserror::Error;

/// Caller misconfiguration. Surfaced immediately, never retried.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Distribution and coherence weights must sum to ~1.0
    #[error("Score weights must sum to ~1.0: got {sum}")]
    InvalidWeights { sum: f64 },

    /// The run-length limit must allow at least one item per run
    #[error("max_consecutive must be at least 1: got {value}")]
    InvalidMaxConsecutive { value: usize },
}

/// Failure inside a single strategy while generating a candidate.
///
/// Absorbed by the optimizer: the failing strategy is excluded from scoring
/// for that call and the error is reported, never propagated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StrategyError {
    /// The selection loop found no placeable item despite a non-empty pool
    #[error("Selection pool exhausted at step {step}")]
    PoolExhausted { step: usize },

    /// Catch-all for unexpected internal failures
    #[error("Strategy failed internally: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_weights_display() {
        let err = ConfigError::InvalidWeights { sum: 1.4 };
        assert_eq!(err.to_string(), "Score weights must sum to ~1.0: got 1.4");
    }

    #[test]
    fn test_invalid_max_consecutive_display() {
        let err = ConfigError::InvalidMaxConsecutive { value: 0 };
        assert_eq!(err.to_string(), "max_consecutive must be at least 1: got 0");
    }

    #[test]
    fn test_pool_exhausted_display() {
        let err = StrategyError::PoolExhausted { step: 7 };
        assert_eq!(err.to_string(), "Selection pool exhausted at step 7");
    }
}
