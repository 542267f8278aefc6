//! # Content Ordering Subsystem
//!
//! Constrained reordering of attributed content sequences: no owner key may
//! repeat beyond a configured run length, and neighboring items should stay
//! topically close. Several independent heuristic strategies each propose a
//! permutation; the best-scoring candidate wins, with well-defined fallback
//! behavior when none improves on the input.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (AttributedItem, SequenceAnalysis,
//!   OptimizationReport) and checkable invariants
//! - **Algorithms**: Sequence analyzer plus the strategy library
//!   (round-robin, greedy spacing, seeded avoid-repeat shuffle, tag cluster)
//! - **Classifier**: Keyword-table theme tagging
//! - **Ports**: Inbound API (ContentOrderingApi)
//! - **Application**: Service orchestration
//!
//! The subsystem is synchronous, purely in-memory, and never mutates its
//! input; the only randomness is the shuffle strategy's caller-seeded RNG.

pub mod algorithms;
pub mod application;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod ports;
pub mod report;

pub use algorithms::{analyze_sequence, registry, StrategyFn, StrategyParams, STRATEGY_NONE};
pub use application::service::ContentOrderingService;
pub use classifier::{TagClassifier, ThemeTable, GENERAL_TAG};
pub use config::OptimizerConfig;
pub use domain::entities::{
    AttributedItem, Improvement, OptimizationReport, RunViolation, SequenceAnalysis, UNKNOWN_OWNER,
};
pub use domain::errors::{ConfigError, StrategyError};
pub use ports::inbound::ContentOrderingApi;
pub use report::build_report;
