//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{AttributedItem, OptimizationReport, SequenceAnalysis};
use crate::domain::errors::ConfigError;

/// Primary Content Ordering API.
///
/// The subsystem is synchronous and purely in-memory; calls are safe from
/// independent threads as long as each call owns its item list.
pub trait ContentOrderingApi: Send + Sync {
    /// Reorder `items` so no owner key repeats beyond the configured
    /// maximum, preferring candidates that also keep neighbors topically
    /// close.
    ///
    /// Only caller misconfiguration is an error. Strategy failures are
    /// absorbed: the worst outcome is the unchanged input with
    /// `report.degraded = true`.
    fn optimize(
        &self,
        items: Vec<AttributedItem>,
    ) -> Result<(Vec<AttributedItem>, OptimizationReport), ConfigError>;

    /// Analyze a sequence without reordering it.
    fn analyze(&self, items: &[AttributedItem]) -> SequenceAnalysis;
}
