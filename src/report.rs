//! Report builder: pure before/after diff of two sequence analyses.

use crate::domain::entities::{Improvement, OptimizationReport, SequenceAnalysis};

/// Assemble the report for one `optimize` call. Both analyses carry their
/// own per-key histogram, so the report is self-contained for downstream
/// serialization.
pub fn build_report(
    before: SequenceAnalysis,
    after: SequenceAnalysis,
    chosen_strategy: &str,
    degraded: bool,
) -> OptimizationReport {
    let improvement = Improvement {
        violations_delta: before.violations.len() as i64 - after.violations.len() as i64,
        distribution_delta: after.distribution_score - before.distribution_score,
        coherence_delta: after.coherence_score - before.coherence_score,
    };

    OptimizationReport {
        before,
        after,
        chosen_strategy: chosen_strategy.to_string(),
        degraded,
        improvement,
    }
}
