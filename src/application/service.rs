//! Content Ordering Service
//!
//! Orchestrates one optimization pass:
//! 1. Validate configuration
//! 2. Tag untagged items
//! 3. Analyze the baseline ordering
//! 4. Run every registered strategy, isolating individual failures
//! 5. Score surviving candidates and pick the best
//! 6. Keep the input whenever nothing beats it

use crate::algorithms::{analyze_sequence, registry, StrategyFn, StrategyParams, STRATEGY_NONE};
use crate::classifier::TagClassifier;
use crate::config::OptimizerConfig;
use crate::domain::entities::{AttributedItem, OptimizationReport, SequenceAnalysis};
use crate::domain::errors::ConfigError;
use crate::domain::invariants::invariant_violations_not_increased;
use crate::ports::inbound::ContentOrderingApi;
use crate::report::build_report;

use tracing::{debug, info, warn};

/// Content Ordering Service
pub struct ContentOrderingService {
    config: OptimizerConfig,
    classifier: TagClassifier,
    registry: Vec<(&'static str, StrategyFn)>,
}

impl ContentOrderingService {
    /// Create a new service with default config, classifier, and registry.
    pub fn new() -> Self {
        Self::with_config(OptimizerConfig::default())
    }

    /// Create a new service with custom config.
    pub fn with_config(config: OptimizerConfig) -> Self {
        Self {
            config,
            classifier: TagClassifier::default(),
            registry: registry(),
        }
    }

    /// Replace the theme classifier (injectable keyword table).
    pub fn with_classifier(mut self, classifier: TagClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace the strategy registry. Order matters: it is the tie-breaker
    /// between equally scored candidates.
    pub fn with_registry(mut self, registry: Vec<(&'static str, StrategyFn)>) -> Self {
        self.registry = registry;
        self
    }

    /// Items arriving without tags get them from the classifier; pre-tagged
    /// items pass through untouched.
    fn ensure_tagged(&self, items: Vec<AttributedItem>) -> Vec<AttributedItem> {
        items
            .into_iter()
            .map(|item| {
                if item.tags.is_empty() {
                    let tags = self.classifier.classify(&item);
                    item.with_tags(tags)
                } else {
                    item
                }
            })
            .collect()
    }
}

impl Default for ContentOrderingService {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentOrderingApi for ContentOrderingService {
    fn optimize(
        &self,
        items: Vec<AttributedItem>,
    ) -> Result<(Vec<AttributedItem>, OptimizationReport), ConfigError> {
        // 1. Only caller misuse surfaces as an error
        self.config.validate()?;

        let items = self.ensure_tagged(items);
        let max_consecutive = self.config.max_consecutive;

        // 2. Baseline analysis
        let before = analyze_sequence(&items, max_consecutive);

        info!(
            item_count = items.len(),
            max_consecutive,
            baseline_violations = before.violations.len(),
            "Optimizing content sequence"
        );

        // 3. Nothing to fix: keep the input ordering
        if before.is_clean() {
            let report = build_report(before.clone(), before, STRATEGY_NONE, false);
            return Ok((items, report));
        }

        // 4. Run every strategy, collecting explicit outcomes. One failing
        //    strategy must not abort the call.
        let params = StrategyParams {
            max_consecutive,
            seed: self.config.resolved_seed(),
            classifier: &self.classifier,
        };

        let mut outcomes = Vec::with_capacity(self.registry.len());
        let mut failures: Vec<String> = Vec::new();
        for (name, strategy) in &self.registry {
            let outcome = strategy(&items, &params);
            if let Err(err) = &outcome {
                warn!(strategy = *name, error = %err, "Strategy failed; excluded from scoring");
                failures.push(format!("{name}: {err}"));
            }
            outcomes.push((*name, outcome));
        }

        // 5. Every strategy failed: soft degradation, never an error
        if !self.registry.is_empty() && failures.len() == self.registry.len() {
            warn!(
                failed = failures.len(),
                detail = %failures.join("; "),
                "All strategies failed; returning input unchanged"
            );
            let report = build_report(before.clone(), before, STRATEGY_NONE, true);
            return Ok((items, report));
        }

        // 6. Score candidates; ties keep the earlier registry entry
        let distribution_weight = self.config.distribution_weight;
        let coherence_weight = self.config.coherence_weight;
        let baseline_score = before.weighted_score(distribution_weight, coherence_weight);

        let mut best: Option<(&'static str, Vec<AttributedItem>, SequenceAnalysis, f64)> = None;
        for (name, outcome) in outcomes {
            let Ok(candidate) = outcome else {
                continue;
            };
            let analysis = analyze_sequence(&candidate, max_consecutive);

            // A candidate may trade one long run for several shorter ones
            // (tag clustering splits runs at bucket boundaries) and still
            // score well on the combined metric. The result must never
            // carry more violations than the input, so such candidates are
            // discarded outright.
            if !invariant_violations_not_increased(&before, &analysis) {
                debug!(
                    strategy = name,
                    candidate_violations = analysis.violations.len(),
                    baseline_violations = before.violations.len(),
                    "Candidate adds violations; discarded"
                );
                continue;
            }

            let combined = analysis.weighted_score(distribution_weight, coherence_weight);

            debug!(
                strategy = name,
                combined,
                candidate_violations = analysis.violations.len(),
                "Scored candidate"
            );

            let displaces = match &best {
                Some((_, _, _, incumbent)) => combined > *incumbent,
                None => true,
            };
            if displaces {
                best = Some((name, candidate, analysis, combined));
            }
        }

        // 7. The winner must strictly beat the baseline
        match best {
            Some((name, candidate, after, combined)) if combined > baseline_score => {
                info!(
                    strategy = name,
                    combined,
                    violations_removed = before.violations.len() as i64
                        - after.violations.len() as i64,
                    "Content ordering complete"
                );
                let report = build_report(before, after, name, false);
                Ok((candidate, report))
            }
            _ => {
                info!(
                    baseline_score,
                    "No candidate beat the baseline; keeping input order"
                );
                let report = build_report(before.clone(), before, STRATEGY_NONE, false);
                Ok((items, report))
            }
        }
    }

    fn analyze(&self, items: &[AttributedItem]) -> SequenceAnalysis {
        analyze_sequence(items, self.config.max_consecutive)
    }
}
