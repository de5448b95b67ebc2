//! Insight stage: relates every pair of recognized patterns.

use crate::config::LimitsConfig;
use crate::models::{Insights, Understanding};
use crate::services::combinations::{pairs, warn_if_quadratic};
use tracing::instrument;

/// Separator placed between the two related patterns.
pub const RELATION_MARKER: &str = "与";

/// Emits one "A 与 B 相关" statement per unordered pattern pair.
///
/// Output length is `C(n, 2)` for `n` patterns. Duplicates are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightStage {
    limits: LimitsConfig,
}

impl InsightStage {
    /// Creates an insight stage.
    #[must_use]
    pub const fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Analyzes an understanding into insight statements.
    #[instrument(
        skip_all,
        fields(operation = "insight.analyze", patterns = understanding.patterns.len())
    )]
    pub fn analyze(&self, understanding: &Understanding) -> Insights {
        warn_if_quadratic(
            "insight",
            understanding.patterns.len(),
            self.limits.quadratic_warn_threshold,
        );

        let connections = Self::find_connections(understanding);
        let implications = Self::derive_implications(&connections);
        let insights = Self::generate_insights(implications);

        metrics::histogram!("essential_stage_items", "stage" => "insight")
            .record(insights.len() as f64);
        insights
    }

    fn find_connections(understanding: &Understanding) -> Vec<(&str, &str)> {
        pairs(&understanding.patterns)
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect()
    }

    fn derive_implications(connections: &[(&str, &str)]) -> Vec<String> {
        connections
            .iter()
            .map(|(a, b)| format!("{a} {RELATION_MARKER} {b} 相关"))
            .collect()
    }

    const fn generate_insights(implications: Vec<String>) -> Insights {
        implications
    }
}
