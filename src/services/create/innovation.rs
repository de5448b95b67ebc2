//! Innovation stage: pairs up every possibility in a thought.

use crate::config::LimitsConfig;
use crate::models::{Innovation, Thought};
use crate::services::combinations::{pairs, warn_if_quadratic};
use tracing::instrument;

/// Builds all 2-combinations over `concept ++ patterns ++ implications`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InnovationStage {
    limits: LimitsConfig,
}

impl InnovationStage {
    /// Creates an innovation stage.
    #[must_use]
    pub const fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Innovates on a thought.
    #[instrument(
        skip_all,
        fields(
            operation = "innovation.innovate",
            possibilities = thought.possibility_count()
        )
    )]
    pub fn innovate(&self, thought: &Thought) -> Innovation {
        let possibilities = Self::explore_possibilities(thought);
        warn_if_quadratic(
            "innovation",
            possibilities.len(),
            self.limits.quadratic_warn_threshold,
        );

        let combinations = Self::create_combinations(&possibilities);
        let innovation = Self::select_innovations(combinations);

        metrics::histogram!("essential_stage_items", "stage" => "innovation")
            .record(innovation.len() as f64);
        innovation
    }

    fn explore_possibilities(thought: &Thought) -> Vec<&String> {
        thought.possibilities().collect()
    }

    fn create_combinations(possibilities: &[&String]) -> Vec<(String, String)> {
        pairs(possibilities)
            .map(|(a, b)| ((*a).clone(), (*b).clone()))
            .collect()
    }

    /// Every combination is kept.
    fn select_innovations(combinations: Vec<(String, String)>) -> Innovation {
        Innovation::new(combinations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_innovate_spans_all_fields() {
        let thought = Thought {
            concept: vec!["x".into(), "y".into()],
            patterns: vec!["p".into()],
            implications: vec!["i".into()],
        };
        let innovation = InnovationStage::default().innovate(&thought);

        assert_eq!(innovation.len(), 6);
        assert_eq!(innovation.pairs()[0], ("x".to_string(), "y".to_string()));
        assert_eq!(innovation.pairs()[2], ("x".to_string(), "i".to_string()));
        assert_eq!(innovation.pairs()[5], ("p".to_string(), "i".to_string()));
    }

    #[test]
    fn test_empty_thought() {
        let innovation = InnovationStage::default().innovate(&Thought::default());
        assert!(innovation.is_empty());
    }
}
