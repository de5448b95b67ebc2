//! Mind system: cognition, then insight, then synthesis into a [`Thought`].

mod cognition;
mod insight;

pub use cognition::{CognitionStage, tokens};
pub use insight::{InsightStage, RELATION_MARKER};

use crate::config::FrameworkConfig;
use crate::models::{Insights, Problem, ProblemRef, Thought, Understanding};
use tracing::instrument;

/// Composes the cognition and insight stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct MindStage {
    cognition: CognitionStage,
    insight: InsightStage,
}

impl MindStage {
    /// Creates a mind stage from configuration.
    #[must_use]
    pub const fn new(config: &FrameworkConfig) -> Self {
        Self {
            cognition: CognitionStage::new(config.cognition),
            insight: InsightStage::new(config.limits),
        }
    }

    /// Returns the cognition stage.
    #[must_use]
    pub const fn cognition(&self) -> &CognitionStage {
        &self.cognition
    }

    /// Returns the insight stage.
    #[must_use]
    pub const fn insight(&self) -> &InsightStage {
        &self.insight
    }

    /// Thinks about a problem: understand, analyze, synthesize.
    #[instrument(skip_all, fields(operation = "mind.think", kind = problem.kind()))]
    pub fn think(&self, problem: &Problem) -> Thought {
        let understanding = self.cognition.understand(problem);
        let insights = self.insight.analyze(&understanding);
        Self::synthesize(&understanding, insights)
    }

    /// Combines an understanding and its insights into a thought.
    #[must_use]
    pub fn synthesize(understanding: &Understanding, insights: Insights) -> Thought {
        Thought {
            concept: Self::extract_core_concepts(understanding),
            implications: Self::derive_implications(understanding, &insights),
            patterns: Self::identify_patterns(insights),
        }
    }

    /// Text splits on whitespace with case kept; mappings contribute their keys.
    fn extract_core_concepts(understanding: &Understanding) -> Vec<String> {
        match understanding.raw_data.classify() {
            ProblemRef::Text(text) => tokens(text).map(str::to_string).collect(),
            ProblemRef::Structured(map) => map.keys().cloned().collect(),
            ProblemRef::Other(_) => Vec::new(),
        }
    }

    const fn identify_patterns(insights: Insights) -> Vec<String> {
        insights
    }

    fn derive_implications(understanding: &Understanding, insights: &[String]) -> Vec<String> {
        match understanding.raw_data.classify() {
            ProblemRef::Text(text) => insights
                .iter()
                .map(|insight| format!("{text} -> {insight}"))
                .collect(),
            ProblemRef::Structured(_) | ProblemRef::Other(_) => Vec::new(),
        }
    }
}
