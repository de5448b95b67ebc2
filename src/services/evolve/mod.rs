//! Evolve system: learning, then adaptation, then advancement.

mod adaptation;
mod learning;

pub use adaptation::AdaptationStage;
pub use learning::LearningStage;

use crate::models::{Capability, Evolution, Experience, Level};
use tracing::instrument;

/// Composes the learning and adaptation stages and rates the outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvolveStage {
    learner: LearningStage,
    adapter: AdaptationStage,
}

impl EvolveStage {
    /// Creates an evolve stage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            learner: LearningStage::new(),
            adapter: AdaptationStage::new(),
        }
    }

    /// Evolves from an experience: learn, adapt, advance.
    #[instrument(
        skip_all,
        fields(
            operation = "evolve.evolve",
            problem_kind = experience.problem.kind(),
            has_feedback = experience.feedback.is_some()
        )
    )]
    pub fn evolve(&self, experience: Experience) -> Evolution {
        let learning = self.learner.learn(experience);
        let adaptation = self.adapter.adapt(learning);
        let evolution = Self::advance(&adaptation);

        metrics::counter!(
            "essential_evolve_total",
            "capability" => evolution.capability.as_str()
        )
        .increment(1);
        tracing::debug!(%evolution, "Evolution step recorded");
        evolution
    }

    /// Rates an adaptation.
    #[must_use]
    pub const fn advance(adaptation: &Experience) -> Evolution {
        Evolution {
            growth: Self::measure_growth(adaptation),
            capability: Self::evaluate_capability(adaptation),
            potential: Self::assess_potential(adaptation),
        }
    }

    const fn measure_growth(_adaptation: &Experience) -> Level {
        Level::Medium
    }

    const fn evaluate_capability(_adaptation: &Experience) -> Capability {
        Capability::Improved
    }

    const fn assess_potential(_adaptation: &Experience) -> Level {
        Level::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Creation, Problem, Thought};
    use serde_json::json;

    const EXPECTED: Evolution = Evolution {
        growth: Level::Medium,
        capability: Capability::Improved,
        potential: Level::High,
    };

    fn experience(problem: Problem) -> Experience {
        Experience::new(
            Thought::default(),
            Creation {
                novelty: Level::Low,
                value: Level::Low,
                feasibility: Level::Low,
            },
            problem,
        )
    }

    #[test]
    fn test_learning_and_adaptation_are_identity() {
        let original = experience(Problem::text("x")).with_feedback("good");
        let learned = LearningStage::new().learn(original.clone());
        assert_eq!(learned, original);
        let adapted = AdaptationStage::new().adapt(learned);
        assert_eq!(adapted, original);
    }

    #[test]
    fn test_evolve_is_constant() {
        let stage = EvolveStage::new();
        assert_eq!(stage.evolve(experience(Problem::text("anything"))), EXPECTED);
        assert_eq!(stage.evolve(experience(Problem::from(json!([1, 2])))), EXPECTED);
        assert_eq!(
            stage.evolve(experience(Problem::text("x")).with_feedback("bad")),
            EXPECTED
        );
    }
}
