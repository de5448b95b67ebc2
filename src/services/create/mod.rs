//! Create system: innovation, then generation, then validation.

mod generator;
mod innovation;

pub use generator::GeneratorStage;
pub use innovation::InnovationStage;

use crate::config::FrameworkConfig;
use crate::models::{Creation, Level, Thought};
use tracing::instrument;

/// Composes the innovation and generator stages and validates the result.
///
/// Validation is fixed: every creation is rated novelty `medium`,
/// value `medium`, feasibility `high`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateStage {
    innovator: InnovationStage,
    generator: GeneratorStage,
}

impl CreateStage {
    /// Creates a create stage from configuration.
    #[must_use]
    pub const fn new(config: &FrameworkConfig) -> Self {
        Self {
            innovator: InnovationStage::new(config.limits),
            generator: GeneratorStage::new(),
        }
    }

    /// Returns the innovation stage.
    #[must_use]
    pub const fn innovator(&self) -> &InnovationStage {
        &self.innovator
    }

    /// Returns the generator stage.
    #[must_use]
    pub const fn generator(&self) -> &GeneratorStage {
        &self.generator
    }

    /// Creates from a thought: innovate, generate, validate.
    #[instrument(skip_all, fields(operation = "create.create"))]
    pub fn create(&self, thought: &Thought) -> Creation {
        let innovation = self.innovator.innovate(thought);
        let generation = self.generator.generate(&innovation);
        Self::validate(&generation)
    }

    /// Rates a generated output.
    #[must_use]
    pub const fn validate(generation: &str) -> Creation {
        Creation {
            novelty: Self::assess_novelty(generation),
            value: Self::assess_value(generation),
            feasibility: Self::assess_feasibility(generation),
        }
    }

    const fn assess_novelty(_generation: &str) -> Level {
        Level::Medium
    }

    const fn assess_value(_generation: &str) -> Level {
        Level::Medium
    }

    const fn assess_feasibility(_generation: &str) -> Level {
        Level::High
    }
}
