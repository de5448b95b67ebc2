//! Generator stage: renders an innovation into a blueprint string.

use crate::models::Innovation;
use tracing::instrument;

/// Stringifies an innovation. Prototype and refinement are pass-through.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorStage;

impl GeneratorStage {
    /// Creates a generator stage.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates the refined output for an innovation.
    #[instrument(skip_all, fields(operation = "generator.generate", pairs = innovation.len()))]
    pub fn generate(&self, innovation: &Innovation) -> String {
        let blueprint = Self::create_blueprint(innovation);
        let prototype = Self::build_prototype(blueprint);
        Self::refine_solution(prototype)
    }

    fn create_blueprint(innovation: &Innovation) -> String {
        innovation.to_string()
    }

    const fn build_prototype(blueprint: String) -> String {
        blueprint
    }

    const fn refine_solution(prototype: String) -> String {
        prototype
    }
}
