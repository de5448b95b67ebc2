//! Adaptation stage.

use crate::models::Experience;
use tracing::instrument;

/// Adapts to what was learned. Currently a pass-through.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptationStage;

impl AdaptationStage {
    /// Creates an adaptation stage.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Adapts to a learning result, returning it unchanged.
    #[instrument(skip_all, fields(operation = "adaptation.adapt"))]
    pub fn adapt(&self, learning: Experience) -> Experience {
        let analysis = Self::analyze_environment(learning);
        let strategy = Self::develop_strategy(analysis);
        Self::implement_adaptation(strategy)
    }

    const fn analyze_environment(learning: Experience) -> Experience {
        learning
    }

    const fn develop_strategy(analysis: Experience) -> Experience {
        analysis
    }

    const fn implement_adaptation(strategy: Experience) -> Experience {
        strategy
    }
}
