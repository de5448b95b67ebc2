//! Learning stage.

use crate::models::Experience;
use tracing::instrument;

/// Extracts knowledge from an experience. Currently a pass-through.
#[derive(Debug, Clone, Copy, Default)]
pub struct LearningStage;

impl LearningStage {
    /// Creates a learning stage.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Learns from an experience, returning it unchanged.
    #[instrument(skip_all, fields(operation = "learning.learn"))]
    pub fn learn(&self, experience: Experience) -> Experience {
        let patterns = Self::extract_patterns(experience);
        let knowledge = Self::integrate_knowledge(patterns);
        Self::optimize_learning(knowledge)
    }

    const fn extract_patterns(experience: Experience) -> Experience {
        experience
    }

    const fn integrate_knowledge(patterns: Experience) -> Experience {
        patterns
    }

    const fn optimize_learning(knowledge: Experience) -> Experience {
        knowledge
    }
}
