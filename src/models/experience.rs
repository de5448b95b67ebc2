//! Experience and solution trace types.

use super::{Creation, Evolution, Innovation, Insights, Problem, Thought, Understanding};
use serde::{Deserialize, Serialize};

/// Everything the evolve system learns from after one solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// The thought that led to the creation.
    pub thought: Thought,
    /// The creation that was returned.
    pub creation: Creation,
    /// The original problem.
    pub problem: Problem,
    /// Optional external feedback on the creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl Experience {
    /// Creates an experience without feedback.
    #[must_use]
    pub const fn new(thought: Thought, creation: Creation, problem: Problem) -> Self {
        Self {
            thought,
            creation,
            problem,
            feedback: None,
        }
    }

    /// Attaches feedback.
    #[must_use]
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }
}

/// Full trace of a single pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// The input problem.
    pub problem: Problem,
    /// Cognition output.
    pub understanding: Understanding,
    /// Insight output.
    pub insights: Insights,
    /// Mind output.
    pub thought: Thought,
    /// Innovation output.
    pub innovation: Innovation,
    /// Generator output.
    pub blueprint: String,
    /// Create output (the value `solve` returns).
    pub creation: Creation,
    /// Evolve output.
    pub evolution: Evolution,
}
