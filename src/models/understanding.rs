//! Cognition and insight output types.

use super::Problem;
use serde::{Deserialize, Serialize};

/// Structured understanding produced by the cognition stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Understanding {
    /// Recognized pattern tokens, in input order.
    pub patterns: Vec<String>,
    /// One context window per pattern token.
    pub context: Vec<Vec<String>>,
    /// The problem this understanding was built from.
    pub raw_data: Problem,
}

/// Insight statements produced by the insight stage.
pub type Insights = Vec<String>;
