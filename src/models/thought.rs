//! Thought and innovation types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Synthesized output of the mind system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thought {
    /// Core concepts extracted from the raw problem.
    pub concept: Vec<String>,
    /// Patterns identified from the insights.
    pub patterns: Vec<String>,
    /// Implications linking the problem to each insight.
    pub implications: Vec<String>,
}

impl Thought {
    /// Returns all possibilities in order: concepts, then patterns, then implications.
    pub fn possibilities(&self) -> impl Iterator<Item = &String> {
        self.concept
            .iter()
            .chain(&self.patterns)
            .chain(&self.implications)
    }

    /// Returns the total number of possibilities.
    #[must_use]
    pub fn possibility_count(&self) -> usize {
        self.concept.len() + self.patterns.len() + self.implications.len()
    }
}

/// Unordered pairs of possibilities, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Innovation(Vec<(String, String)>);

impl Innovation {
    /// Wraps a list of pairs.
    #[must_use]
    pub const fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// Returns the pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Prints as `[("a", "b"), ("c", "d")]`, quoting each element.
impl fmt::Display for Innovation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (left, right)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({left:?}, {right:?})")?;
        }
        f.write_str("]")
    }
}
