//! Creation and evolution judgments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-step rating scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Low rating.
    Low,
    /// Medium rating.
    Medium,
    /// High rating.
    High,
}

impl Level {
    /// Returns the level as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of capability change after an evolution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Capability got worse.
    Degraded,
    /// No measurable change.
    Unchanged,
    /// Capability got better.
    Improved,
}

impl Capability {
    /// Returns the capability as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Degraded => "degraded",
            Self::Unchanged => "unchanged",
            Self::Improved => "improved",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated result of the create system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creation {
    /// How new the creation is.
    pub novelty: Level,
    /// How valuable the creation is.
    pub value: Level,
    /// How feasible the creation is.
    pub feasibility: Level,
}

impl fmt::Display for Creation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "novelty={} value={} feasibility={}",
            self.novelty, self.value, self.feasibility
        )
    }
}

/// Result of the evolve system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    /// Growth over the step.
    pub growth: Level,
    /// Capability change.
    pub capability: Capability,
    /// Future potential.
    pub potential: Level,
}

impl fmt::Display for Evolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "growth={} capability={} potential={}",
            self.growth, self.capability, self.potential
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_serializes_lowercase() {
        let creation = Creation {
            novelty: Level::Medium,
            value: Level::Low,
            feasibility: Level::High,
        };
        assert_eq!(
            serde_json::to_string(&creation).unwrap(),
            r#"{"novelty":"medium","value":"low","feasibility":"high"}"#
        );
        assert_eq!(creation.to_string(), "novelty=medium value=low feasibility=high");
    }

    #[test]
    fn test_evolution_display() {
        let evolution = Evolution {
            growth: Level::Medium,
            capability: Capability::Improved,
            potential: Level::High,
        };
        assert_eq!(
            evolution.to_string(),
            "growth=medium capability=improved potential=high"
        );
        let json = serde_json::to_value(evolution).unwrap();
        assert_eq!(json["capability"], "improved");
    }
}
