//! # Essential
//!
//! A three-system problem-solving pipeline: think, create, evolve.
//!
//! A [`Problem`] flows through the mind system (cognition and insight) into a
//! [`Thought`], through the create system (innovation and generation) into a
//! [`Creation`], and the resulting [`Experience`] is fed to the evolve system
//! (learning and adaptation).
//!
//! Every stage is a total, pure function. Inputs of an unsupported shape
//! degrade to empty intermediate results rather than failing.
//!
//! ## Example
//!
//! ```rust
//! use essential::{EssentialFramework, Problem};
//!
//! let framework = EssentialFramework::default();
//! let solution = framework.solve_detailed(&Problem::text("hello world"));
//!
//! assert_eq!(solution.insights, ["hello 与 world 相关"]);
//! assert_eq!(solution.creation, framework.solve(&Problem::text("hello world")));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod models;
pub mod observability;
pub mod services;

// Re-exports for convenience
pub use config::FrameworkConfig;
pub use models::{
    Capability, Creation, Evolution, Experience, Innovation, Insights, Level, Problem, ProblemRef,
    Solution, Thought, Understanding,
};
pub use services::{
    AdaptationStage, CognitionStage, CreateStage, EssentialFramework, EvolveStage, GeneratorStage,
    InnovationStage, InsightStage, LearningStage, MindStage,
};

/// Error type for essential operations.
///
/// The pipeline itself never fails. Errors come from the surfaces around it.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | A problem supplied as JSON does not parse |
/// | `OperationFailed` | Config file I/O or parsing fails, logging or metrics setup fails |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for essential operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("test error".to_string());
        assert_eq!(err.to_string(), "invalid input: test error");

        let err = Error::OperationFailed {
            operation: "test".to_string(),
            cause: "failed".to_string(),
        };
        assert_eq!(err.to_string(), "operation 'test' failed: failed");
    }
}
