//! Pipeline stages.
//!
//! Three systems run in sequence, each built from two stages:
//!
//! ```text
//! problem ─▶ Mind ───────────▶ Create ─────────────▶ creation
//!            Cognition          Innovation              │
//!            Insight            Generator               ▼
//!                                              Evolve (Learning, Adaptation)
//! ```
//!
//! Every stage is a pure function of its input and the immutable config it
//! was built with.

mod combinations;
mod create;
mod evolve;
mod framework;
mod mind;

pub use combinations::{pair_count, pairs};
pub use create::{CreateStage, GeneratorStage, InnovationStage};
pub use evolve::{AdaptationStage, EvolveStage, LearningStage};
pub use framework::EssentialFramework;
pub use mind::{CognitionStage, InsightStage, MindStage, RELATION_MARKER};
