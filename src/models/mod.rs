//! Data models for essential.
//!
//! Every value here lives for a single pipeline call and is never mutated
//! after construction.

mod assessment;
mod experience;
mod problem;
mod thought;
mod understanding;

pub use assessment::{Capability, Creation, Evolution, Level};
pub use experience::{Experience, Solution};
pub use problem::{Problem, ProblemRef};
pub use thought::{Innovation, Thought};
pub use understanding::{Insights, Understanding};
