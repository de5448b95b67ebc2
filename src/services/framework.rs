//! Top-level orchestrator: think, create, evolve.

use super::{CreateStage, EvolveStage, MindStage};
use crate::config::FrameworkConfig;
use crate::models::{Creation, Experience, Problem, Solution};
use std::time::Instant;
use tracing::instrument;

/// Runs a problem through the mind, create, and evolve systems.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of calls and the same problem always yields the same creation.
///
/// # Example
///
/// ```rust
/// use essential::{EssentialFramework, Level, Problem};
///
/// let framework = EssentialFramework::default();
/// let creation = framework.solve(&Problem::text("hello world"));
/// assert_eq!(creation.feasibility, Level::High);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EssentialFramework {
    mind: MindStage,
    create: CreateStage,
    evolve: EvolveStage,
}

impl EssentialFramework {
    /// Creates a framework from configuration.
    #[must_use]
    pub const fn new(config: &FrameworkConfig) -> Self {
        Self {
            mind: MindStage::new(config),
            create: CreateStage::new(config),
            evolve: EvolveStage::new(),
        }
    }

    /// Solves a problem and returns the creation.
    ///
    /// The evolve system always runs on the resulting experience. Its
    /// evaluation is logged and counted but not returned; use
    /// [`Self::solve_detailed`] to get it.
    #[instrument(
        name = "essential.solve",
        skip_all,
        fields(operation = "solve", kind = problem.kind())
    )]
    pub fn solve(&self, problem: &Problem) -> Creation {
        let start = Instant::now();

        let thought = self.mind.think(problem);
        let creation = self.create.create(&thought);
        let experience = Experience::new(thought, creation, problem.clone());
        let _ = self.evolve.evolve(experience);

        record_solve(problem, start);
        creation
    }

    /// Solves a problem and returns every intermediate artifact.
    ///
    /// `solution.creation` always equals what [`Self::solve`] returns for the
    /// same problem.
    #[instrument(
        name = "essential.solve_detailed",
        skip_all,
        fields(operation = "solve_detailed", kind = problem.kind())
    )]
    pub fn solve_detailed(&self, problem: &Problem) -> Solution {
        let start = Instant::now();

        let understanding = self.mind.cognition().understand(problem);
        let insights = self.mind.insight().analyze(&understanding);
        let thought = MindStage::synthesize(&understanding, insights.clone());

        let innovation = self.create.innovator().innovate(&thought);
        let blueprint = self.create.generator().generate(&innovation);
        let creation = CreateStage::validate(&blueprint);

        let experience = Experience::new(thought.clone(), creation, problem.clone());
        let evolution = self.evolve.evolve(experience);

        record_solve(problem, start);
        Solution {
            problem: problem.clone(),
            understanding,
            insights,
            thought,
            innovation,
            blueprint,
            creation,
            evolution,
        }
    }
}

fn record_solve(problem: &Problem, start: Instant) {
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    metrics::counter!("essential_solve_total", "kind" => problem.kind()).increment(1);
    metrics::histogram!("essential_solve_duration_ms", "kind" => problem.kind())
        .record(elapsed_ms);
    tracing::debug!(elapsed_ms, "Solved problem");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;
    use serde_json::json;

    #[test]
    fn test_solve_matches_detailed_creation() {
        let framework = EssentialFramework::default();
        for problem in [
            Problem::text("hello world"),
            Problem::from(json!({"a": 1})),
            Problem::from(json!(42)),
        ] {
            assert_eq!(
                framework.solve(&problem),
                framework.solve_detailed(&problem).creation
            );
        }
    }

    #[test]
    fn test_solve_detailed_hello_world() {
        let solution = EssentialFramework::default().solve_detailed(&Problem::text("hello world"));

        assert_eq!(solution.understanding.patterns, ["hello", "world"]);
        assert_eq!(solution.insights, ["hello 与 world 相关"]);
        assert_eq!(solution.thought.concept, ["hello", "world"]);
        // concept (2) + patterns (1) + implications (1) = 4 possibilities
        assert_eq!(solution.innovation.len(), 6);
        assert!(solution.blueprint.starts_with(r#"[("hello", "world"), "#));
        assert_eq!(solution.creation.novelty, Level::Medium);
        assert_eq!(solution.evolution.potential, Level::High);
    }

    #[test]
    fn test_custom_config_changes_windows_only() {
        let config = FrameworkConfig::default().with_cognition(crate::config::CognitionConfig {
            window_before: 0,
            window_after: 0,
            lowercase: true,
        });
        let solution = EssentialFramework::new(&config).solve_detailed(&Problem::text("a b"));
        assert_eq!(solution.understanding.context, vec![vec!["a"], vec!["b"]]);
        assert_eq!(solution.insights.len(), 1);
    }
}
