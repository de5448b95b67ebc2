//! Cognition stage: turns a raw problem into an [`Understanding`].

use crate::config::CognitionConfig;
use crate::models::{Problem, ProblemRef, Understanding};
use tracing::instrument;

/// Tokenizes text input and builds a context window per token.
///
/// Only text problems carry patterns. Structured and other problems yield an
/// empty understanding that still references the raw problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct CognitionStage {
    config: CognitionConfig,
}

/// Splits text on whitespace, treating the ASCII information separators
/// (U+001C to U+001F) as whitespace too.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl CognitionStage {
    /// Creates a cognition stage with the given settings.
    #[must_use]
    pub const fn new(config: CognitionConfig) -> Self {
        Self { config }
    }

    /// Builds an understanding of `problem`. Never fails.
    #[instrument(skip_all, fields(operation = "cognition.understand", kind = problem.kind()))]
    pub fn understand(&self, problem: &Problem) -> Understanding {
        let patterns = self.recognize_patterns(problem);
        let context = self.analyze_context(&patterns);
        let meaning = Self::extract_meaning(problem, patterns, context);
        let understanding = Self::integrate_understanding(meaning);

        tracing::debug!(patterns = understanding.patterns.len(), "Built understanding");
        understanding
    }

    fn recognize_patterns(&self, problem: &Problem) -> Vec<String> {
        match problem.classify() {
            ProblemRef::Text(text) if self.config.lowercase => {
                tokens(&text.to_lowercase()).map(str::to_string).collect()
            },
            ProblemRef::Text(text) => tokens(text).map(str::to_string).collect(),
            ProblemRef::Structured(_) | ProblemRef::Other(_) => Vec::new(),
        }
    }

    /// Window for token `i` is `tokens[i - before ..= i + after]`, clamped to bounds.
    fn analyze_context(&self, tokens: &[String]) -> Vec<Vec<String>> {
        (0..tokens.len())
            .map(|i| {
                let start = i.saturating_sub(self.config.window_before);
                let end = i
                    .saturating_add(self.config.window_after)
                    .saturating_add(1)
                    .min(tokens.len());
                tokens[start..end].to_vec()
            })
            .collect()
    }

    fn extract_meaning(
        problem: &Problem,
        patterns: Vec<String>,
        context: Vec<Vec<String>>,
    ) -> Understanding {
        Understanding {
            patterns,
            context,
            raw_data: problem.clone(),
        }
    }

    const fn integrate_understanding(meaning: Understanding) -> Understanding {
        meaning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_understand_lowercases_and_splits() {
        let u = CognitionStage::default().understand(&Problem::text("Hello  World\tAgain"));
        assert_eq!(u.patterns, strings(&["hello", "world", "again"]));
        assert_eq!(u.raw_data, Problem::text("Hello  World\tAgain"));
    }

    #[test]
    fn test_context_windows_are_clamped() {
        let u = CognitionStage::default().understand(&Problem::text("a b c d e f"));
        assert_eq!(u.context.len(), 6);
        assert_eq!(u.context[0], strings(&["a", "b", "c"]));
        assert_eq!(u.context[1], strings(&["a", "b", "c", "d"]));
        assert_eq!(u.context[2], strings(&["a", "b", "c", "d", "e"]));
        assert_eq!(u.context[5], strings(&["d", "e", "f"]));
    }

    #[test]
    fn test_custom_window_and_case() {
        let stage = CognitionStage::new(CognitionConfig {
            window_before: 0,
            window_after: 1,
            lowercase: false,
        });
        let u = stage.understand(&Problem::text("A B C"));
        assert_eq!(u.patterns, strings(&["A", "B", "C"]));
        assert_eq!(u.context, vec![strings(&["A", "B"]), strings(&["B", "C"]), strings(&["C"])]);
    }

    #[test]
    fn test_non_text_degrades_to_empty() {
        let stage = CognitionStage::default();
        for problem in [
            Problem::from(json!(42)),
            Problem::from(json!({"k": "v w"})),
            Problem::from(json!(null)),
        ] {
            let u = stage.understand(&problem);
            assert!(u.patterns.is_empty());
            assert!(u.context.is_empty());
            assert_eq!(u.raw_data, problem);
        }
    }

    #[test]
    fn test_information_separators_split_tokens() {
        let u = CognitionStage::default().understand(&Problem::from("a\u{1c}b\u{1f}C  d"));
        assert_eq!(u.patterns, strings(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_wrapped_json_string_is_text() {
        let u = CognitionStage::default().understand(&Problem::Other(json!("Hello World")));
        assert_eq!(u.patterns, strings(&["hello", "world"]));
    }

    #[test]
    fn test_blank_text_has_no_patterns() {
        let u = CognitionStage::default().understand(&Problem::text("   \n "));
        assert!(u.patterns.is_empty());
        assert!(u.context.is_empty());
    }
}
