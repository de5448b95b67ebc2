//! Structured logging configuration.

use crate::config::LoggingSettings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "essential=warn";
const VERBOSE_FILTER: &str = "essential=debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parses a format name, falling back to pretty.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Level filter.
    pub filter: EnvFilter,
    /// Optional log file (append mode).
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Builds logging configuration from config settings with env overrides.
    ///
    /// `ESSENTIAL_LOG`, `ESSENTIAL_LOG_FORMAT` and `ESSENTIAL_LOG_FILE` win over
    /// the config file. `verbose` only raises the default filter.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        Self::from_settings_with(settings, verbose, |key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_settings`], reading overrides through `env`.
    ///
    /// An unparseable filter directive falls back to `essential=warn`.
    #[must_use]
    pub fn from_settings_with(
        settings: Option<&LoggingSettings>,
        verbose: bool,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let non_blank = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let format = non_blank("ESSENTIAL_LOG_FORMAT")
            .or_else(|| settings.and_then(|s| s.format.clone()))
            .map(|f| LogFormat::parse(&f))
            .unwrap_or_default();

        let directive = non_blank("ESSENTIAL_LOG")
            .or_else(|| settings.and_then(|s| s.filter.clone()))
            .unwrap_or_else(|| {
                if verbose {
                    VERBOSE_FILTER.to_string()
                } else {
                    DEFAULT_FILTER.to_string()
                }
            });
        let filter =
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let file = non_blank("ESSENTIAL_LOG_FILE")
            .map(PathBuf::from)
            .or_else(|| settings.and_then(|s| s.file.clone()));

        Self {
            format,
            filter,
            file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn same_filter(actual: &EnvFilter, directive: &str) -> bool {
        actual.to_string() == EnvFilter::new(directive).to_string()
    }

    fn settings() -> LoggingSettings {
        LoggingSettings {
            format: Some("json".to_string()),
            filter: Some("essential=info".to_string()),
            file: Some(PathBuf::from("/var/log/from-config.log")),
        }
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("unknown"), LogFormat::Pretty);
    }

    #[test_case(false, DEFAULT_FILTER; "quiet")]
    #[test_case(true, VERBOSE_FILTER; "verbose")]
    fn test_defaults_without_settings(verbose: bool, expected: &str) {
        let config = LoggingConfig::from_settings_with(None, verbose, env_from(&[]));
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(same_filter(&config.filter, expected));
        assert!(config.file.is_none());
    }

    #[test]
    fn test_config_file_beats_verbose() {
        let settings = settings();
        let config = LoggingConfig::from_settings_with(Some(&settings), true, env_from(&[]));
        assert_eq!(config.format, LogFormat::Json);
        assert!(same_filter(&config.filter, "essential=info"));
        assert_eq!(config.file, Some(PathBuf::from("/var/log/from-config.log")));
    }

    #[test]
    fn test_env_beats_config_file() {
        let settings = settings();
        let env = env_from(&[
            ("ESSENTIAL_LOG", "essential=trace"),
            ("ESSENTIAL_LOG_FORMAT", "pretty"),
            ("ESSENTIAL_LOG_FILE", "/tmp/from-env.log"),
        ]);
        let config = LoggingConfig::from_settings_with(Some(&settings), false, env);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(same_filter(&config.filter, "essential=trace"));
        assert_eq!(config.file, Some(PathBuf::from("/tmp/from-env.log")));
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let settings = settings();
        let env = env_from(&[("ESSENTIAL_LOG", "  "), ("ESSENTIAL_LOG_FILE", "")]);
        let config = LoggingConfig::from_settings_with(Some(&settings), false, env);
        assert!(same_filter(&config.filter, "essential=info"));
        assert_eq!(config.file, Some(PathBuf::from("/var/log/from-config.log")));
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        let env = env_from(&[("ESSENTIAL_LOG", "essential=verbose")]);
        let config = LoggingConfig::from_settings_with(None, true, env);
        assert!(same_filter(&config.filter, DEFAULT_FILTER));
    }
}
