//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that points at a config file.
pub const CONFIG_PATH_ENV: &str = "ESSENTIAL_CONFIG_PATH";

/// Main configuration for essential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrameworkConfig {
    /// Cognition stage settings.
    pub cognition: CognitionConfig,
    /// Resource limits.
    pub limits: LimitsConfig,
    /// Logging and metrics settings.
    pub observability: ObservabilitySettings,
}

/// Cognition stage settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CognitionConfig {
    /// Tokens taken before each token for its context window.
    pub window_before: usize,
    /// Tokens taken after each token for its context window.
    pub window_after: usize,
    /// Whether input text is lower-cased before tokenizing.
    pub lowercase: bool,
}

impl Default for CognitionConfig {
    fn default() -> Self {
        Self {
            window_before: 2,
            window_after: 2,
            lowercase: true,
        }
    }
}

/// Resource limits.
///
/// Pairwise stages grow quadratically. Nothing is capped; crossing the
/// threshold only logs a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitsConfig {
    /// Input size above which pairwise stages warn.
    pub quadratic_warn_threshold: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            quadratic_warn_threshold: 1_000,
        }
    }
}

/// Observability section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilitySettings {
    /// Logging settings.
    pub logging: Option<LoggingSettings>,
    /// Metrics settings.
    pub metrics: Option<MetricsSettings>,
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Output format: "pretty" or "json".
    pub format: Option<String>,
    /// `EnvFilter` directive, e.g. `essential=debug`.
    pub filter: Option<String>,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// Metrics settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSettings {
    /// Whether the in-process Prometheus recorder is installed.
    pub enabled: Option<bool>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Cognition section.
    pub cognition: Option<ConfigFileCognition>,
    /// Limits section.
    pub limits: Option<ConfigFileLimits>,
    /// Observability section.
    pub observability: Option<ObservabilitySettings>,
}

/// Cognition section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileCognition {
    /// Window before.
    pub window_before: Option<usize>,
    /// Window after.
    pub window_after: Option<usize>,
    /// Lowercase.
    pub lowercase: Option<bool>,
}

/// Limits section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileLimits {
    /// Quadratic warning threshold.
    pub quadratic_warn_threshold: Option<usize>,
}

impl FrameworkConfig {
    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        Self::parse(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid config document.
    pub fn parse(contents: &str) -> crate::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following in order:
    /// 1. `ESSENTIAL_CONFIG_PATH`
    /// 2. Platform-specific config dir (`essential/config.toml`)
    ///
    /// Returns default configuration if no config file is found.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be loaded.
    pub fn load_default() -> crate::Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return Self::load_from_file(Path::new(&path));
            }
        }

        let Some(dirs) = directories::ProjectDirs::from("", "", "essential") else {
            return Ok(Self::default());
        };

        let platform_config = dirs.config_dir().join("config.toml");
        if platform_config.exists() {
            return Self::load_from_file(&platform_config);
        }

        Ok(Self::default())
    }

    /// Converts a `ConfigFile` to `FrameworkConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(cognition) = file.cognition {
            if let Some(v) = cognition.window_before {
                config.cognition.window_before = v;
            }
            if let Some(v) = cognition.window_after {
                config.cognition.window_after = v;
            }
            if let Some(v) = cognition.lowercase {
                config.cognition.lowercase = v;
            }
        }
        if let Some(limits) = file.limits {
            if let Some(v) = limits.quadratic_warn_threshold {
                config.limits.quadratic_warn_threshold = v;
            }
        }
        if let Some(observability) = file.observability {
            config.observability = observability;
        }

        config
    }

    /// Sets the cognition settings.
    #[must_use]
    pub const fn with_cognition(mut self, cognition: CognitionConfig) -> Self {
        self.cognition = cognition;
        self
    }

    /// Sets the quadratic warning threshold.
    #[must_use]
    pub const fn with_quadratic_warn_threshold(mut self, threshold: usize) -> Self {
        self.limits.quadratic_warn_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_pipeline_contract() {
        let config = FrameworkConfig::default();
        assert_eq!(config.cognition.window_before, 2);
        assert_eq!(config.cognition.window_after, 2);
        assert!(config.cognition.lowercase);
        assert_eq!(config.limits.quadratic_warn_threshold, 1_000);
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let config = FrameworkConfig::parse(
            r#"
            [cognition]
            window_after = 4

            [observability.logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.cognition.window_before, 2);
        assert_eq!(config.cognition.window_after, 4);
        assert_eq!(
            config
                .observability
                .logging
                .and_then(|l| l.format)
                .as_deref(),
            Some("json")
        );
    }

    #[test]
    fn test_parse_rejects_unknown_section() {
        let err = FrameworkConfig::parse("[storage]\npath = \"x\"").unwrap_err();
        assert!(err.to_string().contains("parse_config_file"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[limits]\nquadratic_warn_threshold = 10").unwrap();

        let config = FrameworkConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.limits.quadratic_warn_threshold, 10);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = FrameworkConfig::load_from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("read_config_file"));
    }
}
