//! Prometheus metrics.

use crate::config::MetricsSettings;
use crate::{Error, Result};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Metrics configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsConfig {
    /// Whether metrics are enabled.
    pub enabled: bool,
}

impl MetricsConfig {
    /// Builds metrics configuration from config settings with env overrides.
    ///
    /// `ESSENTIAL_METRICS_ENABLED` wins over the config file. `force` (the
    /// `--metrics` flag) always enables.
    #[must_use]
    pub fn from_settings(settings: Option<&MetricsSettings>, force: bool) -> Self {
        Self::from_settings_with(settings, force, |key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_settings`], reading overrides through `env`.
    #[must_use]
    pub fn from_settings_with(
        settings: Option<&MetricsSettings>,
        force: bool,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut enabled = settings.and_then(|config| config.enabled).unwrap_or(false);
        if let Some(v) = env("ESSENTIAL_METRICS_ENABLED").as_deref().and_then(parse_bool) {
            enabled = v;
        }
        Self {
            enabled: enabled || force,
        }
    }
}

/// Handle to the installed in-process recorder.
#[derive(Debug, Clone)]
pub struct MetricsHandle {
    prometheus: PrometheusHandle,
}

impl MetricsHandle {
    /// Renders all recorded metrics in Prometheus text format.
    #[must_use]
    pub fn render(&self) -> String {
        self.prometheus.render()
    }
}

/// Installs the Prometheus recorder if metrics are enabled.
///
/// # Errors
///
/// Returns an error if a global recorder is already installed.
pub fn install_prometheus(config: MetricsConfig) -> Result<Option<MetricsHandle>> {
    if !config.enabled {
        return Ok(None);
    }

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| Error::OperationFailed {
            operation: "metrics_recorder_install".to_string(),
            cause: e.to_string(),
        })?;

    Ok(Some(MetricsHandle { prometheus }))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EssentialFramework, Problem};
    use test_case::test_case;

    fn enabled(settings: Option<bool>, force: bool, env: Option<&str>) -> bool {
        let settings = settings.map(|enabled| MetricsSettings {
            enabled: Some(enabled),
        });
        let env = env.map(str::to_string);
        MetricsConfig::from_settings_with(settings.as_ref(), force, |key| {
            (key == "ESSENTIAL_METRICS_ENABLED").then(|| env.clone()).flatten()
        })
        .enabled
    }

    #[test_case(None, false, None, false; "off by default")]
    #[test_case(Some(true), false, None, true; "config enables")]
    #[test_case(Some(true), false, Some("off"), false; "env disables config")]
    #[test_case(Some(false), false, Some("YES"), true; "env enables config")]
    #[test_case(Some(true), false, Some("maybe"), true; "unparseable env ignored")]
    #[test_case(Some(false), true, Some("0"), true; "flag always wins")]
    fn test_from_settings_precedence(
        settings: Option<bool>,
        force: bool,
        env: Option<&str>,
        expected: bool,
    ) {
        assert_eq!(enabled(settings, force, env), expected);
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let handle = install_prometheus(MetricsConfig { enabled: false }).unwrap();
        assert!(handle.is_none());
    }

    #[test]
    fn test_render_includes_solve_counter() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = MetricsHandle {
            prometheus: recorder.handle(),
        };

        let creation = ::metrics::with_local_recorder(&recorder, || {
            EssentialFramework::default().solve(&Problem::text("hello world"))
        });
        assert_eq!(creation, EssentialFramework::default().solve(&Problem::text("hi")));

        let rendered = handle.render();
        assert!(rendered.contains("essential_solve_total"));
        assert!(rendered.contains(r#"kind="text""#));
        assert!(rendered.contains("essential_evolve_total"));
    }
}
