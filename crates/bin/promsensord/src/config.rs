//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `promsensor.toml` in the working directory, or the file named by
//! `PROMSENSOR_CONFIG`. Every field has a default so the file is optional.
//! Environment variables take precedence over file values.

use promsensor_adapter_prometheus::PrometheusConfig;
use promsensor_domain::error::ValidationError;
use promsensor_domain::time::ScanInterval;
use serde::Deserialize;

const DEFAULT_PATH: &str = "promsensor.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Prometheus platform settings and sensor entries.
    pub prometheus: PrometheusConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from disk then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, if an
    /// override holds an invalid value, or if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("PROMSENSOR_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("PROMSENSOR_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("PROMSENSOR_SCAN_INTERVAL") {
            let secs = val.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: "PROMSENSOR_SCAN_INTERVAL",
                value: val.clone(),
            })?;
            self.prometheus.scan_interval = ScanInterval::from_secs(secs)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.prometheus.validate()?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "promsensord=info,promsensor=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
    /// Semantic validation failure.
    #[error("invalid configuration")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.filter, "promsensord=info,promsensor=info");
        assert_eq!(config.prometheus.scan_interval.as_secs(), 60);
        assert!(config.prometheus.sensors.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.prometheus.scan_interval.as_secs(), 60);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = r#"
            [logging]
            filter = "debug"

            [prometheus]
            scan_interval_secs = 600
            timeout_secs = 5

            [[prometheus.sensors]]
            prometheus_url = "http://localhost:9090"
            prometheus_query = "node_load1"
            name = "Load"
            unit_of_measurement = "load"
            state_class = "measurement"
            device_class = "power_factor"
            unique_id = "load_1"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.prometheus.scan_interval.as_secs(), 600);
        assert_eq!(config.prometheus.sensors.len(), 1);
        assert_eq!(config.prometheus.sensors[0].unique_id.as_deref(), Some("load_1"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.prometheus.scan_interval.as_secs(), 60);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_let_rust_log_win_over_promsensor_log() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("PROMSENSOR_LOG", "warn"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_override_scan_interval_from_env() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("PROMSENSOR_SCAN_INTERVAL", "15")]))
            .unwrap();
        assert_eq!(config.prometheus.scan_interval.as_secs(), 15);
    }

    #[test]
    fn should_reject_unparsable_scan_interval() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("PROMSENSOR_SCAN_INTERVAL", "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnv { var: "PROMSENSOR_SCAN_INTERVAL", .. })
        ));
    }

    #[test]
    fn should_reject_zero_scan_interval() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("PROMSENSOR_SCAN_INTERVAL", "0")]));
        assert!(matches!(
            result,
            Err(ConfigError::Validation(ValidationError::ZeroScanInterval))
        ));
    }

    #[test]
    fn should_reject_sensor_without_query() {
        let toml = r#"
            [[prometheus.sensors]]
            prometheus_url = "http://localhost:9090"
            prometheus_query = "  "
            name = "Load"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(ValidationError::EmptyQuery))
        ));
    }
}
