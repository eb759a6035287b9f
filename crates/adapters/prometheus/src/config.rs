//! Prometheus platform configuration.

use std::time::Duration;

use serde::Deserialize;

use promsensor_domain::entity::{SensorDeviceClass, SensorStateClass};
use promsensor_domain::error::ValidationError;
use promsensor_domain::time::ScanInterval;

/// Configuration for the Prometheus platform.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrometheusConfig {
    /// Seconds between two refreshes of every sensor.
    #[serde(rename = "scan_interval_secs")]
    pub scan_interval: ScanInterval,
    /// Request timeout in seconds, never zero. Unset means no timeout.
    pub timeout_secs: Option<u64>,
    /// One entry per sensor.
    pub sensors: Vec<PrometheusSensorConfig>,
}

/// Configuration of a single query sensor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrometheusSensorConfig {
    /// Base URL of the Prometheus server (e.g. `http://localhost:9090`).
    pub prometheus_url: String,
    /// PromQL expression evaluated as an instant query.
    pub prometheus_query: String,
    /// Display name of the sensor.
    pub name: String,
    #[serde(default)]
    pub unit_of_measurement: Option<String>,
    #[serde(default)]
    pub state_class: Option<SensorStateClass>,
    #[serde(default)]
    pub device_class: Option<SensorDeviceClass>,
    /// Overrides the identity derived from the URL and query.
    #[serde(default)]
    pub unique_id: Option<String>,
}

impl PrometheusConfig {
    /// Request timeout, if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Validate the timeout and every sensor entry.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == Some(0) {
            return Err(ValidationError::ZeroTimeout);
        }
        self.sensors
            .iter()
            .try_for_each(PrometheusSensorConfig::validate)
    }
}

impl PrometheusSensorConfig {
    /// Check that required fields are non-empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prometheus_url.trim().is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        if self.prometheus_query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.unique_id.as_deref() == Some("") {
            return Err(ValidationError::EmptyUniqueId);
        }
        Ok(())
    }
}
