//! # promsensor-adapter-prometheus
//!
//! Prometheus platform — exposes the first value of a Prometheus instant
//! query as a polled sensor.
//!
//! ## How it works
//!
//! Every configured sensor holds a base URL and a PromQL expression. On each
//! refresh it issues `GET <url>/api/v1/query?query=<query>` and stores
//! `data.result[0].value[1]` as its state. Any failure (unreachable server,
//! non-success status, malformed body, empty result) is logged and the state
//! becomes `unknown`; nothing is propagated to the host.
//!
//! | Failure | Log level |
//! |---------|-----------|
//! | connection / DNS / timeout | error |
//! | non-2xx status | warn |
//! | body is not JSON | error |
//! | empty `data.result` | warn |
//! | other shapes | error |
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `promsensor-app` and `promsensor-domain`.

mod config;
mod error;
pub mod response;
mod sensor;

pub use config::{PrometheusConfig, PrometheusSensorConfig};
pub use error::{PrometheusError, QueryError};
pub use sensor::{PrometheusQuerySensor, QUERY_PATH, default_unique_id};

use promsensor_app::ports::SensorPlatform;
use promsensor_domain::error::PromSensorError;
use promsensor_domain::time::ScanInterval;

const USER_AGENT: &str = concat!("promsensor/", env!("CARGO_PKG_VERSION"));

/// Platform that builds one [`PrometheusQuerySensor`] per configured entry.
pub struct PrometheusPlatform {
    config: PrometheusConfig,
    client: Option<reqwest::Client>,
}

impl PrometheusPlatform {
    /// Create a platform that builds its own HTTP client during setup.
    #[must_use]
    pub fn new(config: PrometheusConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Create a platform that shares an existing HTTP client.
    ///
    /// `timeout_secs` from the configuration is ignored in that case.
    #[must_use]
    pub fn with_client(config: PrometheusConfig, client: reqwest::Client) -> Self {
        Self {
            config,
            client: Some(client),
        }
    }

    fn client(&mut self) -> Result<reqwest::Client, PrometheusError> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(PrometheusError::ClientBuild)?;
        self.client = Some(client.clone());
        Ok(client)
    }
}

impl SensorPlatform for PrometheusPlatform {
    type Sensor = PrometheusQuerySensor;

    fn name(&self) -> &'static str {
        "prometheus_query"
    }

    fn scan_interval(&self) -> ScanInterval {
        self.config.scan_interval
    }

    async fn setup(&mut self) -> Result<Vec<PrometheusQuerySensor>, PromSensorError> {
        self.config.validate()?;
        let client = self.client()?;

        let sensors: Vec<PrometheusQuerySensor> = self
            .config
            .sensors
            .iter()
            .cloned()
            .map(|cfg| PrometheusQuerySensor::new(cfg, client.clone()))
            .collect();

        tracing::info!(
            count = sensors.len(),
            interval_secs = self.config.scan_interval.as_secs(),
            "Prometheus platform set up"
        );

        Ok(sensors)
    }
}
