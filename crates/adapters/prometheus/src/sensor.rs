//! Prometheus query sensor — one instant query, one reading.

use promsensor_app::ports::PolledSensor;
use promsensor_domain::entity::{SensorDeviceClass, SensorState, SensorStateClass};

use crate::config::PrometheusSensorConfig;
use crate::error::QueryError;
use crate::response::{error_detail, parse_instant_query};

/// Path of the instant-query API, appended to the configured base URL.
pub const QUERY_PATH: &str = "/api/v1/query";

/// Identity used when the configuration has no explicit `unique_id`.
#[must_use]
pub fn default_unique_id(base_url: &str, query: &str) -> String {
    format!("${base_url}$${query}")
}

/// Sensor exposing `data.result[0].value[1]` of a Prometheus instant query.
///
/// Construction never touches the network; the first reading arrives with
/// the first [`update`](PolledSensor::update).
#[derive(Debug, Clone)]
pub struct PrometheusQuerySensor {
    client: reqwest::Client,
    endpoint_url: String,
    query: String,
    name: String,
    unit_of_measurement: Option<String>,
    state_class: Option<SensorStateClass>,
    device_class: Option<SensorDeviceClass>,
    unique_id: String,
    native_value: SensorState,
}

impl PrometheusQuerySensor {
    /// Create a sensor from its configuration, sharing `client`.
    #[must_use]
    pub fn new(config: PrometheusSensorConfig, client: reqwest::Client) -> Self {
        let base_url = config.prometheus_url;
        let endpoint_url = format!(
            "{}{QUERY_PATH}",
            base_url.strip_suffix('/').unwrap_or(&base_url)
        );
        let unique_id = config
            .unique_id
            .unwrap_or_else(|| default_unique_id(&base_url, &config.prometheus_query));

        Self {
            client,
            endpoint_url,
            query: config.prometheus_query,
            name: config.name,
            unit_of_measurement: config.unit_of_measurement,
            state_class: config.state_class,
            device_class: config.device_class,
            unique_id,
            native_value: SensorState::Unknown,
        }
    }

    /// Full URL of the instant-query endpoint.
    #[must_use]
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// The PromQL expression.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Run the query once and return the reading without storing it.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] describing why no reading was obtained.
    pub async fn fetch(&self) -> Result<String, QueryError> {
        let transport = |source| QueryError::Transport {
            endpoint: self.endpoint_url.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.endpoint_url)
            .query(&[("query", self.query.as_str())])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(QueryError::Status {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        parse_instant_query(&body, &self.query)
    }

    fn log_failure(&self, err: &QueryError) {
        if err.is_warning() {
            tracing::warn!(
                unique_id = %self.unique_id,
                query = %self.query,
                endpoint = %self.endpoint_url,
                %err,
                "Prometheus query returned no reading"
            );
        } else {
            let cause = std::error::Error::source(err).map(ToString::to_string);
            tracing::error!(
                unique_id = %self.unique_id,
                query = %self.query,
                endpoint = %self.endpoint_url,
                %err,
                cause = cause.as_deref().unwrap_or("-"),
                "Prometheus query failed"
            );
        }
    }
}

impl PolledSensor for PrometheusQuerySensor {
    fn name(&self) -> &str {
        &self.name
    }

    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn native_value(&self) -> &SensorState {
        &self.native_value
    }

    fn native_unit_of_measurement(&self) -> Option<&str> {
        self.unit_of_measurement.as_deref()
    }

    fn device_class(&self) -> Option<SensorDeviceClass> {
        self.device_class
    }

    fn state_class(&self) -> Option<SensorStateClass> {
        self.state_class
    }

    async fn update(&mut self) {
        self.native_value = match self.fetch().await {
            Ok(reading) => {
                tracing::debug!(
                    unique_id = %self.unique_id,
                    %reading,
                    "Prometheus query refreshed"
                );
                SensorState::Value(reading)
            }
            Err(err) => {
                self.log_failure(&err);
                SensorState::Unknown
            }
        };
    }
}
