//! Prometheus adapter error types.

use promsensor_domain::error::PromSensorError;

/// Errors raised while setting up the Prometheus platform.
#[derive(Debug, thiserror::Error)]
pub enum PrometheusError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// A query against the server failed.
    #[error("Prometheus query failed")]
    Query(#[from] QueryError),
}

/// Why a single refresh could not produce a reading.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Connection refused, DNS failure, timeout, or a broken body stream.
    #[error("unable to connect to the Prometheus server at {endpoint}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Prometheus answered HTTP {status}: {}", .detail.as_deref().unwrap_or("no error detail"))]
    Status {
        status: u16,
        /// Error text from the Prometheus error envelope, when present.
        detail: Option<String>,
    },

    /// The body is not valid JSON.
    #[error("unable to decode response from Prometheus")]
    Decode(#[source] serde_json::Error),

    /// Well-formed response without any sample.
    #[error("empty result returned for query {query}")]
    EmptyResult { query: String },

    /// Valid JSON that does not look like an instant-query vector.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl QueryError {
    /// Whether this failure is logged as a warning rather than an error.
    ///
    /// The server was reachable and answered coherently; only the answer
    /// was not usable.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::EmptyResult { .. })
    }
}

impl PrometheusError {
    /// Convert into a [`PromSensorError::Integration`] for propagation across
    /// port boundaries.
    #[must_use]
    pub fn into_domain(self) -> PromSensorError {
        PromSensorError::Integration(Box::new(self))
    }
}

impl From<PrometheusError> for PromSensorError {
    fn from(err: PrometheusError) -> Self {
        err.into_domain()
    }
}

impl From<QueryError> for PromSensorError {
    fn from(err: QueryError) -> Self {
        PrometheusError::Query(err).into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_with_detail() {
        let err = QueryError::Status {
            status: 400,
            detail: Some("parse error at char 4".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Prometheus answered HTTP 400: parse error at char 4"
        );
    }

    #[test]
    fn should_display_status_without_detail() {
        let err = QueryError::Status {
            status: 503,
            detail: None,
        };
        assert_eq!(err.to_string(), "Prometheus answered HTTP 503: no error detail");
    }

    #[test]
    fn should_name_query_in_empty_result_error() {
        let err = QueryError::EmptyResult {
            query: "up{job=\"node\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "empty result returned for query up{job=\"node\"}"
        );
    }

    #[test]
    fn should_classify_warnings() {
        assert!(QueryError::EmptyResult { query: "up".to_string() }.is_warning());
        assert!(QueryError::Status { status: 500, detail: None }.is_warning());
        assert!(!QueryError::UnexpectedShape("x".to_string()).is_warning());

        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        assert!(!QueryError::Decode(json_err).is_warning());
    }

    #[test]
    fn should_convert_query_error_to_integration_error() {
        let err: PromSensorError = QueryError::EmptyResult {
            query: "up".to_string(),
        }
        .into();
        assert!(matches!(err, PromSensorError::Integration(_)));
    }
}
