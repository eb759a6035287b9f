//! Instant-query response decoding.
//!
//! Only the vector shape is understood:
//!
//! ```json
//! { "data": { "result": [ { "value": [ 1700000000.123, "42.5" ] } ] } }
//! ```
//!
//! The reading is `data.result[0].value[1]`; any further samples are ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::error::QueryError;

#[derive(Debug, Deserialize)]
struct InstantQueryResponse {
    data: Option<QueryData>,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    result: Option<Vec<Sample>>,
}

#[derive(Debug, Deserialize)]
struct Sample {
    #[serde(default)]
    value: Vec<Value>,
}

/// Body of a failed API call (`{"status":"error","errorType":..,"error":..}`).
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "errorType")]
    error_type: Option<String>,
    error: String,
}

/// Extract the reading from an instant-query response body.
///
/// # Errors
///
/// - [`QueryError::Decode`] when `body` is not JSON
/// - [`QueryError::EmptyResult`] when `data.result` is absent or empty
/// - [`QueryError::UnexpectedShape`] for any other structure
pub fn parse_instant_query(body: &str, query: &str) -> Result<String, QueryError> {
    let json: Value = serde_json::from_str(body).map_err(QueryError::Decode)?;
    let response: InstantQueryResponse = serde_json::from_value(json)
        .map_err(|err| QueryError::UnexpectedShape(err.to_string()))?;

    let data = response
        .data
        .ok_or_else(|| QueryError::UnexpectedShape("missing `data` object".to_string()))?;

    let Some(first) = data.result.unwrap_or_default().into_iter().next() else {
        return Err(QueryError::EmptyResult {
            query: query.to_string(),
        });
    };

    match first.value.into_iter().nth(1) {
        Some(Value::String(reading)) => Ok(reading),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Ok(scalar.to_string()),
        Some(other) => Err(QueryError::UnexpectedShape(format!(
            "sample value is not a scalar: {other}"
        ))),
        None => Err(QueryError::UnexpectedShape(
            "sample value has fewer than two elements".to_string(),
        )),
    }
}

/// Extract a readable error message from a Prometheus error body.
///
/// Returns `None` when the body is not an error envelope.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    Some(match envelope.error_type {
        Some(kind) => format!("{kind}: {}", envelope.error),
        None => envelope.error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_extract_second_element_of_first_sample() {
        let body = r#"{"status":"success","data":{"resultType":"vector","result":[
            {"metric":{"__name__":"up"},"value":[1700000000,"42.5"]}
        ]}}"#;
        assert_eq!(parse_instant_query(body, "up").unwrap(), "42.5");
    }

    #[test]
    fn should_ignore_samples_after_the_first() {
        let body = r#"{"data":{"result":[
            {"value":[1700000000,"1"]},
            {"value":[1700000000,"2"]}
        ]}}"#;
        assert_eq!(parse_instant_query(body, "up").unwrap(), "1");
    }

    #[test]
    fn should_report_empty_result_with_query() {
        let err = parse_instant_query(r#"{"data":{"result":[]}}"#, "rate(x[5m])").unwrap_err();
        assert!(matches!(err, QueryError::EmptyResult { ref query } if query == "rate(x[5m])"));
    }

    #[test]
    fn should_treat_missing_or_null_result_as_empty() {
        assert!(matches!(
            parse_instant_query(r#"{"data":{}}"#, "up"),
            Err(QueryError::EmptyResult { .. })
        ));
        assert!(matches!(
            parse_instant_query(r#"{"data":{"result":null}}"#, "up"),
            Err(QueryError::EmptyResult { .. })
        ));
    }

    #[test]
    fn should_report_decode_error_for_non_json() {
        assert!(matches!(
            parse_instant_query("<html>oops</html>", "up"),
            Err(QueryError::Decode(_))
        ));
    }

    #[test]
    fn should_report_unexpected_shape_without_data() {
        assert!(matches!(
            parse_instant_query(r#"{"status":"success"}"#, "up"),
            Err(QueryError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn should_report_unexpected_shape_for_short_value_pair() {
        assert!(matches!(
            parse_instant_query(r#"{"data":{"result":[{"value":[1700000000]}]}}"#, "up"),
            Err(QueryError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn should_report_unexpected_shape_for_scalar_result_type() {
        let body = r#"{"data":{"resultType":"scalar","result":[1700000000,"3"]}}"#;
        assert!(matches!(
            parse_instant_query(body, "scalar(up)"),
            Err(QueryError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn should_render_numeric_reading_as_json_text() {
        let body = r#"{"data":{"result":[{"value":[1700000000,17.25]}]}}"#;
        assert_eq!(parse_instant_query(body, "up").unwrap(), "17.25");
    }

    #[test]
    fn should_reject_object_reading() {
        let body = r#"{"data":{"result":[{"value":[1700000000,{"a":1}]}]}}"#;
        assert!(matches!(
            parse_instant_query(body, "up"),
            Err(QueryError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn should_extract_error_detail_from_envelope() {
        let body = r#"{"status":"error","errorType":"bad_data","error":"1:5: parse error"}"#;
        assert_eq!(
            error_detail(body).as_deref(),
            Some("bad_data: 1:5: parse error")
        );
    }

    #[test]
    fn should_return_no_detail_for_plain_text() {
        assert!(error_detail("Service Unavailable").is_none());
    }
}
