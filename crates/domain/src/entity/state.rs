//! Sensor state — the current reading of a sensor entity.

use serde::{Deserialize, Serialize};

/// The reserved state text meaning "no valid reading available".
pub const STATE_UNKNOWN: &str = "unknown";

/// Current reading of a sensor.
///
/// On the wire this is a plain string: [`Unknown`](Self::Unknown) is
/// `"unknown"`, [`Value`](Self::Value) is the raw reading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SensorState {
    #[default]
    Unknown,
    Value(String),
}

impl From<String> for SensorState {
    fn from(value: String) -> Self {
        if value == STATE_UNKNOWN {
            Self::Unknown
        } else {
            Self::Value(value)
        }
    }
}

impl From<SensorState> for String {
    fn from(state: SensorState) -> Self {
        match state {
            SensorState::Unknown => STATE_UNKNOWN.to_string(),
            SensorState::Value(v) => v,
        }
    }
}

impl std::fmt::Display for SensorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => f.write_str(STATE_UNKNOWN),
            Self::Value(v) => f.write_str(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_unknown() {
        assert_eq!(SensorState::default(), SensorState::Unknown);
    }

    #[test]
    fn should_display_sentinel_for_unknown() {
        assert_eq!(SensorState::Unknown.to_string(), "unknown");
        assert_eq!(SensorState::Value("42.5".to_string()).to_string(), "42.5");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let json = serde_json::to_string(&SensorState::Value("0.75".to_string())).unwrap();
        assert_eq!(json, "\"0.75\"");
        let json = serde_json::to_string(&SensorState::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
    }

    #[test]
    fn should_parse_sentinel_back_into_unknown() {
        let state: SensorState = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(state, SensorState::Unknown);
        let state: SensorState = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(state, SensorState::Value("12".to_string()));
    }
}
