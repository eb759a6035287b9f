//! Event — an immutable record of something that happened to a sensor.

use serde::{Deserialize, Serialize};

use crate::entity::SensorState;
use crate::id::EventId;
use crate::time::{Timestamp, now};

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A sensor was added to the registry.
    EntityRegistered,
    /// A sensor's state differs from its previous state.
    StateChanged,
}

/// A single event published on the event bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    /// `unique_id` of the sensor the event is about.
    pub unique_id: String,
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create an event stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(
        event_type: EventType,
        unique_id: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            unique_id: unique_id.into(),
            data,
            timestamp: now(),
        }
    }

    /// A [`EventType::StateChanged`] event carrying `from` and `to`.
    #[must_use]
    pub fn state_changed(
        unique_id: impl Into<String>,
        from: &SensorState,
        to: &SensorState,
    ) -> Self {
        Self::new(
            EventType::StateChanged,
            unique_id,
            serde_json::json!({ "from": from, "to": to }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_record_from_and_to_as_strings() {
        let event = Event::state_changed(
            "load_1",
            &SensorState::Unknown,
            &SensorState::Value("0.42".to_string()),
        );
        assert_eq!(event.event_type, EventType::StateChanged);
        assert_eq!(event.unique_id, "load_1");
        assert_eq!(event.data["from"], "unknown");
        assert_eq!(event.data["to"], "0.42");
    }

    #[test]
    fn should_serialize_event_type_in_snake_case() {
        let json = serde_json::to_string(&EventType::EntityRegistered).unwrap();
        assert_eq!(json, "\"entity_registered\"");
    }
}
