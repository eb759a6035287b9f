//! Sensor entity — the host's view of a single sensor.
//!
//! A [`SensorEntity`] is a snapshot: identity, presentation metadata and the
//! latest [`SensorState`], plus the bookkeeping timestamps the host keeps.

mod class;
mod state;

pub use class::{SensorDeviceClass, SensorStateClass};
pub use state::{STATE_UNKNOWN, SensorState};

use serde::{Deserialize, Serialize};

use crate::error::{PromSensorError, ValidationError};
use crate::time::{Timestamp, now};

/// Snapshot of a sensor as registered with the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorEntity {
    pub unique_id: String,
    pub name: String,
    pub state: SensorState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_of_measurement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_class: Option<SensorDeviceClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_class: Option<SensorStateClass>,
    pub last_changed: Timestamp,
    pub last_updated: Timestamp,
}

impl SensorEntity {
    /// Create a builder for constructing a [`SensorEntity`].
    #[must_use]
    pub fn builder() -> SensorEntityBuilder {
        SensorEntityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PromSensorError::Validation`] when `unique_id` or `name`
    /// is empty.
    pub fn validate(&self) -> Result<(), PromSensorError> {
        if self.unique_id.is_empty() {
            return Err(ValidationError::EmptyUniqueId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Replace the state.
    ///
    /// `last_updated` always moves to `ts`; `last_changed` only moves when
    /// the state differs from the previous one. Returns whether it changed.
    pub fn update_state(&mut self, state: SensorState, ts: Timestamp) -> bool {
        self.last_updated = ts;
        if self.state == state {
            return false;
        }
        self.state = state;
        self.last_changed = ts;
        true
    }
}

/// Step-by-step builder for [`SensorEntity`].
#[derive(Debug, Default)]
pub struct SensorEntityBuilder {
    unique_id: Option<String>,
    name: Option<String>,
    state: SensorState,
    unit_of_measurement: Option<String>,
    device_class: Option<SensorDeviceClass>,
    state_class: Option<SensorStateClass>,
}

impl SensorEntityBuilder {
    #[must_use]
    pub fn unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: SensorState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn unit_of_measurement(mut self, unit: Option<impl Into<String>>) -> Self {
        self.unit_of_measurement = unit.map(Into::into);
        self
    }

    #[must_use]
    pub fn device_class(mut self, device_class: Option<SensorDeviceClass>) -> Self {
        self.device_class = device_class;
        self
    }

    #[must_use]
    pub fn state_class(mut self, state_class: Option<SensorStateClass>) -> Self {
        self.state_class = state_class;
        self
    }

    /// Consume the builder, validate, and return a [`SensorEntity`].
    ///
    /// Both timestamps are set to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`PromSensorError::Validation`] if `unique_id` or `name` is
    /// missing or empty.
    pub fn build(self) -> Result<SensorEntity, PromSensorError> {
        let ts = now();
        let entity = SensorEntity {
            unique_id: self.unique_id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            state: self.state,
            unit_of_measurement: self.unit_of_measurement,
            device_class: self.device_class,
            state_class: self.state_class,
            last_changed: ts,
            last_updated: ts,
        };
        entity.validate()?;
        Ok(entity)
    }
}
