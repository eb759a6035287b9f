//! Sensor port — the entity contract between the host and a polled sensor.
//!
//! The host owns the lifecycle: it constructs sensors through a
//! [`SensorPlatform`](super::SensorPlatform), calls [`update`](PolledSensor::update)
//! on its own schedule and reads the accessors in between. A sensor never
//! schedules itself.

use std::future::Future;

use promsensor_domain::entity::{SensorDeviceClass, SensorEntity, SensorState, SensorStateClass};
use promsensor_domain::error::PromSensorError;

/// A sensor whose reading is refreshed by polling.
pub trait PolledSensor {
    /// Display name.
    fn name(&self) -> &str;

    /// Stable identity, fixed at construction.
    fn unique_id(&self) -> &str;

    /// The latest reading, or [`SensorState::Unknown`].
    fn native_value(&self) -> &SensorState;

    /// Host-facing state. Always the same value as [`native_value`](Self::native_value).
    fn state(&self) -> &SensorState {
        self.native_value()
    }

    fn native_unit_of_measurement(&self) -> Option<&str> {
        None
    }

    fn device_class(&self) -> Option<SensorDeviceClass> {
        None
    }

    fn state_class(&self) -> Option<SensorStateClass> {
        None
    }

    /// Fetch a fresh reading and store it.
    ///
    /// Infallible from the host's point of view: every failure is logged by
    /// the implementation and turned into [`SensorState::Unknown`].
    fn update(&mut self) -> impl Future<Output = ()> + Send;

    /// Build a [`SensorEntity`] snapshot of the current metadata and state.
    ///
    /// # Errors
    ///
    /// Returns [`PromSensorError::Validation`] if the name or unique id is empty.
    fn snapshot(&self) -> Result<SensorEntity, PromSensorError> {
        SensorEntity::builder()
            .unique_id(self.unique_id())
            .name(self.name())
            .state(self.state().clone())
            .unit_of_measurement(self.native_unit_of_measurement())
            .device_class(self.device_class())
            .state_class(self.state_class())
            .build()
    }
}
