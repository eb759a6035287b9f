//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the host runtime and the sensor
//! integrations. They are defined here (in `app`) so both sides can depend
//! on them without creating circular dependencies.

pub mod event_bus;
pub mod platform;
pub mod sensor;

pub use event_bus::EventPublisher;
pub use platform::SensorPlatform;
pub use sensor::PolledSensor;
