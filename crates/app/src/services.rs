//! Host services — registration and scheduling of sensors.
//!
//! Each service accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod host;
pub mod poller;
pub mod registry;
