//! # promsensor-app
//!
//! Application layer — the host runtime and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement:
//!   - `PolledSensor` — the entity contract the host reads and refreshes
//!   - `SensorPlatform` — builds sensors from validated configuration
//!   - `EventPublisher` — publish registration and state-change events
//! - Provide the **host runtime**:
//!   - `SensorRegistry` — identity registry and latest snapshots
//!   - `SensorPoller` — drives `update` on a fixed interval
//!   - `load_platform` — sets a platform up and starts its pollers
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `promsensor-domain` only (plus `tokio` for channels, locks and
//! timers). Never imports adapter crates.

pub mod event_bus;
pub mod ports;
pub mod services;
