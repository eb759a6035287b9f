//! Platform port — turns configuration into sensors.
//!
//! A platform bridges an external metrics source into the host. The host
//! calls [`setup`](SensorPlatform::setup) once, registers every returned
//! sensor and then drives each one with a
//! [`SensorPoller`](crate::services::poller::SensorPoller).

use std::future::Future;

use promsensor_domain::error::PromSensorError;
use promsensor_domain::time::ScanInterval;

use super::PolledSensor;

/// A pluggable sensor platform.
pub trait SensorPlatform {
    /// Sensor type produced by this platform.
    type Sensor: PolledSensor + Send + Sync + 'static;

    /// Unique name identifying this platform (e.g. `"prometheus_query"`).
    fn name(&self) -> &'static str;

    /// How often the host should refresh the sensors of this platform.
    fn scan_interval(&self) -> ScanInterval {
        ScanInterval::default()
    }

    /// Construct every configured sensor.
    ///
    /// Must not perform network IO; the first reading comes from the host's
    /// first call to [`PolledSensor::update`].
    fn setup(&mut self) -> impl Future<Output = Result<Vec<Self::Sensor>, PromSensorError>> + Send;
}
