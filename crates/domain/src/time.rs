//! Time helpers: timestamps for entity bookkeeping and the polling interval.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// UTC timestamp used for `last_changed`, `last_updated` and event times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// How often the host refreshes a sensor.
///
/// Configured in whole seconds and never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ScanInterval(Duration);

impl ScanInterval {
    /// Interval used when the configuration does not set one.
    pub const DEFAULT_SECS: u64 = 60;

    /// Build an interval from a number of seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroScanInterval`] when `secs` is zero.
    pub fn from_secs(secs: u64) -> Result<Self, ValidationError> {
        if secs == 0 {
            return Err(ValidationError::ZeroScanInterval);
        }
        Ok(Self(Duration::from_secs(secs)))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    #[must_use]
    pub fn as_secs(self) -> u64 {
        self.0.as_secs()
    }
}

impl Default for ScanInterval {
    fn default() -> Self {
        Self(Duration::from_secs(Self::DEFAULT_SECS))
    }
}

impl TryFrom<u64> for ScanInterval {
    type Error = ValidationError;

    fn try_from(secs: u64) -> Result<Self, Self::Error> {
        Self::from_secs(secs)
    }
}

impl From<ScanInterval> for u64 {
    fn from(interval: ScanInterval) -> Self {
        interval.as_secs()
    }
}
