//! Sensor poller — the host scheduler that refreshes one sensor on a timer.
//!
//! [`SensorPoller::start`] spawns a loop that refreshes the sensor, records
//! the new state in the [`SensorRegistry`], publishes a state-change event
//! when the value moved, then sleeps for the scan interval. The first
//! refresh happens immediately.
//!
//! Refreshes never overlap: the next sleep only starts once the current
//! refresh has returned, so a slow endpoint delays the schedule instead of
//! stacking requests.

use tokio::task::JoinHandle;

use promsensor_domain::error::PromSensorError;
use promsensor_domain::event::Event;
use promsensor_domain::time::ScanInterval;

use crate::ports::{EventPublisher, PolledSensor};
use crate::services::registry::{SensorRegistry, StateChange};

/// Drives periodic refresh of a single sensor.
pub struct SensorPoller<S, P> {
    sensor: S,
    registry: SensorRegistry,
    publisher: P,
    interval: ScanInterval,
}

impl<S, P> SensorPoller<S, P>
where
    S: PolledSensor + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    #[must_use]
    pub fn new(sensor: S, registry: SensorRegistry, publisher: P, interval: ScanInterval) -> Self {
        Self {
            sensor,
            registry,
            publisher,
            interval,
        }
    }

    /// The polled sensor.
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Refresh the sensor once and record the result.
    ///
    /// # Errors
    ///
    /// Returns [`PromSensorError::NotFound`] if the sensor was never
    /// registered, or an error from the event publisher.
    pub async fn poll_once(&mut self) -> Result<Option<StateChange>, PromSensorError> {
        self.sensor.update().await;

        let state = self.sensor.state().clone();
        let change = self
            .registry
            .record_state(self.sensor.unique_id(), state)
            .await?;

        if let Some(change) = &change {
            tracing::info!(
                unique_id = %change.unique_id,
                from = %change.from,
                to = %change.to,
                "sensor state changed"
            );
            self.publisher
                .publish(Event::state_changed(
                    change.unique_id.clone(),
                    &change.from,
                    &change.to,
                ))
                .await?;
        }

        Ok(change)
    }

    /// Spawn the refresh loop on the current tokio runtime.
    pub fn start(self) -> JoinHandle<()> {
        tracing::info!(
            unique_id = %self.sensor.unique_id(),
            interval_secs = self.interval.as_secs(),
            "sensor poller started"
        );
        tokio::spawn(self.run())
    }

    async fn run(mut self) {
        loop {
            if let Err(err) = self.poll_once().await {
                tracing::warn!(
                    unique_id = %self.sensor.unique_id(),
                    %err,
                    "failed to record sensor state, retrying next interval"
                );
            }
            tokio::time::sleep(self.interval.as_duration()).await;
        }
    }
}
