//! Platform loading — set up a platform, register its sensors, start polling.
//!
//! Mirrors what the host does when a sensor platform is configured:
//!
//! 1. [`SensorPlatform::setup`] builds the sensors (no network IO)
//! 2. each sensor is registered under its `unique_id`; a duplicate is logged
//!    and skipped, the rest of the platform still loads
//! 3. an `EntityRegistered` event is published
//! 4. a [`SensorPoller`] is started, refreshing immediately and then on the
//!    platform's scan interval
//!
//! [`LoadedPlatform::unload`] reverses this: pollers are aborted and the
//! sensors leave the registry. A load that fails halfway is unloaded the
//! same way before the error is returned.

use tokio::task::JoinHandle;

use promsensor_domain::error::{PromSensorError, ValidationError};
use promsensor_domain::event::{Event, EventType};
use promsensor_domain::time::ScanInterval;

use crate::ports::{EventPublisher, PolledSensor, SensorPlatform};
use crate::services::poller::SensorPoller;
use crate::services::registry::SensorRegistry;

/// Handle on a platform whose sensors are registered and polled.
pub struct LoadedPlatform {
    name: &'static str,
    unique_ids: Vec<String>,
    tasks: Vec<JoinHandle<()>>,
}

impl LoadedPlatform {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Identities of the sensors that were registered.
    #[must_use]
    pub fn unique_ids(&self) -> &[String] {
        &self.unique_ids
    }

    /// Stop polling and remove every sensor of this platform from the registry.
    pub async fn unload(self, registry: &SensorRegistry) {
        for task in &self.tasks {
            task.abort();
        }
        for unique_id in &self.unique_ids {
            registry.remove(unique_id).await;
        }
        tracing::info!(
            platform = self.name,
            sensors = self.unique_ids.len(),
            "platform unloaded"
        );
    }

    /// Register one sensor, announce it and start its poller.
    ///
    /// The id is recorded before publishing so a failed publish still gets
    /// rolled back by [`unload`](Self::unload).
    async fn add<S, E>(
        &mut self,
        sensor: S,
        registry: &SensorRegistry,
        publisher: &E,
        interval: ScanInterval,
    ) -> Result<(), PromSensorError>
    where
        S: PolledSensor + Send + Sync + 'static,
        E: EventPublisher + Clone + Send + Sync + 'static,
    {
        let snapshot = sensor.snapshot()?;
        let unique_id = snapshot.unique_id.clone();

        match registry.register(snapshot).await {
            Ok(()) => {}
            Err(PromSensorError::Validation(ValidationError::DuplicateUniqueId(id))) => {
                tracing::error!(
                    platform = self.name,
                    unique_id = %id,
                    sensor = sensor.name(),
                    "a sensor with this unique id already exists, skipping"
                );
                return Ok(());
            }
            Err(err) => return Err(err),
        }
        self.unique_ids.push(unique_id.clone());

        publisher
            .publish(Event::new(
                EventType::EntityRegistered,
                unique_id,
                serde_json::json!({ "name": sensor.name(), "platform": self.name }),
            ))
            .await?;

        let poller = SensorPoller::new(sensor, registry.clone(), publisher.clone(), interval);
        self.tasks.push(poller.start());
        Ok(())
    }
}

/// Set up `platform`, register its sensors and start one poller per sensor.
///
/// Loading is all or nothing: if any sensor fails, the pollers already
/// started are aborted and the sensors already registered are removed.
///
/// # Errors
///
/// Returns an error if platform setup fails, if a sensor snapshot is
/// invalid, or if the publisher rejects an event. Duplicate unique ids are
/// not errors; those sensors are skipped.
pub async fn load_platform<P, E>(
    platform: &mut P,
    registry: &SensorRegistry,
    publisher: &E,
) -> Result<LoadedPlatform, PromSensorError>
where
    P: SensorPlatform,
    E: EventPublisher + Clone + Send + Sync + 'static,
{
    let name = platform.name();
    let interval = platform.scan_interval();
    let sensors = platform.setup().await?;

    let mut loaded = LoadedPlatform {
        name,
        unique_ids: Vec::with_capacity(sensors.len()),
        tasks: Vec::with_capacity(sensors.len()),
    };

    for sensor in sensors {
        if let Err(err) = loaded.add(sensor, registry, publisher, interval).await {
            tracing::error!(
                platform = name,
                error = %err,
                "platform failed to load, rolling back"
            );
            loaded.unload(registry).await;
            return Err(err);
        }
    }

    tracing::info!(
        platform = name,
        sensors = loaded.unique_ids.len(),
        interval_secs = interval.as_secs(),
        "platform loaded"
    );
    Ok(loaded)
}
