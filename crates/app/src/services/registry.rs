//! Sensor registry — the host's identity map of registered sensors.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use promsensor_domain::entity::{SensorEntity, SensorState};
use promsensor_domain::error::{NotFoundError, PromSensorError, ValidationError};
use promsensor_domain::time::now;

/// A state transition recorded by [`SensorRegistry::record_state`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChange {
    pub unique_id: String,
    pub from: SensorState,
    pub to: SensorState,
}

/// In-memory registry of sensor snapshots keyed by `unique_id`.
///
/// Cheaply cloneable; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct SensorRegistry {
    entities: Arc<RwLock<HashMap<String, SensorEntity>>>,
}

impl SensorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new sensor.
    ///
    /// # Errors
    ///
    /// Returns [`PromSensorError::Validation`] if the snapshot is invalid or
    /// its `unique_id` is already registered.
    pub async fn register(&self, entity: SensorEntity) -> Result<(), PromSensorError> {
        entity.validate()?;
        let mut entities = self.entities.write().await;
        if entities.contains_key(&entity.unique_id) {
            return Err(ValidationError::DuplicateUniqueId(entity.unique_id).into());
        }
        tracing::debug!(unique_id = %entity.unique_id, name = %entity.name, "sensor registered");
        entities.insert(entity.unique_id.clone(), entity);
        Ok(())
    }

    /// Store the latest state of a sensor.
    ///
    /// Returns the [`StateChange`] when the state differs from the stored
    /// one, `None` when it is the same.
    ///
    /// # Errors
    ///
    /// Returns [`PromSensorError::NotFound`] if `unique_id` is not registered.
    pub async fn record_state(
        &self,
        unique_id: &str,
        state: SensorState,
    ) -> Result<Option<StateChange>, PromSensorError> {
        let mut entities = self.entities.write().await;
        let entity = entities.get_mut(unique_id).ok_or_else(|| not_found(unique_id))?;
        let from = entity.state.clone();
        if !entity.update_state(state, now()) {
            return Ok(None);
        }
        Ok(Some(StateChange {
            unique_id: unique_id.to_string(),
            from,
            to: entity.state.clone(),
        }))
    }

    /// Look up a sensor snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PromSensorError::NotFound`] if `unique_id` is not registered.
    pub async fn get(&self, unique_id: &str) -> Result<SensorEntity, PromSensorError> {
        self.entities
            .read()
            .await
            .get(unique_id)
            .cloned()
            .ok_or_else(|| not_found(unique_id))
    }

    /// All registered sensors, ordered by `unique_id`.
    pub async fn list(&self) -> Vec<SensorEntity> {
        let mut all: Vec<SensorEntity> = self.entities.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.unique_id.cmp(&b.unique_id));
        all
    }

    /// Drop a sensor, returning its last snapshot.
    pub async fn remove(&self, unique_id: &str) -> Option<SensorEntity> {
        self.entities.write().await.remove(unique_id)
    }
}

fn not_found(unique_id: &str) -> PromSensorError {
    NotFoundError {
        entity: "Sensor",
        id: unique_id.to_string(),
    }
    .into()
}
