//! # promsensord — Prometheus sensor daemon
//!
//! Composition root that wires the Prometheus platform into the host runtime.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Set up the Prometheus platform and register its sensors
//! - Start one poller per sensor and log state changes
//! - Unload the platform on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use promsensor_adapter_prometheus::PrometheusPlatform;
use promsensor_app::event_bus::InProcessEventBus;
use promsensor_app::services::host;
use promsensor_app::services::registry::SensorRegistry;
use promsensor_domain::event::{Event, EventType};
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;
    init_tracing(&config.logging.filter);

    if config.prometheus.sensors.is_empty() {
        tracing::warn!("no Prometheus sensors configured");
    }

    // Host runtime
    let event_bus = InProcessEventBus::new(256);
    let event_log = tokio::spawn(log_events(event_bus.subscribe()));
    let registry = SensorRegistry::new();

    // Platform
    let mut platform = PrometheusPlatform::new(config.prometheus);
    let loaded = host::load_platform(&mut platform, &registry, &event_bus).await?;

    tracing::info!(sensors = loaded.unique_ids().len(), "promsensord running");
    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");

    loaded.unload(&registry).await;
    event_log.abort();
    Ok(())
}

fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn log_events(mut rx: broadcast::Receiver<Event>) {
    loop {
        match rx.recv().await {
            Ok(event) => match event.event_type {
                EventType::EntityRegistered => {
                    tracing::info!(
                        unique_id = %event.unique_id,
                        data = %event.data,
                        "sensor registered"
                    );
                }
                EventType::StateChanged => {
                    tracing::debug!(
                        unique_id = %event.unique_id,
                        from = %event.data["from"],
                        to = %event.data["to"],
                        "state changed"
                    );
                }
            },
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event log lagging behind");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
