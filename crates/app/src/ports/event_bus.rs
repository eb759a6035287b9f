//! Event bus port — publish/subscribe for sensor events.

use std::future::Future;

use promsensor_domain::error::PromSensorError;
use promsensor_domain::event::Event;

/// Publishes sensor events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), PromSensorError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), PromSensorError>> + Send {
        (**self).publish(event)
    }
}
