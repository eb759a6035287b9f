//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PromSensorError`] via `#[from]` or an explicit `into_domain()`.

/// Top-level error shared by every crate in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum PromSensorError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup did not match anything.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// An integration adapter failed (HTTP, decoding, …).
    #[error("integration error")]
    Integration(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a value can fail domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("unique id must not be empty")]
    EmptyUniqueId,

    #[error("endpoint url must not be empty")]
    EmptyUrl,

    #[error("query must not be empty")]
    EmptyQuery,

    #[error("scan interval must be non-zero")]
    ZeroScanInterval,

    #[error("request timeout must be non-zero")]
    ZeroTimeout,

    #[error("unique id {0:?} is already registered")]
    DuplicateUniqueId(String),

    #[error("unknown device class {0:?}")]
    UnknownDeviceClass(String),

    #[error("unknown state class {0:?}")]
    UnknownStateClass(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of thing that was looked up (e.g. `"Sensor"`).
    pub entity: &'static str,
    /// The identifier that did not match.
    pub id: String,
}
