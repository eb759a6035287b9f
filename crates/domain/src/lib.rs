//! # promsensor-domain
//!
//! Pure domain model for promsensor.
//!
//! ## Responsibilities
//! - Foundational types: identifiers, error conventions, timestamps, scan interval
//! - Define **sensor entities** (identity, presentation metadata, current state)
//! - Define the **unknown sentinel** and the host's device/state classes
//! - Define **events** (registration and state-change records)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod entity;
pub mod event;
