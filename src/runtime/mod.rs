//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for running a view-model against a live store:
//!
//! - **Store lifecycle management**: Spawning the state actor and shutting it down
//! - **Wiring**: Binding the form view-model to the store's handle
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`FormSystem`] - Owns the state actor task and the form view-model bound to it
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod form_system;
pub mod tracing;

pub use form_system::{FormSystem, DEFAULT_CHANGE_CAPACITY};
pub use self::tracing::setup_tracing;
