//! View-model framework.
//!
//! This module provides the building blocks for mirroring a view-model's state into a
//! host's observable state container.
//!
//! # Main Components
//!
//! - [`LiveData`] - Descriptor for one slot: unique key, default, debug label
//! - [`LiveDataSet`] - Caller-named descriptors a view-model is initialized from
//! - [`StateHost`] - The single capability required from a host
//! - [`ViewModel`] - Keeps local values and the host in sync
//!
//! # Testing
//!
//! See [`mock`] module for hosts that record or ignore updates.

pub mod host;
pub mod live_data;
pub mod mock;
pub mod view_model;

pub use host::{StateHost, StateUpdate};
pub use live_data::{LiveData, LiveDataSet, LiveEntry, LiveKey, LiveValue};
pub use view_model::ViewModel;
