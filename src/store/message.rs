//! # Store Messages
//!
//! Requests sent from a [`StateHandle`](crate::store::StateHandle) to the
//! [`StateActor`](crate::store::StateActor).

use crate::framework::{LiveKey, LiveValue, StateUpdate};
use crate::store::StateSnapshot;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum StateRequest {
    /// Fire-and-forget; no response is sent.
    Merge { update: StateUpdate },
    Get {
        key: LiveKey,
        respond_to: Response<Option<LiveValue>>,
    },
    Snapshot { respond_to: Response<StateSnapshot> },
}
