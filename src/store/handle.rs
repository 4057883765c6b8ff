//! # State Handle
//!
//! The client side of the store. A `StateHandle` is a [`StateHost`]: view-models push
//! merges into it synchronously, while readers use its async API.

use crate::framework::{LiveData, StateHost, StateUpdate};
use crate::store::message::StateRequest;
use crate::store::{StateChange, StateSnapshot, StoreError};
use std::any::Any;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot};

/// A cheap, cloneable handle to a running [`StateActor`](crate::store::StateActor).
#[derive(Clone)]
pub struct StateHandle {
    sender: mpsc::UnboundedSender<StateRequest>,
    changes: broadcast::Sender<StateChange>,
}

impl StateHandle {
    pub(crate) fn new(
        sender: mpsc::UnboundedSender<StateRequest>,
        changes: broadcast::Sender<StateChange>,
    ) -> Self {
        Self { sender, changes }
    }

    /// The value the store currently holds for `live_data`.
    pub async fn get<T: Any + Send + Sync>(
        &self,
        live_data: &LiveData<T>,
    ) -> Result<Option<Arc<T>>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Get {
                key: live_data.key(),
                respond_to,
            })
            .map_err(|_| StoreError::ActorClosed)?;
        let value = response.await.map_err(|_| StoreError::ActorDropped)?;
        Ok(value.and_then(|value| value.downcast_arc::<T>()))
    }

    pub async fn snapshot(&self) -> Result<StateSnapshot, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)
    }

    /// Receives a [`StateChange`] for every merge applied after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.changes.subscribe()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl StateHost for StateHandle {
    type Error = StoreError;

    fn set_state(&self, update: StateUpdate) -> Result<(), Self::Error> {
        self.sender
            .send(StateRequest::Merge { update })
            .map_err(|_| StoreError::ActorClosed)
    }
}

impl std::fmt::Debug for StateHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateHandle")
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}
