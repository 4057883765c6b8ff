//! # State Actor
//!
//! The `StateActor` owns an observable state container and applies merge requests in
//! its own Tokio task. It is the "server" half of the store; [`StateHandle`] is the
//! host a view-model writes to.
//!
//! Merges are queued on an unbounded channel, so issuing one never blocks or awaits.
//! They are applied in the order they were sent, and a read sent after a merge through
//! the same handle observes it.

use crate::framework::{LiveKey, LiveValue};
use crate::store::handle::StateHandle;
use crate::store::message::StateRequest;
use crate::store::{StateChange, StateSnapshot};
use std::collections::HashMap;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, trace};

/// Owns the observable state and processes requests sequentially.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StateActor::new()` to get the `actor` and a `handle`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Bind**: Give a clone of the handle to a view-model as its host.
///
/// ```
/// use live_state::framework::{LiveData, LiveDataSet, ViewModel};
/// use live_state::store::StateActor;
///
/// #[tokio::main]
/// async fn main() {
///     let count = LiveData::new(0u32);
///     let (actor, handle) = StateActor::new(16);
///     tokio::spawn(actor.run());
///
///     let set = LiveDataSet::new().with("count", &count);
///     let mut view_model = ViewModel::new(handle.clone(), &set).unwrap();
///     view_model.set(&count, 3).unwrap();
///
///     let stored = handle.get(&count).await.unwrap();
///     assert_eq!(stored.as_deref(), Some(&3));
/// }
/// ```
pub struct StateActor {
    receiver: mpsc::UnboundedReceiver<StateRequest>,
    state: HashMap<LiveKey, LiveValue>,
    changes: broadcast::Sender<StateChange>,
    revision: u64,
}

impl StateActor {
    /// `change_capacity` bounds how many change notifications a slow subscriber may lag.
    pub fn new(change_capacity: usize) -> (Self, StateHandle) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (changes, _) = broadcast::channel(change_capacity.max(1));
        let actor = Self {
            receiver,
            state: HashMap::new(),
            changes: changes.clone(),
            revision: 0,
        };
        (actor, StateHandle::new(sender, changes))
    }

    /// Processes requests until every handle has been dropped.
    pub async fn run(mut self) {
        info!("State actor started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                StateRequest::Merge { update } => {
                    let keys: Vec<LiveKey> = update.keys().collect();
                    update.merge_into(&mut self.state);
                    self.revision += 1;
                    debug!(
                        revision = self.revision,
                        keys = keys.len(),
                        size = self.state.len(),
                        "Merged"
                    );

                    // No subscribers is fine.
                    let _ = self.changes.send(StateChange {
                        revision: self.revision,
                        keys,
                    });
                }
                StateRequest::Get { key, respond_to } => {
                    let value = self.state.get(&key).cloned();
                    trace!(%key, found = value.is_some(), "Get");
                    let _ = respond_to.send(value);
                }
                StateRequest::Snapshot { respond_to } => {
                    trace!(revision = self.revision, "Snapshot");
                    let _ = respond_to.send(StateSnapshot::new(self.revision, self.state.clone()));
                }
            }
        }

        info!(revision = self.revision, size = self.state.len(), "Shutdown");
    }
}
