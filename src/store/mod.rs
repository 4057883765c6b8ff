//! In-process state store.
//!
//! A host implementation whose observable state lives in its own actor task. Writes from
//! a view-model are queued and applied later, so callers must not assume the store
//! reflects a `set` the instant it returns; reads through the same handle are ordered
//! after earlier writes.
//!
//! - [`StateActor`] - owns the state, applies merges, answers reads
//! - [`StateHandle`] - the [`StateHost`](crate::framework::StateHost) handed to view-models
//! - [`StateSnapshot`] / [`StateChange`] - what readers and subscribers observe

pub mod actor;
pub mod error;
pub mod handle;
pub mod message;

pub use actor::StateActor;
pub use error::StoreError;
pub use handle::StateHandle;
pub use message::StateRequest;

use crate::framework::{LiveData, LiveKey, LiveValue};
use std::any::Any;
use std::collections::HashMap;

/// Point-in-time copy of the store.
#[derive(Clone, Debug, Default)]
pub struct StateSnapshot {
    revision: u64,
    values: HashMap<LiveKey, LiveValue>,
}

impl StateSnapshot {
    pub(crate) fn new(revision: u64, values: HashMap<LiveKey, LiveValue>) -> Self {
        Self { revision, values }
    }

    /// Number of merges applied before the snapshot was taken.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get<T: Any + Send + Sync>(&self, live_data: &LiveData<T>) -> Option<&T> {
        self.values
            .get(&live_data.key())
            .and_then(|value| value.downcast_ref::<T>())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Broadcast after each applied merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateChange {
    pub revision: u64,
    pub keys: Vec<LiveKey>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{LiveDataSet, StateHost, StateUpdate, ViewModel};

    #[tokio::test]
    async fn test_store_applies_view_model_writes() {
        let count = LiveData::new(0u32);
        let name = LiveData::with_label(String::new(), "name");
        let (actor, handle) = StateActor::new(8);
        tokio::spawn(actor.run());

        let set = LiveDataSet::new().with("count", &count).with("name", &name);
        let mut view_model = ViewModel::new(handle.clone(), &set).unwrap();
        view_model.set(&count, 5).unwrap();

        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.revision(), 3);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get(&count), Some(&5));
        assert_eq!(snapshot.get(&name).map(String::as_str), Some(""));
    }

    #[tokio::test]
    async fn test_store_shares_the_written_value() {
        let rows = LiveData::new(Vec::<u8>::new());
        let (actor, handle) = StateActor::new(8);
        tokio::spawn(actor.run());

        let mut view_model = ViewModel::new(handle.clone(), &LiveDataSet::new()).unwrap();
        view_model.set(&rows, vec![1, 2, 3]).unwrap();

        let stored = handle.get(&rows).await.unwrap().unwrap();
        let local = view_model.get_shared(&rows).unwrap();
        assert!(std::sync::Arc::ptr_eq(&stored, &local));
    }

    #[tokio::test]
    async fn test_subscribers_see_each_merge() {
        let flag = LiveData::new(false);
        let (actor, handle) = StateActor::new(8);
        let mut changes = handle.subscribe();
        tokio::spawn(actor.run());

        handle
            .set_state(StateUpdate::single(flag.key(), LiveValue::new(true)))
            .unwrap();

        let change = changes.recv().await.unwrap();
        assert_eq!(
            change,
            StateChange {
                revision: 1,
                keys: vec![flag.key()],
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_key_reads_none() {
        let never = LiveData::new(1u8);
        let (actor, handle) = StateActor::new(1);
        tokio::spawn(actor.run());

        assert!(handle.get(&never).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_closed_store_rejects_writes() {
        let (actor, handle) = StateActor::new(1);
        drop(actor);

        let slot = LiveData::new(0u8);
        let result =
            handle.set_state(StateUpdate::single(slot.key(), slot.default_live_value()));

        assert!(matches!(result, Err(StoreError::ActorClosed)));
        assert!(handle.is_closed());
        assert!(matches!(handle.snapshot().await, Err(StoreError::ActorClosed)));
    }
}
