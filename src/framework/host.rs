//! # Host Capability
//!
//! The host is whatever owns the observable state a view-model mirrors into. The
//! framework needs exactly one thing from it: accept a partial key → value update.
//!
//! Hosts decide when an update becomes visible to their own observers. The view-model
//! only guarantees that the request was issued before `set` returns.

use crate::framework::live_data::{LiveData, LiveKey, LiveValue};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// A partial state update: the keys to overwrite and their new values.
#[derive(Clone, Debug, Default)]
pub struct StateUpdate {
    values: HashMap<LiveKey, LiveValue>,
}

impl StateUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// An update carrying a single slot.
    pub fn single(key: LiveKey, value: LiveValue) -> Self {
        let mut update = Self::new();
        update.insert(key, value);
        update
    }

    pub fn insert(&mut self, key: LiveKey, value: LiveValue) -> Option<LiveValue> {
        self.values.insert(key, value)
    }

    pub fn get(&self, key: LiveKey) -> Option<&LiveValue> {
        self.values.get(&key)
    }

    /// Typed read through a descriptor.
    pub fn get_as<T: Any + Send + Sync>(&self, live_data: &LiveData<T>) -> Option<&T> {
        self.get(live_data.key())
            .and_then(|value| value.downcast_ref::<T>())
    }

    pub fn contains(&self, key: LiveKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = LiveKey> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Shallow merge: every key in the update overwrites the target's entry.
    pub fn merge_into(self, target: &mut HashMap<LiveKey, LiveValue>) {
        target.extend(self.values);
    }
}

/// The capability a view-model requires from its host.
///
/// Errors raised while the host applies an update belong to the host. They are not
/// caught or wrapped; they come back out of whichever view-model call issued the update.
pub trait StateHost {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Merge `update` into the host's observable state.
    fn set_state(&self, update: StateUpdate) -> Result<(), Self::Error>;
}

impl<H: StateHost + ?Sized> StateHost for &H {
    type Error = H::Error;

    fn set_state(&self, update: StateUpdate) -> Result<(), Self::Error> {
        (**self).set_state(update)
    }
}

impl<H: StateHost + ?Sized> StateHost for Arc<H> {
    type Error = H::Error;

    fn set_state(&self, update: StateUpdate) -> Result<(), Self::Error> {
        (**self).set_state(update)
    }
}

impl<H: StateHost + ?Sized> StateHost for Box<H> {
    type Error = H::Error;

    fn set_state(&self, update: StateUpdate) -> Result<(), Self::Error> {
        (**self).set_state(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overwrites_only_listed_keys() {
        let count = LiveData::new(0u32);
        let name = LiveData::new(String::new());

        let mut state = HashMap::new();
        state.insert(count.key(), LiveValue::new(1u32));
        state.insert(name.key(), LiveValue::new(String::from("kept")));

        StateUpdate::single(count.key(), LiveValue::new(2u32)).merge_into(&mut state);

        assert_eq!(state.len(), 2);
        assert_eq!(state[&count.key()].downcast_ref::<u32>(), Some(&2));
        assert_eq!(
            state[&name.key()].downcast_ref::<String>().map(String::as_str),
            Some("kept")
        );
    }

    #[test]
    fn test_typed_read_through_descriptor() {
        let flag = LiveData::new(false);
        let update = StateUpdate::single(flag.key(), LiveValue::new(true));

        assert_eq!(update.get_as(&flag), Some(&true));
        assert!(update.contains(flag.key()));
        assert_eq!(update.keys().collect::<Vec<_>>(), vec![flag.key()]);
    }
}
