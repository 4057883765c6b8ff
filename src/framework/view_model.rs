//! # View-Model Base
//!
//! [`ViewModel`] keeps a local copy of every slot it manages and mirrors each write into
//! its host. Concrete view-models wrap it and expose business methods that end in
//! [`ViewModel::set`].
//!
//! ## Contract
//!
//! - After [`ViewModel::new`] returns, every bound entry of the descriptor set holds its
//!   default locally and the host has been sent one update per entry.
//! - After [`ViewModel::set`] returns, [`ViewModel::get`] reflects the new value and the
//!   host has been sent a single-slot update. The host may apply it later.
//! - Writes are never de-duplicated: setting the same value twice notifies twice.
//!
//! Mutation takes `&mut self`. One view-model is driven by one caller at a time.

use crate::framework::host::{StateHost, StateUpdate};
use crate::framework::live_data::{LiveData, LiveDataSet, LiveKey, LiveValue};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Mirrors a set of live data slots into a host.
///
/// # Example
/// ```
/// use live_state::framework::{LiveData, LiveDataSet, ViewModel};
/// use live_state::framework::mock::RecordingHost;
///
/// let count = LiveData::with_label(0u32, "count");
/// let host = RecordingHost::new();
///
/// let mut view_model = ViewModel::new(host.clone(), &LiveDataSet::new().with("count", &count))?;
/// assert_eq!(view_model.get(&count), Some(&0));
///
/// view_model.set(&count, 5)?;
/// assert_eq!(view_model.get(&count), Some(&5));
/// assert_eq!(host.call_count(), 2);
/// # Ok::<(), live_state::framework::mock::MockHostError>(())
/// ```
pub struct ViewModel<H: StateHost> {
    host: H,
    values: HashMap<LiveKey, LiveValue>,
}

impl<H: StateHost> ViewModel<H> {
    /// Binds to `host` and writes every bound entry's default into both sides.
    ///
    /// Entries without a key are skipped. A host error aborts construction and is
    /// returned as-is.
    pub fn new(host: H, live_data: &LiveDataSet) -> Result<Self, H::Error> {
        let mut view_model = Self {
            host,
            values: HashMap::with_capacity(live_data.len()),
        };

        let mut skipped = 0usize;
        for (name, entry) in live_data.iter() {
            match entry.slot() {
                Some((key, default)) => {
                    view_model.store(key, entry.label(), default.clone())?;
                }
                None => {
                    trace!(name, "Skipping entry without a live key");
                    skipped += 1;
                }
            }
        }

        info!(slots = view_model.values.len(), skipped, "View-model initialized");
        Ok(view_model)
    }

    /// Current local value of a slot, or `None` if it was never set.
    ///
    /// The host is not consulted.
    pub fn get<T: Any + Send + Sync>(&self, live_data: &LiveData<T>) -> Option<&T> {
        self.values
            .get(&live_data.key())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Shared handle to the stored value; reference-equal to what the host was sent.
    pub fn get_value<T>(&self, live_data: &LiveData<T>) -> Option<&LiveValue> {
        self.values.get(&live_data.key())
    }

    pub fn get_shared<T: Any + Send + Sync>(&self, live_data: &LiveData<T>) -> Option<Arc<T>> {
        self.values
            .get(&live_data.key())
            .and_then(|value| value.downcast_arc::<T>())
    }

    /// Stores `value` locally, then sends `{ key: value }` to the host.
    ///
    /// `live_data` does not have to be part of the set the view-model was built from.
    pub fn set<T: Any + Send + Sync>(
        &mut self,
        live_data: &LiveData<T>,
        value: T,
    ) -> Result<(), H::Error> {
        self.store(live_data.key(), live_data.label(), LiveValue::new(value))
    }

    /// Like [`ViewModel::set`] for a value the caller already shares.
    pub fn set_shared<T: Any + Send + Sync>(
        &mut self,
        live_data: &LiveData<T>,
        value: Arc<T>,
    ) -> Result<(), H::Error> {
        self.store(live_data.key(), live_data.label(), LiveValue::from_arc(value))
    }

    /// Writes the descriptor's default again.
    pub fn reset<T: Any + Send + Sync>(&mut self, live_data: &LiveData<T>) -> Result<(), H::Error> {
        self.store(
            live_data.key(),
            live_data.label(),
            live_data.default_live_value(),
        )
    }

    pub fn contains<T>(&self, live_data: &LiveData<T>) -> bool {
        self.values.contains_key(&live_data.key())
    }

    /// Number of slots holding a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn store(&mut self, key: LiveKey, label: &str, value: LiveValue) -> Result<(), H::Error> {
        debug!(%key, label, value_type = value.type_name(), "Set live data");
        self.values.insert(key, value.clone());
        self.host
            .set_state(StateUpdate::single(key, value))
            .inspect_err(|e| warn!(%key, label, error = %e, "Host rejected state update"))
    }
}

impl<H: StateHost> std::fmt::Debug for ViewModel<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewModel")
            .field("slots", &self.values.len())
            .finish_non_exhaustive()
    }
}
