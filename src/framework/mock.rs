//! # Mock Hosts
//!
//! Test doubles for the [`StateHost`] seam, so view-models can be tested without a real
//! state container.
//!
//! | Host | Records calls | Error injection | Use case |
//! |------|---------------|-----------------|----------|
//! | [`NoopHost`] | No | No | The view-model only needs *a* host |
//! | [`RecordingHost`] | Yes | Yes (`fail_next`) | Asserting what the host was sent |
//!
//! `RecordingHost` is cheap to clone and every clone shares one call log. Hand one clone
//! to the view-model and keep another for assertions.
//!
//! ```
//! use live_state::framework::{LiveData, LiveDataSet, ViewModel};
//! use live_state::framework::mock::RecordingHost;
//!
//! let count = LiveData::new(0u32);
//! let host = RecordingHost::new();
//! let set = LiveDataSet::new().with("count", &count);
//! let mut view_model = ViewModel::new(host.clone(), &set).unwrap();
//!
//! view_model.set(&count, 5).unwrap();
//!
//! assert_eq!(host.call_count(), 2);
//! assert_eq!(host.last().unwrap().get_as(&count), Some(&5));
//! ```

use crate::framework::host::{StateHost, StateUpdate};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// A host that accepts every update and does nothing with it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl StateHost for NoopHost {
    type Error = Infallible;

    fn set_state(&self, _update: StateUpdate) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Errors a [`RecordingHost`] can be told to return.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MockHostError {
    /// The host refused the update.
    #[error("State update rejected: {0}")]
    Rejected(String),
}

#[derive(Default)]
struct Recorded {
    calls: Vec<StateUpdate>,
    failures: VecDeque<MockHostError>,
}

/// A host that records every update it accepts.
#[derive(Clone, Default)]
pub struct RecordingHost {
    recorded: Arc<Mutex<Recorded>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `set_state` call fail with `error` instead of recording.
    ///
    /// Queued failures are consumed in order.
    pub fn fail_next(&self, error: MockHostError) {
        self.lock().failures.push_back(error);
    }

    /// A copy of every accepted update, oldest first.
    pub fn calls(&self) -> Vec<StateUpdate> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn last(&self) -> Option<StateUpdate> {
        self.lock().calls.last().cloned()
    }

    pub fn clear(&self) {
        self.lock().calls.clear();
    }

    /// Panics unless exactly `expected` updates were accepted.
    pub fn verify_calls(&self, expected: usize) {
        let actual = self.call_count();
        if actual != expected {
            panic!("Expected {expected} state updates, host received {actual}");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StateHost for RecordingHost {
    type Error = MockHostError;

    fn set_state(&self, update: StateUpdate) -> Result<(), Self::Error> {
        let mut recorded = self.lock();
        if let Some(error) = recorded.failures.pop_front() {
            return Err(error);
        }
        recorded.calls.push(update);
        Ok(())
    }
}
