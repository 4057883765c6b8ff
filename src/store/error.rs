//! # Store Errors
//!
//! Errors raised while talking to a [`StateActor`](crate::store::StateActor).

/// Errors that can occur within the state store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("State actor closed")]
    ActorClosed,
    #[error("State actor dropped response channel")]
    ActorDropped,
    #[error("State actor task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
