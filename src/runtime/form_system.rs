use crate::form_view_model::FormViewModel;
use crate::store::{StateActor, StateHandle, StoreError};
use tracing::{error, info};

/// Default number of change notifications a subscriber may fall behind.
pub const DEFAULT_CHANGE_CAPACITY: usize = 64;

/// Runs a [`FormViewModel`] against a live [`StateActor`].
///
/// `FormSystem` is responsible for:
/// - **Lifecycle Management**: Spawning the state actor and stopping it
/// - **Wiring**: Handing the view-model a clone of the store's handle as its host
///
/// Must be created inside a Tokio runtime.
///
/// # Example
///
/// ```ignore
/// let mut system = FormSystem::new()?;
/// system.form.increment()?;
///
/// let count = system.state.get(&FORM.count).await?;
/// system.shutdown().await?;
/// ```
pub struct FormSystem {
    /// The view-model; its host is a clone of `state`.
    pub form: FormViewModel<StateHandle>,

    /// Read side of the store, for rendering code and tests.
    pub state: StateHandle,

    handle: tokio::task::JoinHandle<()>,
}

impl FormSystem {
    pub fn new() -> Result<Self, StoreError> {
        Self::with_change_capacity(DEFAULT_CHANGE_CAPACITY)
    }

    pub fn with_change_capacity(change_capacity: usize) -> Result<Self, StoreError> {
        let (actor, state) = StateActor::new(change_capacity);
        let handle = tokio::spawn(actor.run());
        let form = FormViewModel::new(state.clone())?;

        info!("Form system started");
        Ok(Self {
            form,
            state,
            handle,
        })
    }

    /// Drops every handle, then waits for the state actor to drain and exit.
    ///
    /// Merges already queued are applied before the actor stops.
    pub async fn shutdown(self) -> Result<(), StoreError> {
        info!("Shutting down form system...");

        drop(self.form);
        drop(self.state);

        if let Err(e) = self.handle.await {
            error!(error = %e, "State actor task failed");
            return Err(StoreError::TaskFailed(e));
        }

        info!("Form system shutdown complete.");
        Ok(())
    }
}
