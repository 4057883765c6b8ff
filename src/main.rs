//! # Live State Demo
//!
//! Runs the form view-model against a live state store and prints what rendering code
//! would see.

use live_state::form_view_model::FORM;
use live_state::runtime::{setup_tracing, FormSystem};
use live_state::store::StoreError;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    setup_tracing();

    info!("Starting form demo");

    let mut system = FormSystem::new()?;
    let mut changes = system.state.subscribe();

    let span = tracing::info_span!("editing");
    async {
        system.form.increment()?;
        system.form.increment()?;

        if !system.form.submit()? {
            warn!(error = ?system.form.last_error(), "Submit rejected");
        }

        system.form.rename("Ada")?;
        system.form.submit()?;
        Ok::<(), StoreError>(())
    }
    .instrument(span)
    .await?;

    let snapshot = system.state.snapshot().await?;
    info!(
        revision = snapshot.revision(),
        count = ?snapshot.get(&FORM.count),
        name = ?snapshot.get(&FORM.name),
        submitted = ?snapshot.get(&FORM.submitted),
        "Store state"
    );

    let mut observed = 0usize;
    while changes.try_recv().is_ok() {
        observed += 1;
    }
    info!(observed, "Change notifications received");

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
