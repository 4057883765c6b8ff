use live_state::form_view_model::{FormViewModel, FORM, NAME_REQUIRED};
use live_state::framework::mock::RecordingHost;
use live_state::runtime::FormSystem;

/// Full run against a live store.
#[tokio::test]
async fn test_form_system_round_trip() {
    let mut system = FormSystem::new().expect("start");

    system.form.increment().expect("increment");
    system.form.rename("Ada").expect("rename");
    assert!(system.form.submit().expect("submit"));

    let snapshot = system.state.snapshot().await.expect("snapshot");
    assert_eq!(snapshot.get(&FORM.count), Some(&1));
    assert_eq!(snapshot.get(&FORM.name).map(String::as_str), Some("Ada"));
    assert_eq!(snapshot.get(&FORM.submitted), Some(&true));
    assert_eq!(snapshot.len(), 3);

    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn test_store_matches_view_model_after_every_write() {
    let mut system = FormSystem::new().expect("start");

    for expected in 1..=5u32 {
        system.form.increment().expect("increment");
        let stored = system.state.get(&FORM.count).await.expect("get");
        assert_eq!(stored.as_deref(), Some(&expected));
        assert_eq!(system.form.count(), expected);
    }

    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn test_rejected_submit_registers_error_slot() {
    let mut system = FormSystem::new().expect("start");

    assert!(!system.form.submit().expect("submit"));

    let error = system.state.get(&FORM.last_error).await.expect("get");
    assert_eq!(
        error.as_deref().and_then(|error| error.as_deref()),
        Some(NAME_REQUIRED)
    );
    assert_eq!(system.state.snapshot().await.expect("snapshot").len(), 4);

    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn test_subscribers_observe_form_writes() {
    let mut system = FormSystem::new().expect("start");
    let mut changes = system.state.subscribe();

    system.form.rename("Grace").expect("rename");

    // Init merges may land before or after the subscription.
    loop {
        let change = changes.recv().await.expect("change");
        if change.keys == vec![FORM.name.key()] {
            break;
        }
    }

    system.shutdown().await.expect("shutdown");
}

#[test]
fn test_form_against_recording_host() {
    let host = RecordingHost::new();
    let mut form = FormViewModel::new(host.clone()).expect("init");

    form.rename("Linus").expect("rename");
    form.submit().expect("submit");

    let calls = host.calls();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[3].get_as(&FORM.name).map(String::as_str), Some("Linus"));
    assert_eq!(calls[4].get_as(&FORM.submitted), Some(&true));
}
