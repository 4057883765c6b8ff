use live_state::framework::mock::{NoopHost, RecordingHost};
use live_state::framework::{LiveData, LiveDataSet, LiveEntry, ViewModel};
use std::collections::HashSet;

/// The basic mirroring scenario: two slots, one later write.
#[test]
fn test_counter_and_name_scenario() {
    let count = LiveData::new(0i32);
    let name = LiveData::with_label(String::new(), "nameLabel");
    let host = RecordingHost::new();

    let set = LiveDataSet::new().with("count", &count).with("name", &name);
    let mut view_model = ViewModel::new(host.clone(), &set).expect("init");

    assert_eq!(host.call_count(), 2);

    view_model.set(&count, 5).expect("set");

    let calls = host.calls();
    assert_eq!(calls.len(), 3);
    let last = calls.last().expect("last call");
    assert_eq!(last.len(), 1);
    assert_eq!(last.get_as(&count), Some(&5));
    assert_eq!(view_model.get(&count), Some(&5));
}

#[test]
fn test_init_sends_one_update_per_descriptor() {
    let a = LiveData::new(1u8);
    let b = LiveData::new("x");
    let host = RecordingHost::new();

    let set = LiveDataSet::new().with("a", &a).with("b", &b);
    ViewModel::new(host.clone(), &set).expect("init");

    let keys: HashSet<_> = host
        .calls()
        .iter()
        .flat_map(|update| update.keys().collect::<Vec<_>>())
        .collect();
    assert_eq!(keys, HashSet::from([a.key(), b.key()]));
}

#[test]
fn test_many_descriptors_never_collide() {
    let keys: HashSet<_> = (0..1_000)
        .map(|_| LiveData::with_label((), "same").key())
        .collect();
    assert_eq!(keys.len(), 1_000);
}

#[test]
fn test_descriptors_are_independent_across_view_models() {
    let shared_host = RecordingHost::new();
    let left = LiveData::with_label(0u32, "value");
    let right = LiveData::with_label(0u32, "value");

    let left_set = LiveDataSet::new().with("value", &left);
    let right_set = LiveDataSet::new().with("value", &right);
    let mut first = ViewModel::new(shared_host.clone(), &left_set).expect("init");
    let mut second = ViewModel::new(shared_host.clone(), &right_set).expect("init");

    first.set(&left, 1).expect("set");
    second.set(&right, 2).expect("set");

    assert_eq!(first.get(&left), Some(&1));
    assert_eq!(second.get(&right), Some(&2));
    assert!(first.get(&right).is_none());
    assert_eq!(shared_host.call_count(), 4);
}

#[test]
fn test_blank_entries_are_ignored() {
    let host = RecordingHost::new();
    let set: LiveDataSet = vec![
        ("empty", LiveEntry::default()),
        ("also_empty", LiveEntry::default()),
    ]
    .into_iter()
    .collect();

    let view_model = ViewModel::new(host.clone(), &set).expect("init");

    assert!(view_model.is_empty());
    host.verify_calls(0);
}

#[test]
fn test_noop_host_is_enough() {
    let flag = LiveData::new(false);
    let set = LiveDataSet::new().with("flag", &flag);
    let mut view_model = ViewModel::new(NoopHost, &set).expect("init");

    view_model.set(&flag, true).expect("set");
    assert_eq!(view_model.get(&flag), Some(&true));
}
