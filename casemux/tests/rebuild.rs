//! Re-scan behavior: atomic swap, snapshot isolation, failed rebuilds.

use casemux::testing::CaseLog;
use casemux::{BuildError, DispatchError, Dispatcher, ListSource, Registry, dispatch};

mod common;
use common::{CaseA, CaseB, plain_source};

#[tokio::test]
async fn rescan_swaps_in_the_new_case_set() {
    let dispatcher = Dispatcher::new(Registry::from_source(&plain_source(), "cases").unwrap());
    dispatcher.dispatch("CASEA").await.unwrap();

    let next = ListSource::new("cases").case::<CaseB>("CASED");
    dispatcher.rescan(&next, "cases").unwrap();

    let err = dispatcher.dispatch("CASEA").await.unwrap_err();
    assert!(matches!(err, DispatchError::UnknownKey { key } if key == "CASEA"));
    dispatcher.dispatch("CASED").await.unwrap();

    let mut keys = dispatcher.keys();
    keys.sort_unstable();
    assert_eq!(keys, ["CASED"]);
}

#[tokio::test]
async fn held_snapshot_survives_the_swap() {
    let log = CaseLog::new();
    let source = ListSource::new("cases").with(log.candidate("CASEA"));
    let dispatcher = Dispatcher::new(Registry::from_source(&source, "cases").unwrap());

    // A caller mid-flight holds this snapshot while the swap happens.
    let snapshot = dispatcher.snapshot();

    let next = ListSource::new("cases").case::<CaseB>("CASED");
    dispatcher.rescan(&next, "cases").unwrap();

    // The old registry is still fully usable through the held reference.
    dispatch(&snapshot, "CASEA").await.unwrap();
    assert_eq!(log.entries(), ["CASEA"]);
    assert!(snapshot.contains("CASEA"));
    assert!(!snapshot.contains("CASED"));
}

#[tokio::test]
async fn failed_rescan_leaves_the_current_registry_untouched() {
    let dispatcher = Dispatcher::new(Registry::from_source(&plain_source(), "cases").unwrap());

    // Duplicate keys in the new discovery pass abort the rebuild.
    let broken = ListSource::new("cases")
        .case::<CaseA>("CASED")
        .case::<CaseB>("CASED");
    let err = dispatcher.rescan(&broken, "cases").unwrap_err();
    assert!(matches!(err, BuildError::DuplicateKey { key } if key == "CASED"));

    // The previous registry is still in service.
    dispatcher.dispatch("CASEA").await.unwrap();
    dispatcher.dispatch("CASEB").await.unwrap();
}

#[tokio::test]
async fn rescan_to_empty_scope_unregisters_everything() {
    let dispatcher = Dispatcher::new(Registry::from_source(&plain_source(), "cases").unwrap());

    dispatcher.rescan(&ListSource::new("cases"), "cases").unwrap();

    assert!(dispatcher.keys().is_empty());
    let err = dispatcher.dispatch("CASEA").await.unwrap_err();
    assert!(matches!(err, DispatchError::UnknownKey { .. }));
}
