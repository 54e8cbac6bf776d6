//! End-to-end registration through `#[register_case]` and the link-time
//! collected source.

#![cfg(feature = "macros")]

use casemux::{CollectedSource, DispatchError, Registry, dispatch};

mod cases {
    use casemux::{BoxError, Case, register_case};
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub static ALPHA_RUNS: AtomicUsize = AtomicUsize::new(0);

    pub fn scope() -> &'static str {
        module_path!()
    }

    #[register_case("ALPHA")]
    #[derive(Default)]
    pub struct Alpha;

    impl Case for Alpha {
        async fn execute(&self) -> Result<(), BoxError> {
            ALPHA_RUNS.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[register_case("BETA")]
    #[derive(Default)]
    pub struct Beta;

    impl Case for Beta {
        async fn execute(&self) -> Result<(), BoxError> {
            Ok(())
        }
    }
}

mod other_cases {
    use casemux::{BoxError, Case, register_case};

    pub fn scope() -> &'static str {
        module_path!()
    }

    #[register_case("GAMMA")]
    #[derive(Default)]
    pub struct Gamma;

    impl Case for Gamma {
        async fn execute(&self) -> Result<(), BoxError> {
            Ok(())
        }
    }
}

#[tokio::test]
async fn tagged_cases_are_discovered_and_dispatchable() {
    let registry = Registry::from_source(&CollectedSource::new(), cases::scope()).unwrap();

    let mut keys: Vec<_> = registry.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, ["ALPHA", "BETA"]);

    let before = cases::ALPHA_RUNS.load(std::sync::atomic::Ordering::SeqCst);
    dispatch(&registry, "ALPHA").await.unwrap();
    assert_eq!(
        cases::ALPHA_RUNS.load(std::sync::atomic::Ordering::SeqCst),
        before + 1
    );
}

#[tokio::test]
async fn scope_filtering_keeps_modules_apart() {
    let registry = Registry::from_source(&CollectedSource::new(), other_cases::scope()).unwrap();

    assert_eq!(registry.keys().collect::<Vec<_>>(), ["GAMMA"]);

    let err = dispatch(&registry, "ALPHA").await.unwrap_err();
    assert!(matches!(err, DispatchError::UnknownKey { key } if key == "ALPHA"));
}

#[tokio::test]
async fn empty_scope_collects_every_submission() {
    let registry = Registry::from_source(&CollectedSource::new(), "").unwrap();

    let mut keys: Vec<_> = registry.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, ["ALPHA", "BETA", "GAMMA"]);
}
