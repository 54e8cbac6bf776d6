//! Dispatch: resolve a key, construct a case, invoke it.
//!
//! Dispatch calls are independent and may run concurrently; each call
//! constructs its own case instance, so there is no shared mutable state
//! between concurrent dispatches unless a case implementation introduces
//! one itself. A failed dispatch is reported once; retry policy, if any,
//! belongs to the caller.

use crate::registry::Registry;
use arc_swap::ArcSwap;
use casemux_core::{BuildError, Case, DiscoverySource, DispatchError};
use std::sync::Arc;

/// Dispatch `key` against a registry.
///
/// Resolution happens before any instantiation: an unknown key returns
/// [`DispatchError::UnknownKey`] without touching the factory. For a known
/// key, exactly one instance is constructed and its capability operation
/// invoked exactly once. Construction is re-validated here even though the
/// build probed it; a factory can still fail for instance-specific reasons.
pub async fn dispatch(registry: &Registry, key: &str) -> Result<(), DispatchError> {
    let Some(descriptor) = registry.lookup(key) else {
        return Err(DispatchError::UnknownKey {
            key: key.to_string(),
        });
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(key, "dispatching case");

    let case = descriptor
        .construct()
        .map_err(|e| DispatchError::Instantiation {
            key: key.to_string(),
            source: e,
        })?;

    case.execute().await.map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::warn!(key, error = %e, "case execution failed");
        DispatchError::Execution {
            key: key.to_string(),
            source: e,
        }
    })
}

/// A dispatcher holding the current registry behind an atomic swap.
///
/// Post-build the registry is immutable; what can change over a process
/// lifetime is *which* registry is current. `Dispatcher` owns that swap:
/// a re-scan builds a complete new registry and publishes it atomically,
/// while in-flight dispatches finish against the snapshot they loaded.
///
/// # Example
/// ```ignore
/// let dispatcher = Dispatcher::new(Registry::from_source(&source, "cases")?);
/// dispatcher.dispatch("CASEA").await?;
///
/// // Later: pick up newly configured cases without disturbing callers.
/// dispatcher.rescan(&source, "cases")?;
/// ```
pub struct Dispatcher {
    registry: ArcSwap<Registry>,
}

impl Dispatcher {
    /// Create a dispatcher over a built registry.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: ArcSwap::from_pointee(registry),
        }
    }

    /// The current registry snapshot.
    ///
    /// The returned `Arc` stays valid and consistent even if the dispatcher
    /// swaps in a new registry afterwards.
    pub fn snapshot(&self) -> Arc<Registry> {
        self.registry.load_full()
    }

    /// Atomically replace the current registry, returning the previous one.
    pub fn replace(&self, registry: Registry) -> Arc<Registry> {
        self.registry.swap(Arc::new(registry))
    }

    /// Re-run discovery and swap in the freshly built registry.
    ///
    /// If the build fails, the current registry is left untouched.
    pub fn rescan(&self, source: &dyn DiscoverySource, scope: &str) -> Result<(), BuildError> {
        let rebuilt = Registry::from_source(source, scope)?;
        self.registry.store(Arc::new(rebuilt));
        Ok(())
    }

    /// Dispatch `key` against the current registry snapshot.
    pub async fn dispatch(&self, key: &str) -> Result<(), DispatchError> {
        // Hold one snapshot across resolve + construct + invoke so a
        // concurrent rescan cannot split the call between two registries.
        let snapshot = self.registry.load_full();
        dispatch(&snapshot, key).await
    }

    /// The keys of the current registry snapshot.
    pub fn keys(&self) -> Vec<String> {
        self.registry
            .load()
            .keys()
            .map(|k| k.to_string())
            .collect()
    }
}
