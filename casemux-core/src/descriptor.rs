//! Validated per-key records stored inside a registry.

use crate::{
    case::{Case, DynCase},
    error::BoxError,
};
use std::{fmt, sync::Arc};

/// A shareable factory producing a fresh case instance per invocation.
///
/// Factories replace construct-by-name reflection: the constructor is
/// captured as a closure at registration time, so "name → behavior"
/// indirection survives without runtime type-name resolution. Construction
/// is fallible; a factory may refuse for instance-specific reasons even
/// after it succeeded during the build's probe.
pub type CaseFactory = Arc<dyn Fn() -> Result<Box<dyn DynCase>, BoxError> + Send + Sync>;

/// The validated `(key, factory)` record a registry stores per key.
///
/// Created once per discovered candidate during the build and immutable
/// afterwards. Cloning is cheap (the key and factory are shared).
#[derive(Clone)]
pub struct CaseDescriptor {
    key: Arc<str>,
    factory: CaseFactory,
}

impl CaseDescriptor {
    /// Create a descriptor from a key and a factory closure.
    pub fn new<F>(key: impl Into<Arc<str>>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn DynCase>, BoxError> + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            factory: Arc::new(factory),
        }
    }

    /// Create a descriptor for a case type constructible via `Default`.
    pub fn of<C: Case + Default>(key: impl Into<Arc<str>>) -> Self {
        Self::new(key, || Ok(Box::new(C::default()) as Box<dyn DynCase>))
    }

    /// Create a descriptor from a key and an already-shared factory.
    pub fn from_parts(key: impl Into<Arc<str>>, factory: CaseFactory) -> Self {
        Self {
            key: key.into(),
            factory,
        }
    }

    /// The registration key this descriptor answers to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Construct a fresh case instance.
    ///
    /// Called once per dispatch; the instance's lifetime is scoped to that
    /// single invocation unless the caller pools it externally.
    pub fn construct(&self) -> Result<Box<dyn DynCase>, BoxError> {
        (self.factory)()
    }

    /// The factory backing this descriptor.
    pub fn factory(&self) -> CaseFactory {
        Arc::clone(&self.factory)
    }
}

impl fmt::Debug for CaseDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseDescriptor")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::CaseDescriptor;
    use crate::{case::Case, error::BoxError};

    #[derive(Default)]
    struct Noop;

    impl Case for Noop {
        async fn execute(&self) -> Result<(), BoxError> {
            Ok(())
        }
    }

    #[test]
    fn test_default_based_descriptor_constructs() {
        let descriptor = CaseDescriptor::of::<Noop>("CASEA");
        assert_eq!(descriptor.key(), "CASEA");
        assert!(descriptor.construct().is_ok());
        // Each construction is a fresh instance; the descriptor stays usable.
        assert!(descriptor.construct().is_ok());
    }

    #[test]
    fn test_shared_factory_outlives_its_descriptor() {
        let descriptor = CaseDescriptor::of::<Noop>("CASEA");
        let factory = descriptor.factory();
        drop(descriptor);
        assert!(factory().is_ok());
    }

    #[test]
    fn test_construction_failure_reaches_the_caller() {
        let descriptor = CaseDescriptor::new("BROKEN", || Err("constructor refused".into()));
        let err = descriptor.construct().unwrap_err();
        assert_eq!(err.to_string(), "constructor refused");
    }
}
