//! Explicit-list discovery source.

use casemux_core::{BoxError, Candidate, Case, DiscoverySource, DynCase};

/// A discovery source backed by an explicit registration list.
///
/// The list is bound to a single scope name; discovering any other scope
/// is an enumeration failure, which the registry builder surfaces as a
/// discovery error. This mirrors "scan this namespace" semantics for the
/// case where the namespace content is spelled out in wiring code.
///
/// # Example
/// ```ignore
/// let source = ListSource::new("cases")
///     .case::<CaseA>("CASEA")
///     .case::<CaseB>("CASEB");
///
/// let registry = Registry::from_source(&source, "cases")?;
/// ```
pub struct ListSource {
    scope: String,
    candidates: Vec<Candidate>,
}

impl ListSource {
    /// Create an empty source for the given scope.
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            candidates: Vec::new(),
        }
    }

    /// Add a pre-built candidate.
    pub fn with(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Add a case type constructible via `Default` under `key`.
    pub fn case<C: Case + Default>(self, key: impl Into<String>) -> Self {
        self.with(Candidate::of::<C>(key))
    }

    /// Add a case built by a factory closure under `key`.
    pub fn case_with<F>(self, key: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn DynCase>, BoxError> + Send + Sync + 'static,
    {
        self.with(Candidate::new(key, factory))
    }

    /// The scope this source enumerates.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The number of registrations in the list.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl DiscoverySource for ListSource {
    fn discover(&self, scope: &str) -> Result<Vec<Candidate>, BoxError> {
        if scope != self.scope {
            return Err(format!("unknown discovery scope: {scope}").into());
        }
        Ok(self.candidates.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::ListSource;
    use casemux_core::{BoxError, Case, DiscoverySource};

    #[derive(Default)]
    struct Noop;

    impl Case for Noop {
        async fn execute(&self) -> Result<(), BoxError> {
            Ok(())
        }
    }

    #[test]
    fn test_matching_scope() {
        let source = ListSource::new("cases").case::<Noop>("CASEA");
        let candidates = source.discover("cases").unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].key, "CASEA");
    }

    #[test]
    fn test_unknown_scope_is_an_error() {
        let source = ListSource::new("cases").case::<Noop>("CASEA");
        assert!(source.discover("elsewhere").is_err());
    }
}
