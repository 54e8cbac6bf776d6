//! Registry construction and lookup.
//!
//! This module provides a builder that consumes a discovery sequence once,
//! validating it into an immutable key→descriptor mapping. The mapping only
//! comes into existence after every candidate has passed validation, so no
//! reader can observe a partially populated registry.

use casemux_core::{BoxError, BuildError, Candidate, Case, CaseDescriptor, DiscoverySource};
use std::{collections::HashMap, sync::Arc};

/// An immutable, thread-safe key→descriptor mapping.
///
/// Built exactly once per build cycle by [`RegistryBuilder`]. Lookups are
/// pure reads, safe for unbounded concurrent callers once the registry is
/// published. No mutation is exposed post-build: a re-scan produces a new
/// `Registry` entirely, never an in-place update, so any caller holding a
/// reference to a prior registry keeps a consistent snapshot.
///
/// # Example
/// ```ignore
/// let registry = Registry::from_source(&source, "cases")?;
///
/// // Can be shared via Arc
/// let shared = Arc::new(registry);
/// ```
#[derive(Debug)]
pub struct Registry {
    entries: HashMap<Arc<str>, CaseDescriptor>,
}

impl Registry {
    /// Start building a registry by hand.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a registry from one discovery pass over `scope`.
    ///
    /// This is the one-shot entry point: discovery failure, duplicate keys,
    /// empty keys, and unconstructible candidates all abort the build with
    /// a [`BuildError`], publishing nothing.
    pub fn from_source(source: &dyn DiscoverySource, scope: &str) -> Result<Self, BuildError> {
        let candidates = source.discover(scope).map_err(|e| BuildError::Discovery {
            scope: scope.to_string(),
            source: e,
        })?;

        let mut builder = RegistryBuilder::new();
        builder.consume(candidates)?;
        Ok(builder.build())
    }

    /// Look up the descriptor registered under `key`.
    pub fn lookup(&self, key: &str) -> Option<&CaseDescriptor> {
        self.entries.get(key)
    }

    /// Check if a key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over the registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_ref())
    }

    /// The number of registered cases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for constructing a [`Registry`].
///
/// Each insertion is validated immediately: an empty key, a key already
/// present, or a factory that fails its probe construction rejects the
/// candidate and should abort the build (duplication is a configuration
/// defect to surface, not resolve). Because validation happens per insert,
/// [`build`](RegistryBuilder::build) itself cannot fail and the finished
/// registry is published atomically.
///
/// The builder does not depend on candidate order for anything other than
/// detecting duplicates; permutations of the same candidates build
/// identical registries.
pub struct RegistryBuilder {
    entries: HashMap<Arc<str>, CaseDescriptor>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Validate and accept a single candidate.
    pub fn insert(&mut self, candidate: Candidate) -> Result<(), BuildError> {
        if candidate.key.is_empty() {
            return Err(BuildError::EmptyKey);
        }
        if self.entries.contains_key(candidate.key.as_str()) {
            return Err(BuildError::DuplicateKey { key: candidate.key });
        }

        let key: Arc<str> = Arc::from(candidate.key.as_str());
        let descriptor = CaseDescriptor::from_parts(Arc::clone(&key), candidate.factory);

        // Probe construction: the factory must produce an instance now so
        // that a broken constructor surfaces at build time, not at first
        // dispatch. The instance is discarded.
        probe(&descriptor).map_err(|e| BuildError::NotConstructible {
            key: candidate.key,
            source: e,
        })?;

        self.entries.insert(key, descriptor);
        Ok(())
    }

    /// Register a case type constructible via `Default` (chaining version).
    pub fn register<C: Case + Default>(mut self, key: impl Into<String>) -> Result<Self, BuildError> {
        self.insert(Candidate::of::<C>(key))?;
        Ok(self)
    }

    /// Consume a discovery sequence to exhaustion, stopping at the first
    /// invalid candidate.
    pub fn consume(
        &mut self,
        candidates: impl IntoIterator<Item = Candidate>,
    ) -> Result<(), BuildError> {
        for candidate in candidates {
            self.insert(candidate)?;
        }
        Ok(())
    }

    /// Build the immutable [`Registry`].
    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
        }
    }

    /// The number of accepted candidates so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the builder has no accepted candidates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn probe(descriptor: &CaseDescriptor) -> Result<(), BoxError> {
    descriptor.construct().map(drop)
}
