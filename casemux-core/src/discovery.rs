//! Discovery contract consumed by the registry builder.

use crate::{
    case::{Case, DynCase},
    descriptor::CaseFactory,
    error::BoxError,
};
use std::sync::Arc;

/// A raw `(key, factory)` pair produced by discovery, prior to validation.
///
/// Candidates carry no uniqueness or non-emptiness guarantee; the registry
/// builder enforces both globally while consuming the sequence.
#[derive(Clone)]
pub struct Candidate {
    /// The registration key offered by this candidate.
    pub key: String,
    /// The constructor for the candidate's case type.
    pub factory: CaseFactory,
}

impl Candidate {
    /// Create a candidate from a key and a factory closure.
    pub fn new<F>(key: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn DynCase>, BoxError> + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            factory: Arc::new(factory),
        }
    }

    /// Create a candidate for a case type constructible via `Default`.
    pub fn of<C: Case + Default>(key: impl Into<String>) -> Self {
        Self::new(key, || Ok(Box::new(C::default()) as Box<dyn DynCase>))
    }
}

impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// A producer of registration candidates within a named scope.
///
/// The registry builder consumes one discovery pass per build. How the
/// sequence is produced — an explicit list, link-time collection, a config
/// file — is the source's business; only its shape matters here.
///
/// Candidate order is unspecified. Builders must not derive meaning from
/// it beyond duplicate detection: the registry built from any permutation
/// of the same candidates is identical.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot produce registration candidates",
    label = "missing `DiscoverySource` implementation",
    note = "Implement `discover` to enumerate `(key, factory)` candidates for a scope."
)]
pub trait DiscoverySource: Send + Sync {
    /// Enumerate the candidates within `scope`.
    ///
    /// An unknown scope or a failing enumeration is an error; the build
    /// consuming this source aborts without publishing a registry.
    fn discover(&self, scope: &str) -> Result<Vec<Candidate>, BoxError>;
}
