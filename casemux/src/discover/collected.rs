//! Link-time collected discovery via `inventory`.

use casemux_core::{BoxError, Candidate, DiscoverySource, DynCase};

/// A case registration submitted to the link-time collection.
///
/// Usually emitted by the `#[register_case]` attribute, which fills in the
/// submitting module's path as the scope and a `Default`-based factory.
/// Hand-written submissions are equally valid:
///
/// ```rust,ignore
/// casemux::inventory::submit! {
///     casemux::CaseSubmission {
///         key: "CASEA",
///         module: module_path!(),
///         factory: || Ok(Box::new(CaseA::default()) as Box<dyn casemux::DynCase>),
///     }
/// }
/// ```
pub struct CaseSubmission {
    /// The registration key. Must be non-empty; the registry builder
    /// rejects empty keys at build time.
    pub key: &'static str,
    /// The module path of the submitting code, used for scope filtering.
    pub module: &'static str,
    /// Constructor for the submitted case type.
    pub factory: fn() -> Result<Box<dyn DynCase>, BoxError>,
}

inventory::collect!(CaseSubmission);

/// A discovery source over all [`CaseSubmission`]s linked into the binary.
///
/// `discover(scope)` yields the submissions whose module path equals the
/// scope or sits beneath it (`scope::...`); the empty scope yields every
/// submission. Iteration order of the collection is link-dependent and
/// deliberately meaningless: the registry builder never relies on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollectedSource;

impl CollectedSource {
    /// Create a collected source.
    pub fn new() -> Self {
        Self
    }
}

fn in_scope(module: &str, scope: &str) -> bool {
    scope.is_empty()
        || module == scope
        || (module.starts_with(scope) && module[scope.len()..].starts_with("::"))
}

impl DiscoverySource for CollectedSource {
    fn discover(&self, scope: &str) -> Result<Vec<Candidate>, BoxError> {
        Ok(inventory::iter::<CaseSubmission>
            .into_iter()
            .filter(|submission| in_scope(submission.module, scope))
            .map(|submission| {
                let factory = submission.factory;
                Candidate::new(submission.key, move || factory())
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::in_scope;

    #[test]
    fn test_scope_matching() {
        assert!(in_scope("app::cases", "app::cases"));
        assert!(in_scope("app::cases::extra", "app::cases"));
        assert!(in_scope("app::cases", ""));
        assert!(!in_scope("app::cases_extra", "app::cases"));
        assert!(!in_scope("app", "app::cases"));
    }
}
