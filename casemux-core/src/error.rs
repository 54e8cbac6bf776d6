//! Error types for casemux.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CasemuxError`] - Top-level error type for all casemux operations
//! - [`BuildError`] - Errors while building a registry (fatal to the build
//!   attempt: no registry is published)
//! - [`DispatchError`] - Errors for a single dispatch call (recoverable by
//!   the caller; other in-flight dispatches are unaffected)

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all casemux operations.
#[derive(Error, Debug)]
pub enum CasemuxError {
    /// A registry build was aborted.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// A dispatch call failed.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that abort a registry build.
///
/// A build either consumes its discovery sequence to exhaustion without
/// error and publishes a registry, or fails with one of these and
/// publishes nothing. Duplicate keys are a configuration defect to be
/// surfaced, never resolved by a first-wins or last-wins policy.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Two candidates offered the same registration key.
    #[error("duplicate registration key: {key}")]
    DuplicateKey {
        /// The key offered more than once.
        key: String,
    },

    /// A candidate offered an empty registration key.
    #[error("registration key must not be empty")]
    EmptyKey,

    /// A candidate's factory failed its probe construction.
    #[error("case {key:?} is not constructible")]
    NotConstructible {
        /// The key of the candidate whose factory failed.
        key: String,
        /// The underlying construction failure.
        #[source]
        source: BoxError,
    },

    /// The discovery source itself failed.
    #[error("discovery failed for scope {scope:?}")]
    Discovery {
        /// The scope whose enumeration failed.
        scope: String,
        /// The underlying discovery failure.
        #[source]
        source: BoxError,
    },
}

/// Errors for a single dispatch call.
///
/// An unregistered key is distinguishable from a registered case that
/// failed to construct, which is distinguishable from one that ran and
/// failed. Nothing is silently swallowed.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No case is registered under the requested key.
    #[error("no case registered for key: {key}")]
    UnknownKey {
        /// The unrecognized key.
        key: String,
    },

    /// The case was found but its factory failed to construct an instance.
    #[error("case {key:?} could not be constructed")]
    Instantiation {
        /// The key whose factory failed.
        key: String,
        /// The underlying construction failure.
        #[source]
        source: BoxError,
    },

    /// The case ran and its own logic failed.
    #[error("case {key:?} failed during execution")]
    Execution {
        /// The key of the failing case.
        key: String,
        /// The failure raised by the case.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// The registration key this error names.
    pub fn key(&self) -> &str {
        match self {
            DispatchError::UnknownKey { key }
            | DispatchError::Instantiation { key, .. }
            | DispatchError::Execution { key, .. } => key,
        }
    }
}

// Convenience conversion
impl From<BoxError> for CasemuxError {
    fn from(err: BoxError) -> Self {
        CasemuxError::Custom(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{BuildError, CasemuxError, DispatchError};

    #[test]
    fn test_dispatch_error_names_its_key() {
        let unknown = DispatchError::UnknownKey {
            key: "CASEC".into(),
        };
        let instantiation = DispatchError::Instantiation {
            key: "CASEA".into(),
            source: "out of handles".into(),
        };
        let execution = DispatchError::Execution {
            key: "CASEB".into(),
            source: "boom".into(),
        };

        assert_eq!(unknown.key(), "CASEC");
        assert_eq!(instantiation.key(), "CASEA");
        assert_eq!(execution.key(), "CASEB");
    }

    #[test]
    fn test_both_phases_funnel_into_the_top_level_error() {
        let build: CasemuxError = BuildError::DuplicateKey {
            key: "CASEA".into(),
        }
        .into();
        assert!(matches!(build, CasemuxError::Build(BuildError::DuplicateKey { .. })));

        let dispatch: CasemuxError = DispatchError::UnknownKey {
            key: "CASEC".into(),
        }
        .into();
        assert!(matches!(
            dispatch,
            CasemuxError::Dispatch(DispatchError::UnknownKey { .. })
        ));
    }
}
