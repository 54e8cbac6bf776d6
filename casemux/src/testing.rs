//! Testing utilities for casemux.
//!
//! Cases are constructed fresh per dispatch, so asserting on behavior
//! means sharing counters or logs between the factory and the test body.
//! This module provides the plumbing:
//!
//! - [`CaseProbe`]: counts constructions and executions across instances
//! - [`CaseLog`]: records which key's case actually ran
//! - [`FailingCase`]: a case whose execution always fails
//! - [`flaky_candidate`]: a factory that succeeds a fixed number of times,
//!   then refuses — for exercising instantiation failure after a
//!   successful build probe

use casemux_core::{BoxError, Candidate, Case};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Case Probe
// ============================================================================

/// Shared counters observing every instance a candidate's factory builds.
///
/// # Example
///
/// ```rust,ignore
/// let probe = CaseProbe::new();
/// let registry = Registry::from_source(
///     &ListSource::new("cases").with(probe.candidate("CASEA")),
///     "cases",
/// )?;
///
/// dispatch(&registry, "CASEA").await?;
///
/// // One probe construction at build time, one per dispatch.
/// assert_eq!(probe.constructed(), 2);
/// assert_eq!(probe.executed(), 1);
/// ```
#[derive(Clone, Default)]
pub struct CaseProbe {
    constructed: Arc<AtomicUsize>,
    executed: Arc<AtomicUsize>,
}

struct ProbeInstance {
    executed: Arc<AtomicUsize>,
}

impl Case for ProbeInstance {
    async fn execute(&self) -> Result<(), BoxError> {
        self.executed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl CaseProbe {
    /// Create a new probe with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// A candidate whose instances report into this probe.
    pub fn candidate(&self, key: impl Into<String>) -> Candidate {
        let constructed = self.constructed.clone();
        let executed = self.executed.clone();
        Candidate::new(key, move || {
            constructed.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(ProbeInstance {
                executed: executed.clone(),
            }))
        })
    }

    /// How many instances the factory has constructed.
    ///
    /// Note that a registry build performs one probe construction per
    /// candidate, on top of one construction per dispatch.
    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::SeqCst)
    }

    /// How many executions have completed.
    pub fn executed(&self) -> usize {
        self.executed.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Case Log
// ============================================================================

/// A shared log of which keys' cases ran, in execution order.
///
/// # Example
///
/// ```rust,ignore
/// let log = CaseLog::new();
/// let source = ListSource::new("cases")
///     .with(log.candidate("CASEA"))
///     .with(log.candidate("CASEB"));
///
/// dispatch(&registry, "CASEA").await?;
/// assert_eq!(log.entries(), ["CASEA"]);
/// ```
#[derive(Clone, Default)]
pub struct CaseLog {
    entries: Arc<Mutex<Vec<String>>>,
}

struct LoggingInstance {
    key: String,
    entries: Arc<Mutex<Vec<String>>>,
}

impl Case for LoggingInstance {
    async fn execute(&self) -> Result<(), BoxError> {
        self.entries.lock().unwrap().push(self.key.clone());
        Ok(())
    }
}

impl CaseLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A candidate whose instances append `key` to this log on execution.
    pub fn candidate(&self, key: impl Into<String>) -> Candidate {
        let key = key.into();
        let entries = self.entries.clone();
        Candidate::new(key.clone(), move || {
            Ok(Box::new(LoggingInstance {
                key: key.clone(),
                entries: entries.clone(),
            }))
        })
    }

    /// A snapshot of the executed keys so far.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

// ============================================================================
// Failing Case
// ============================================================================

/// A case whose execution always fails with the configured message.
#[derive(Clone)]
pub struct FailingCase {
    message: &'static str,
}

impl FailingCase {
    /// Create a failing case with a custom message.
    pub fn with_message(message: &'static str) -> Self {
        Self { message }
    }
}

impl Default for FailingCase {
    fn default() -> Self {
        Self::with_message("case failed")
    }
}

impl Case for FailingCase {
    async fn execute(&self) -> Result<(), BoxError> {
        Err(self.message.into())
    }
}

// ============================================================================
// Flaky Factory
// ============================================================================

/// A no-op case used by [`flaky_candidate`] while its budget lasts.
#[derive(Default)]
struct QuietCase;

impl Case for QuietCase {
    async fn execute(&self) -> Result<(), BoxError> {
        Ok(())
    }
}

/// A candidate whose factory succeeds `budget` times and then refuses.
///
/// With `budget = 1` the build probe consumes the only success, so the
/// first dispatch fails with an instantiation error — the path where a
/// case that was constructible at build time stops being so.
pub fn flaky_candidate(key: impl Into<String>, budget: usize) -> Candidate {
    let remaining = Arc::new(AtomicUsize::new(budget));
    Candidate::new(key, move || {
        let mut left = remaining.load(Ordering::SeqCst);
        loop {
            if left == 0 {
                return Err("construction budget exhausted".into());
            }
            match remaining.compare_exchange(left, left - 1, Ordering::SeqCst, Ordering::SeqCst) {
                Ok(_) => return Ok(Box::new(QuietCase)),
                Err(actual) => left = actual,
            }
        }
    })
}
