//! # Capability Layer (Case)
//!
//! The contract every registered handler must satisfy.
//!
//! A `Case` is deliberately narrow: one no-argument async operation with a
//! success/failure outcome. Everything else — how the case was found, what
//! key it answers to, when it is constructed — lives outside the handler,
//! in the registry and dispatcher.
//!
//! # Statelessness
//!
//! Cases are constructed generically by the dispatcher, once per dispatch,
//! with no per-type configuration. Implementations must therefore be
//! constructible through a zero-argument path (usually `Default`) and must
//! not rely on state surviving between dispatches. Shared state, if a case
//! needs it, belongs behind `Arc` captured by the factory that builds it.
//!
//! # Static vs Dynamic Dispatch
//!
//! `Case` uses native `async fn`-style returns for zero-cost static
//! dispatch. Registries store cases type-erased; for that, use [`DynCase`],
//! which every `Case` implements automatically.

use crate::error::BoxError;
use std::{future::Future, pin::Pin};

/// The capability contract for registered handlers.
///
/// One operation, no parameters, no return value beyond success/failure.
/// The dispatcher constructs an instance, calls [`execute`](Case::execute)
/// exactly once, and drops the instance.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be registered as a case",
    label = "missing `Case` implementation",
    note = "Registered handlers must implement `Case::execute`."
)]
pub trait Case: Send + Sync + 'static {
    /// Perform the case's side effect.
    fn execute(&self) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Dynamic object-safe version of [`Case`].
///
/// Use this trait where runtime polymorphism is required (descriptors and
/// registries store `Box<dyn DynCase>`).
pub trait DynCase: Send + Sync + 'static {
    /// Perform the case's side effect (dynamic dispatch version).
    fn execute_dyn<'a>(&'a self)
    -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;
}

impl std::fmt::Debug for dyn DynCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DynCase")
    }
}

// Blanket implementation: any type implementing Case implements DynCase.
impl<T: Case> DynCase for T {
    fn execute_dyn<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>> {
        Box::pin(self.execute())
    }
}

// Allow Box<dyn DynCase> to be used where Case is expected.
impl Case for Box<dyn DynCase> {
    async fn execute(&self) -> Result<(), BoxError> {
        (**self).execute_dyn().await
    }
}
