//! # casemux
//!
//! Keyed case registry and dispatch: discover candidates once, validate
//! them into an immutable registry, then invoke cases by logical name.
//!
//! casemux replaces branch-per-key dispatch (the long `match` over string
//! keys) with a declarative registry. Data flows one direction:
//!
//! ```text
//! DiscoverySource → RegistryBuilder → Registry → dispatch → caller
//! ```
//!
//! The build runs once per process lifetime (or per explicit re-scan) and
//! may block; the registry is thereafter read-only and freely shareable;
//! dispatch is called repeatedly and concurrently, constructing a fresh
//! case instance per call.
//!
//! # Example
//!
//! ```rust,ignore
//! use casemux::{Candidate, ListSource, Registry, dispatch};
//!
//! #[derive(Default)]
//! struct CaseA;
//!
//! impl casemux::Case for CaseA {
//!     async fn execute(&self) -> Result<(), casemux::BoxError> {
//!         println!("CaseA");
//!         Ok(())
//!     }
//! }
//!
//! let source = ListSource::new("cases").case::<CaseA>("CASEA");
//! let registry = Registry::from_source(&source, "cases")?;
//! dispatch(&registry, "CASEA").await?;
//! ```
//!
//! # Feature flags
//!
//! - `inventory`: link-time candidate collection via [`CollectedSource`]
//! - `macros`: the `#[register_case]` attribute (implies `inventory`)
//! - `tracing`: structured logging on the dispatch path

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod discover;
pub mod dispatcher;
pub mod registry;
pub mod testing;

// Re-export core contracts
pub use casemux_core::{
    BoxError, BuildError, Candidate, Case, CaseDescriptor, CaseFactory, CasemuxError,
    DiscoverySource, DispatchError, DynCase,
};

pub use discover::ListSource;
#[cfg(feature = "inventory")]
pub use discover::{CaseSubmission, CollectedSource};
pub use dispatcher::{Dispatcher, dispatch};
pub use registry::{Registry, RegistryBuilder};

#[cfg(feature = "macros")]
pub use casemux_macros::register_case;

#[cfg(feature = "inventory")]
pub use inventory;
