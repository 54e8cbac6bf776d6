//! # casemux-core
//!
//! Core contracts for the casemux keyed-dispatch framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! crates that only *provide* cases and don't need the full `casemux`
//! registry implementation.
//!
//! # The Shape of the System
//!
//! casemux replaces branch-per-key dispatch with a registry built in three
//! steps, each owned by one contract in this crate:
//!
//! ## 1. Capability ([`Case`])
//!
//! The operation every registered handler must satisfy: a single
//! no-argument async call with a success/failure outcome. Cases are
//! stateless; they are constructed fresh for every dispatch through a
//! zero-config factory.
//!
//! ## 2. Discovery ([`DiscoverySource`])
//!
//! A producer of [`Candidate`]s — raw `(key, factory)` pairs scoped to a
//! namespace. The core places no constraint on how candidates are
//! produced (explicit list, link-time collection, config file); only on
//! their shape. Candidate order is unspecified and carries no meaning.
//!
//! ## 3. Description ([`CaseDescriptor`])
//!
//! The validated, immutable record a registry stores per key. Holds the
//! key and the factory; [`CaseDescriptor::construct`] yields a fresh
//! instance behind [`DynCase`].
//!
//! # Error Types
//!
//! - [`CasemuxError`] - Top-level error type
//! - [`BuildError`] - Registry construction errors (fatal to the build)
//! - [`DispatchError`] - Per-call dispatch errors (recoverable by caller)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod case;
mod descriptor;
mod discovery;
mod error;

// Re-exports
pub use case::{Case, DynCase};
pub use descriptor::{CaseDescriptor, CaseFactory};
pub use discovery::{Candidate, DiscoverySource};
pub use error::{BoxError, BuildError, CasemuxError, DispatchError};
