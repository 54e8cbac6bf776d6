//! Discovery source implementations.
//!
//! The registry builder consumes any [`DiscoverySource`]; this module
//! provides the two that ship with casemux:
//!
//! - [`ListSource`]: an explicit registration list bound to one scope.
//!   Use when the case set is known to the wiring code.
//! - [`CollectedSource`] (feature `inventory`): gathers submissions made
//!   at link time, typically through `#[register_case]`, and filters them
//!   by module-path scope. Use for annotation-style registration where
//!   case crates declare themselves.
//!
//! [`DiscoverySource`]: casemux_core::DiscoverySource

mod list;

pub use list::ListSource;

#[cfg(feature = "inventory")]
mod collected;

#[cfg(feature = "inventory")]
pub use collected::{CaseSubmission, CollectedSource};
