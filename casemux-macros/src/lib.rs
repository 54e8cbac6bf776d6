//! Attribute macros for casemux.

use proc_macro::TokenStream;

mod register;

/// Declare a struct as a dispatchable case under a registration key.
///
/// The annotated type must implement `casemux::Case` and `Default` (the
/// dispatcher constructs instances generically, with no per-type
/// configuration). The attribute carries exactly one piece of metadata:
/// the key, a non-empty string literal.
///
/// Expansion submits a `CaseSubmission` to the link-time collection, with
/// the surrounding `module_path!()` recorded as the scope, so that
/// `CollectedSource` can discover the case later. Key uniqueness is not
/// checked here; the registry builder enforces it globally at build time.
///
/// # Usage
///
/// ```rust,ignore
/// use casemux::{BoxError, Case, register_case};
///
/// #[register_case("CASEA")]
/// #[derive(Default)]
/// struct CaseA;
///
/// impl Case for CaseA {
///     async fn execute(&self) -> Result<(), BoxError> {
///         println!("CaseA");
///         Ok(())
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn register_case(attr: TokenStream, item: TokenStream) -> TokenStream {
    register::register_case_impl(attr, item)
}
