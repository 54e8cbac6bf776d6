//! Implementation of the `#[register_case]` attribute.

use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemStruct, LitStr, parse_macro_input};

pub(crate) fn register_case_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let key = parse_macro_input!(attr as LitStr);
    let input = parse_macro_input!(item as ItemStruct);

    if key.value().is_empty() {
        return syn::Error::new(key.span(), "registration key must not be empty")
            .to_compile_error()
            .into();
    }

    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "registered case must not be generic: the dispatcher constructs it without type arguments",
        )
        .to_compile_error()
        .into();
    }

    let submit_code = quote! {
        ::casemux::inventory::submit! {
            ::casemux::CaseSubmission {
                key: #key,
                module: ::core::module_path!(),
                factory: || ::core::result::Result::Ok(
                    ::std::boxed::Box::new(
                        <#struct_name as ::core::default::Default>::default()
                    ) as ::std::boxed::Box<dyn ::casemux::DynCase>
                ),
            }
        }
    };

    let expanded = quote! {
        #input
        #submit_code
    };

    TokenStream::from(expanded)
}
