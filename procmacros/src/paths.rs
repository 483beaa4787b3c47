//! Centralized path definitions for generated code.
//!
//! Using a `tagset::` prefix (without leading `::`) lets downstream code
//! that renames the dependency, or doc tests inside subcrates, provide a
//! `mod tagset { ... }` shim re-exporting from the current crate.

use proc_macro2::TokenStream;
use quote::quote;

pub fn tag_trait() -> TokenStream {
    quote!(tagset::Tag)
}

pub fn uid_end() -> TokenStream {
    quote!(tagset::uid::End)
}

pub fn uid_b0() -> TokenStream {
    quote!(tagset::uid::B0)
}

pub fn uid_b1() -> TokenStream {
    quote!(tagset::uid::B1)
}
