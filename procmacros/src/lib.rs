extern crate proc_macro;

mod paths;
mod tag;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Implements the `Tag` trait for a concrete type, assigning its identity
/// marker.
///
/// The marker is a 64-bit FNV-1a hash of `"<crate name>::<type name>"`,
/// emitted as the structural bit-nest the type-level set operators compare.
/// A derive cannot see the module path of its item, so two same-named
/// types in different modules of one crate would collide; pin one of them
/// explicitly:
///
/// ```ignore
/// #[derive(Tag)]
/// #[tag(id = 0x7b65_09a4_c1d2_e3f4)]
/// struct Timeout;
/// ```
///
/// Generic types are rejected: every instantiation would share a single
/// marker, which breaks marker uniqueness.
#[proc_macro_derive(Tag, attributes(tag))]
pub fn derive_tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match tag::expand(input) {
        Ok(s) => s.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
