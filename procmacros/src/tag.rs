//! Expansion of `#[derive(Tag)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error, LitInt, Result};

use crate::paths;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

pub(crate) fn expand(input: DeriveInput) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "generic types cannot derive `Tag`: every instantiation would share one identity marker",
        ));
    }

    let ident = &input.ident;
    let name = ident.to_string();

    let mut id: Option<u64> = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("tag") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("id") {
                let lit: LitInt = meta.value()?.parse()?;
                id = Some(lit.base10_parse()?);
                Ok(())
            } else {
                Err(Error::new_spanned(
                    &meta.path,
                    "unsupported `tag` attribute; expected `id = <u64>`",
                ))
            }
        })?;
    }

    // A derive only sees the item, not its module path, so the hash input
    // is crate name + type name. Same-named tags in one crate disambiguate
    // with `#[tag(id = ...)]`.
    let uid = id.unwrap_or_else(|| {
        let krate = std::env::var("CARGO_PKG_NAME").unwrap_or_default();
        fnv1a(format!("{krate}::{name}").as_bytes())
    });

    let marker = uid_marker(uid);
    let tag_trait = paths::tag_trait();

    Ok(quote! {
        impl #tag_trait for #ident {
            type Uid = #marker;
            const NAME: &'static str = #name;
        }
    })
}

/// Encodes `uid` as the nested bit-marker type, outermost bit least
/// significant, so that `Uid::VALUE` reconstructs the original value.
fn uid_marker(uid: u64) -> TokenStream {
    let end = paths::uid_end();
    let b0 = paths::uid_b0();
    let b1 = paths::uid_b1();

    let mut marker = quote!(#end);
    for bit in (0..u64::BITS).rev() {
        marker = if (uid >> bit) & 1 == 1 {
            quote!(#b1<#marker>)
        } else {
            quote!(#b0<#marker>)
        };
    }
    marker
}
