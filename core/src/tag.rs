//! The [`Tag`] trait: what makes a type usable as a set element.

use crate::uid::{Uid, UidEq};

/// A compile-time set element.
///
/// Tags are concrete types that are never constructed; only their identity
/// matters, and identity is the [`Uid`](Tag::Uid) marker. Two tags with
/// structurally equal markers are the same element everywhere in this
/// crate, regardless of whether the Rust types differ.
///
/// Usually implemented with `#[derive(Tag)]`, which hashes the crate and
/// type name into the marker. Hand implementations must guarantee marker
/// uniqueness themselves.
pub trait Tag {
    /// Identity marker, one-to-one with the tag.
    type Uid: Uid;

    /// Numeric value of the marker, for diagnostics and tests.
    const UID: u64 = <Self::Uid as Uid>::VALUE;

    /// Type name, for diagnostics.
    const NAME: &'static str;
}

/// Identity comparison of two tags, as a type-level boolean.
pub type SameTag<A, B> = <<A as Tag>::Uid as UidEq<<B as Tag>::Uid>>::Output;
