//! The tag set spine: [`Nil`]/[`Cons`] nodes, sizing, and the
//! compiler-searched membership witness [`Member`].

use core::marker::PhantomData;

use crate::logic::{Boolean, False, True};
use crate::tag::Tag;

/// The empty tag set.
pub struct Nil;

/// A non-empty tag set: `Head` plus the `Tail` set.
pub struct Cons<Head, Tail>(PhantomData<(Head, Tail)>);

/// An ordered sequence of tags.
///
/// Sets built through this crate's constructors ([`Nil`],
/// [`Insert`](crate::insert::Insert), [`MakeSet`](crate::insert::MakeSet))
/// carry no duplicate tags and order elements by reverse of first
/// occurrence. A raw `Cons` spine written by hand (or produced from a
/// query tuple) satisfies `TagSet` too, without those invariants.
pub trait TagSet {
    /// Number of elements; each non-empty spine is its tail plus one.
    const SIZE: usize;
}

impl TagSet for Nil {
    const SIZE: usize = 0;
}

impl<Head: Tag, Tail: TagSet> TagSet for Cons<Head, Tail> {
    const SIZE: usize = Tail::SIZE + 1;
}

/// Structural length comparison of two spines.
///
/// Settles as soon as one side runs out; no tag identity is inspected,
/// which is what lets [`SetEquals`](crate::equality::SetEquals) disqualify
/// a query cheaply before any containment fold is instantiated.
pub trait SameSize<Rhs> {
    type Output: Boolean;
}

impl SameSize<Nil> for Nil {
    type Output = True;
}

impl<H, T> SameSize<Cons<H, T>> for Nil {
    type Output = False;
}

impl<H, T> SameSize<Nil> for Cons<H, T> {
    type Output = False;
}

impl<H1, T1, H2, T2> SameSize<Cons<H2, T2>> for Cons<H1, T1>
where
    T1: SameSize<T2>,
{
    type Output = <T1 as SameSize<T2>>::Output;
}

/// Index witness: the queried tag is the head.
pub struct Here;

/// Index witness: the queried tag is `Index` deep in the tail.
pub struct There<Index>(PhantomData<Index>);

/// Proof that the set carries `T`, with the position searched by the
/// compiler.
///
/// This is the bound-style counterpart of
/// [`Contains`](crate::contains::Contains): one relationship test per
/// query, answered by trait resolution, failing with a diagnostic at the
/// call site instead of producing `False`. The `Index` parameter is
/// inferred; it exists only to keep the head and tail impls apart.
#[diagnostic::on_unimplemented(
    message = "tag `{T}` is not a member of the tag set `{Self}`",
    label = "this bound requires the set to carry `{T}`",
    note = "tag sets are built with `MakeSet` or `InsertAll`; the membership index is inferred"
)]
pub trait Member<T: Tag, Index> {}

impl<T: Tag, Tail: TagSet> Member<T, Here> for Cons<T, Tail> {}

impl<T: Tag, Head: Tag, Tail, Index> Member<T, There<Index>> for Cons<Head, Tail> where
    Tail: Member<T, Index>
{
}
