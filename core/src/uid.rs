//! Per-tag identity markers.
//!
//! Every tag carries a 64-bit identifier encoded structurally: a nest of
//! [`B1`]/[`B0`] bit nodes terminated by [`End`], outermost bit least
//! significant. Structural encoding is what makes tag identity *decidable*
//! at the type level — [`UidEq`] resolves to [`True`] or [`False`] for any
//! pair of markers, so "not present" is a real answer rather than a failed
//! bound. `#[derive(Tag)]` assigns markers by hashing the crate and type
//! name; they are never inspected at runtime.

use core::marker::PhantomData;

use crate::logic::{Boolean, False, True};

/// Terminator of a marker bit-nest.
pub struct End;

/// A zero bit.
pub struct B0<Rest>(PhantomData<Rest>);

/// A one bit.
pub struct B1<Rest>(PhantomData<Rest>);

/// A structural identity marker. `VALUE` reconstructs the numeric
/// identifier the marker encodes.
pub trait Uid {
    const VALUE: u64;
}

impl Uid for End {
    const VALUE: u64 = 0;
}

impl<Rest: Uid> Uid for B0<Rest> {
    const VALUE: u64 = Rest::VALUE << 1;
}

impl<Rest: Uid> Uid for B1<Rest> {
    const VALUE: u64 = (Rest::VALUE << 1) | 1;
}

/// Closed structural equality over identity markers.
///
/// The first differing bit settles the comparison without recursing
/// further; equal-length markers of equal bits settle at [`End`].
pub trait UidEq<Rhs> {
    type Output: Boolean;
}

impl UidEq<End> for End {
    type Output = True;
}

impl<R> UidEq<B0<R>> for End {
    type Output = False;
}

impl<R> UidEq<B1<R>> for End {
    type Output = False;
}

impl<L> UidEq<End> for B0<L> {
    type Output = False;
}

impl<L> UidEq<End> for B1<L> {
    type Output = False;
}

impl<L, R> UidEq<B0<R>> for B0<L>
where
    L: UidEq<R>,
{
    type Output = <L as UidEq<R>>::Output;
}

impl<L, R> UidEq<B1<R>> for B1<L>
where
    L: UidEq<R>,
{
    type Output = <L as UidEq<R>>::Output;
}

impl<L, R> UidEq<B1<R>> for B0<L> {
    type Output = False;
}

impl<L, R> UidEq<B0<R>> for B1<L> {
    type Output = False;
}
