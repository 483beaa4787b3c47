//! Containment predicates: the single query primitive both insertion and
//! equality are built on.

use crate::logic::{And, Boolean, False, Or, Select, True};
use crate::set::{Cons, Nil};
use crate::tag::Tag;
use crate::tuple::TagTuple;
use crate::uid::UidEq;

/// Whether the set carries the tag `T`, keyed on identity markers.
///
/// Closed in both directions: absent tags answer [`False`] rather than
/// failing to resolve, which is what lets
/// [`Insert`](crate::insert::Insert) branch on the result.
pub trait Contains<T: Tag> {
    type Output: Boolean;
}

impl<T: Tag> Contains<T> for Nil {
    type Output = False;
}

impl<T: Tag, Head: Tag, Tail> Contains<T> for Cons<Head, Tail>
where
    Tail: Contains<T>,
    Head::Uid: UidEq<T::Uid>,
    <Head::Uid as UidEq<T::Uid>>::Output: Select<True, <Tail as Contains<T>>::Output>,
    Or<<Head::Uid as UidEq<T::Uid>>::Output, <Tail as Contains<T>>::Output>: Boolean,
{
    type Output = Or<<Head::Uid as UidEq<T::Uid>>::Output, <Tail as Contains<T>>::Output>;
}

/// AND fold of [`Contains`] over a spine of query tags.
pub trait ContainsSpine<L> {
    type Output: Boolean;
}

impl<S> ContainsSpine<Nil> for S {
    type Output = True;
}

impl<S, Head: Tag, Rest> ContainsSpine<Cons<Head, Rest>> for S
where
    S: Contains<Head> + ContainsSpine<Rest>,
    <S as Contains<Head>>::Output: Select<<S as ContainsSpine<Rest>>::Output, False>,
    And<<S as Contains<Head>>::Output, <S as ContainsSpine<Rest>>::Output>: Boolean,
{
    type Output = And<<S as Contains<Head>>::Output, <S as ContainsSpine<Rest>>::Output>;
}

/// Whether every tag of the query tuple `Q` is in the set.
///
/// `ContainsAll<()>` is vacuously [`True`]. Note the fold only checks
/// query ⊆ set; [`SetEquals`](crate::equality::SetEquals) adds the size
/// check that makes the comparison exact.
pub trait ContainsAll<Q: TagTuple> {
    type Output: Boolean;
}

impl<S, Q: TagTuple> ContainsAll<Q> for S
where
    S: ContainsSpine<Q::Seq>,
{
    type Output = <S as ContainsSpine<Q::Seq>>::Output;
}
