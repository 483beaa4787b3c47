//! Deduplicating insertion and the set constructors.

use crate::contains::Contains;
use crate::logic::{If, Select};
use crate::set::{Cons, Nil, TagSet};
use crate::tag::Tag;
use crate::tuple::TagTuple;

/// Inserts one tag: a no-op when the tag is already present (the output is
/// the *same type*), a prepend otherwise. This is the sole place where
/// deduplication decisions are made.
pub trait Insert<T: Tag> {
    type Output: TagSet;
}

impl<S, T: Tag> Insert<T> for S
where
    S: TagSet + Contains<T>,
    <S as Contains<T>>::Output: Select<S, Cons<T, S>>,
    If<<S as Contains<T>>::Output, S, Cons<T, S>>: TagSet,
{
    type Output = If<<S as Contains<T>>::Output, S, Cons<T, S>>;
}

/// The set after inserting `T` into `S`.
pub type Inserted<S, T> = <S as Insert<T>>::Output;

/// Left-to-right fold of [`Insert`] over a spine of candidate tags.
pub trait InsertSpine<L> {
    type Output: TagSet;
}

impl<S: TagSet> InsertSpine<Nil> for S {
    type Output = S;
}

impl<S, Head: Tag, Rest> InsertSpine<Cons<Head, Rest>> for S
where
    S: Insert<Head>,
    Inserted<S, Head>: InsertSpine<Rest>,
{
    type Output = <Inserted<S, Head> as InsertSpine<Rest>>::Output;
}

/// Bulk insertion of a tuple of tags, left to right.
///
/// A tag's position is fixed at its first insertion; later occurrences are
/// absorbed without reordering, so the result is ordered by reverse of
/// first occurrence. `InsertAll<()>` returns the set unchanged.
pub trait InsertAll<Q: TagTuple> {
    type Output: TagSet;
}

impl<S, Q: TagTuple> InsertAll<Q> for S
where
    S: InsertSpine<Q::Seq>,
{
    type Output = <S as InsertSpine<Q::Seq>>::Output;
}

/// The set after bulk-inserting the tuple `Q` into `S`.
pub type InsertedAll<S, Q> = <S as InsertAll<Q>>::Output;

/// A fresh deduplicated set built from the tuple `Q`.
///
/// `MakeSet<(A, B, A, C)>` is `Cons<C, Cons<B, Cons<A, Nil>>>`.
pub type MakeSet<Q> = <Nil as InsertAll<Q>>::Output;
