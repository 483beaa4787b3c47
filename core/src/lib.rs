//! Type-level machinery for compile-time deduplicated sets of type tags.
//!
//! A tag set is a phantom type: `Nil` or a spine of [`Cons`] nodes, each
//! carrying one [`Tag`]. Sets are built through [`Insert`]/[`InsertAll`]/
//! [`MakeSet`], which deduplicate by tag identity, and queried through
//! [`Contains`], [`SetEquals`] and [`IsIncludedIn`], whose answers are the
//! type-level booleans [`True`]/[`False`]. Nothing here exists at runtime;
//! the `const fn` helpers at the bottom of this module only read associated
//! consts that the trait solver already produced.

#![no_std]
#![recursion_limit = "256"]

pub mod contains;
pub mod equality;
pub mod insert;
pub mod logic;
pub mod set;
pub mod tag;
pub mod tuple;
pub mod uid;

pub use contains::{Contains, ContainsAll};
pub use equality::{DistinctSet, IsIncludedIn, NoDuplicates, SetEquals};
pub use insert::{Insert, InsertAll, Inserted, InsertedAll, MakeSet};
pub use logic::{And, Boolean, False, If, Not, Or, Select, True};
pub use set::{Cons, Here, Member, Nil, SameSize, TagSet, There};
pub use tag::{SameTag, Tag};
pub use tuple::TagTuple;
pub use uid::{B0, B1, End, Uid, UidEq};

/// Number of tags in the set.
pub const fn size<S: TagSet>() -> usize {
    S::SIZE
}

/// Whether every tag of the query tuple `Q` is in the set `S`.
///
/// Vacuously `true` for `Q = ()`.
pub const fn contains<S, Q>() -> bool
where
    Q: TagTuple,
    S: ContainsAll<Q>,
{
    <<S as ContainsAll<Q>>::Output as Boolean>::VALUE
}

/// Whether the query tuple `Q` denotes exactly the tag set `S`.
pub const fn set_equals<S, Q>() -> bool
where
    Q: TagTuple,
    S: SetEquals<Q>,
{
    <<S as SetEquals<Q>>::Output as Boolean>::VALUE
}

/// Whether the tag `T` equals any element of the raw tag tuple `Q`.
///
/// `Q` needs no deduplication and no pre-built set.
pub const fn is_included_in<T, Q>() -> bool
where
    Q: TagTuple,
    T: IsIncludedIn<Q>,
{
    <<T as IsIncludedIn<Q>>::Output as Boolean>::VALUE
}

/// Whether the tag tuple `Q` lists each tag at most once.
pub const fn is_distinct<Q>() -> bool
where
    Q: TagTuple,
    Q::Seq: DistinctSet,
{
    <<Q::Seq as DistinctSet>::Output as Boolean>::VALUE
}
