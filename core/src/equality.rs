//! Set equality, the linear membership fallback, and the duplicate-free
//! assertion surface.

use crate::contains::ContainsAll;
use crate::logic::{And, Boolean, False, Not, Or, Select, True};
use crate::set::{Cons, Nil, SameSize};
use crate::tag::Tag;
use crate::tuple::TagTuple;
use crate::uid::UidEq;

/// Whether the query tuple `Q` denotes exactly the tag set `Self`.
///
/// The structural size comparison runs first; only when the lengths match
/// is the containment fold consulted. The size check is load-bearing, not
/// an optimization: containment alone only proves query ⊆ set, so a
/// strict subset whose members are all present would otherwise pass.
///
/// The raw query length is compared, so a query tuple that repeats a tag
/// can defeat the size check; guard untrusted lists with [`NoDuplicates`].
pub trait SetEquals<Q: TagTuple> {
    type Output: Boolean;
}

impl<S, Q: TagTuple> SetEquals<Q> for S
where
    S: SameSize<Q::Seq>,
    S: SetEqualsSized<Q, <S as SameSize<Q::Seq>>::Output>,
{
    type Output = <S as SetEqualsSized<Q, <S as SameSize<Q::Seq>>::Output>>::Output;
}

/// Second stage of [`SetEquals`], dispatched on the size comparison.
///
/// The mismatch arm carries no containment bound at all, so the fold is
/// never instantiated for a query the size check already rules out.
pub trait SetEqualsSized<Q: TagTuple, SizeMatch> {
    type Output: Boolean;
}

impl<S, Q: TagTuple> SetEqualsSized<Q, False> for S {
    type Output = False;
}

impl<S, Q: TagTuple> SetEqualsSized<Q, True> for S
where
    S: ContainsAll<Q>,
{
    type Output = <S as ContainsAll<Q>>::Output;
}

/// OR fold of direct identity comparisons of `Self` against a spine.
pub trait InSpine<L>: Tag {
    type Output: Boolean;
}

impl<T: Tag> InSpine<Nil> for T {
    type Output = False;
}

impl<T: Tag, Head: Tag, Rest> InSpine<Cons<Head, Rest>> for T
where
    T: InSpine<Rest>,
    T::Uid: UidEq<Head::Uid>,
    <T::Uid as UidEq<Head::Uid>>::Output: Select<True, <T as InSpine<Rest>>::Output>,
    Or<<T::Uid as UidEq<Head::Uid>>::Output, <T as InSpine<Rest>>::Output>: Boolean,
{
    type Output = Or<<T::Uid as UidEq<Head::Uid>>::Output, <T as InSpine<Rest>>::Output>;
}

/// Whether the tag `Self` equals any element of the raw tag tuple `Q`.
///
/// Independent of the set machinery: the query list needs no
/// deduplication and no pre-built set, at the cost of one comparison per
/// element instead of a single membership witness.
pub trait IsIncludedIn<Q: TagTuple>: Tag {
    type Output: Boolean;
}

impl<T: Tag, Q: TagTuple> IsIncludedIn<Q> for T
where
    T: InSpine<Q::Seq>,
{
    type Output = <T as InSpine<Q::Seq>>::Output;
}

/// Whether a spine carries no duplicate identities: the head must not
/// reappear in the rest, and the rest must itself be distinct.
pub trait DistinctSet {
    type Output: Boolean;
}

impl DistinctSet for Nil {
    type Output = True;
}

impl<Head: Tag, Rest> DistinctSet for Cons<Head, Rest>
where
    Rest: DistinctSet,
    Head: InSpine<Rest>,
    <Head as InSpine<Rest>>::Output: Select<False, True>,
    Not<<Head as InSpine<Rest>>::Output>: Select<<Rest as DistinctSet>::Output, False>,
    And<Not<<Head as InSpine<Rest>>::Output>, <Rest as DistinctSet>::Output>: Boolean,
{
    type Output = And<Not<<Head as InSpine<Rest>>::Output>, <Rest as DistinctSet>::Output>;
}

/// Bound-style assertion that a tag tuple lists each tag at most once.
///
/// For generic code that requires a duplicate-free list up front; the
/// violation surfaces at the call site that supplied the list.
#[diagnostic::on_unimplemented(
    message = "tag list `{Self}` contains a duplicate tag",
    label = "this argument must list each tag at most once",
    note = "deduplicate the list, or build a set with `MakeSet` and let insertion absorb repeats"
)]
pub trait NoDuplicates: TagTuple {}

impl<Q: TagTuple> NoDuplicates for Q where Q::Seq: DistinctSet<Output = True> {}
