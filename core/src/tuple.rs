//! Tuple front-end for the variadic operations.
//!
//! Rust's variadic argument lists are tuples; the recursive operator
//! traits consume `Cons` spines. [`TagTuple`] bridges the two for arities
//! 0 through 16, generated by the recursive accumulator below so each
//! element is listed once.

use crate::set::{Cons, Nil, TagSet};
use crate::tag::Tag;

/// A tuple of tags usable as a variadic argument list.
pub trait TagTuple {
    /// The equivalent `Cons` spine, in tuple order, duplicates preserved.
    type Seq: TagSet;

    /// Number of elements, before any deduplication.
    const LEN: usize = <Self::Seq as TagSet>::SIZE;
}

impl TagTuple for () {
    type Seq = Nil;
}

/// Builds the `Cons` spine for a list of tag types.
macro_rules! spine {
    () => { Nil };
    ($H:ident $(, $R:ident)*) => { Cons<$H, spine!($($R),*)> };
}

/// Callback: implements `TagTuple` for a tuple of the given arity.
macro_rules! impl_tag_tuple {
    ($($T:ident),+) => {
        impl<$($T: Tag),+> TagTuple for ($($T,)+) {
            type Seq = spine!($($T),+);
        }
    };
}

/// Recursive accumulator for type-only callbacks.
macro_rules! seq_types {
    (@acc $callback:ident [$($acc:ident),*]) => {};
    (@acc $callback:ident [$($acc:ident),*] $next:ident $($rest:ident)*) => {
        $callback!($($acc,)* $next);
        seq_types!(@acc $callback [$($acc,)* $next] $($rest)*);
    };
}

/// Calls `$callback!(T0)`, ..., `$callback!(T0, ..., T15)` for arities 1..16.
macro_rules! with_tuple_sizes {
    ($callback:ident) => {
        seq_types!(@acc $callback [] T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11 T12 T13 T14 T15);
    };
}

with_tuple_sizes!(impl_tag_tuple);
