//! Compile-time deduplicated sets of type tags.
//!
//! Tags are plain marker types; a set of them is itself a type, built and
//! queried entirely through trait resolution. Generic code uses this to
//! enforce "no duplicate type in this list" invariants — sum-type
//! alternatives, dispatcher handler registrations, capability sets — with
//! violations reported at the call site that introduced them, not at
//! runtime.
//!
//! ```
//! use tagset::{Tag, contains, set_equals, size, tag_set};
//!
//! #[derive(Tag)]
//! struct Read;
//! #[derive(Tag)]
//! struct Write;
//! #[derive(Tag)]
//! struct Exec;
//!
//! // duplicates are absorbed at construction
//! type Caps = tag_set![Read, Write, Read];
//!
//! assert_eq!(size::<Caps>(), 2);
//! assert!(contains::<Caps, (Read, Write)>());
//! assert!(!contains::<Caps, (Exec,)>());
//! assert!(set_equals::<Caps, (Write, Read)>());
//! ```
//!
//! Sets never exist as values: `Caps` above is just a name for a
//! `Cons`-spine type, and every query result is an associated const the
//! compiler already folded.

pub use tagset_core::*;
pub use tagset_macros::Tag;

/// Names the deduplicated tag set built from a list of tag types.
///
/// `tag_set![A, B, A, C]` is the same type as `MakeSet<(A, B, A, C)>`:
/// duplicates collapse, and elements end up in reverse of first-occurrence
/// order.
#[macro_export]
macro_rules! tag_set {
    () => { $crate::Nil };
    ($($T:ty),+ $(,)?) => { $crate::MakeSet<($($T,)+)> };
}
