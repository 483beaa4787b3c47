//! Containment queries, the membership witness, and the linear fallback.

mod common;

use common::{Alpha, Beta, Delta, Gamma};
use tagset::{Member, Nil, contains, is_included_in, tag_set};

type Caps = tag_set![Alpha, Beta, Gamma];

#[test]
fn contains_every_inserted_tag() {
    assert!(contains::<Caps, (Alpha,)>());
    assert!(contains::<Caps, (Beta,)>());
    assert!(contains::<Caps, (Gamma,)>());
    assert!(contains::<Caps, (Alpha, Beta, Gamma)>());
    assert!(contains::<Caps, (Gamma, Alpha)>());
}

#[test]
fn does_not_contain_foreign_tags() {
    assert!(!contains::<Caps, (Delta,)>());
    // one absent tag fails the whole conjunction
    assert!(!contains::<Caps, (Alpha, Delta)>());
    assert!(!contains::<Nil, (Alpha,)>());
}

#[test]
fn zero_query_tags_are_vacuously_contained() {
    assert!(contains::<Caps, ()>());
    assert!(contains::<Nil, ()>());
}

fn requires_member<S, I>()
where
    S: Member<Beta, I>,
{
}

#[test]
fn member_bound_resolves_with_inferred_index() {
    requires_member::<Caps, _>();
}

#[test]
fn linear_membership_over_raw_lists() {
    assert!(is_included_in::<Alpha, (Beta, Gamma, Alpha)>());
    assert!(!is_included_in::<Delta, (Alpha, Beta, Gamma)>());
    assert!(!is_included_in::<Delta, ()>());
    // the query list is raw: duplicates are allowed, no set is built
    assert!(is_included_in::<Alpha, (Alpha, Alpha)>());
}
