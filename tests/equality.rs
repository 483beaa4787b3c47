//! Set equality: permutation invariance and the size pre-check.

mod common;

use common::{Alpha, Beta, Delta, Gamma};
use tagset::{Nil, contains, set_equals, tag_set};

type Pair = tag_set![Alpha, Beta];

#[test]
fn equal_under_any_permutation() {
    assert!(set_equals::<tag_set![Alpha, Beta, Gamma], (Gamma, Alpha, Beta)>());
    assert!(set_equals::<Pair, (Alpha, Beta)>());
    assert!(set_equals::<Pair, (Beta, Alpha)>());
}

#[test]
fn duplicated_construction_input_still_compares_equal() {
    assert!(set_equals::<tag_set![Alpha, Beta, Alpha], (Alpha, Beta)>());
}

#[test]
fn subset_with_full_containment_is_not_equal() {
    // every query tag is present; only the size check rules this out
    assert!(contains::<Pair, (Alpha,)>());
    assert!(!set_equals::<Pair, (Alpha,)>());
}

#[test]
fn oversized_queries_are_not_equal() {
    assert!(!set_equals::<Pair, (Alpha, Beta, Delta)>());
}

#[test]
fn matching_size_with_different_tags_is_not_equal() {
    assert!(!set_equals::<Pair, (Alpha, Delta)>());
    assert!(!set_equals::<Pair, (Gamma, Delta)>());
}

#[test]
fn empty_set_boundary() {
    assert!(set_equals::<Nil, ()>());
    assert!(!set_equals::<Nil, (Alpha,)>());
    assert!(!set_equals::<Pair, ()>());
}
