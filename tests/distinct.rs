//! The duplicate-free assertion surface.

mod common;

use common::{Alpha, Beta, Gamma};
use tagset::{Boolean, False, NoDuplicates, Not, True, is_distinct};

#[test]
fn distinct_lists() {
    assert!(is_distinct::<()>());
    assert!(is_distinct::<(Alpha,)>());
    assert!(is_distinct::<(Alpha, Beta, Gamma)>());
}

#[test]
fn duplicated_lists() {
    assert!(!is_distinct::<(Alpha, Alpha)>());
    assert!(!is_distinct::<(Alpha, Beta, Alpha)>());
    assert!(!is_distinct::<(Beta, Alpha, Alpha, Gamma)>());
}

// `DistinctSet` folds `And<Not<included>, rest>`, so negation must
// invert both truth values.
#[test]
fn negation_inverts() {
    assert!(<Not<False> as Boolean>::VALUE);
    assert!(!<Not<True> as Boolean>::VALUE);
}

fn requires_distinct<Q>()
where
    Q: NoDuplicates,
{
}

#[test]
fn no_duplicates_bound_resolves_for_distinct_tuples() {
    requires_distinct::<()>();
    requires_distinct::<(Alpha,)>();
    requires_distinct::<(Alpha, Beta, Gamma)>();
}
