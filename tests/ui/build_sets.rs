//! Building sets incrementally from an existing spine.

use tagset::{Inserted, InsertedAll, MakeSet, Nil, Tag, set_equals, size};

#[derive(Tag)]
struct A;

#[derive(Tag)]
struct B;

#[derive(Tag)]
struct C;

type Base = Inserted<Nil, A>;
type Full = InsertedAll<Base, (B, C, A)>;

fn main() {
    assert_eq!(size::<Base>(), 1);
    assert_eq!(size::<Full>(), 3);
    assert!(set_equals::<Full, (A, B, C)>());
    assert_eq!(size::<MakeSet<(A, A, B)>>(), 2);
}
