//! A generic type cannot be a tag: every instantiation would share the
//! same identity marker.

use tagset::Tag;

#[derive(Tag)]
struct Labeled<T>(T);

fn main() {}
