//! Only `id` is understood inside `#[tag(...)]`.

use tagset::Tag;

#[derive(Tag)]
#[tag(colour = "teal")]
struct Paint;

fn main() {}
