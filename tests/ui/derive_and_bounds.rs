//! Deriving tags and consuming the bound-style surface.

use tagset::{Member, NoDuplicates, Tag, contains, tag_set};

#[derive(Tag)]
struct Read;

#[derive(Tag)]
struct Write;

#[derive(Tag)]
struct Exec;

type Caps = tag_set![Read, Write];

fn grant<S, I>()
where
    S: Member<Write, I>,
{
}

fn register<Q>()
where
    Q: NoDuplicates,
{
}

fn main() {
    grant::<Caps, _>();
    register::<(Read, Write, Exec)>();
    assert!(contains::<Caps, (Read, Write)>());
    assert!(!contains::<Caps, (Exec,)>());
}
