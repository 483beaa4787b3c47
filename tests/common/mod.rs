#![allow(dead_code)]

use tagset::Tag;

#[derive(Tag)]
pub struct Alpha;

#[derive(Tag)]
pub struct Beta;

#[derive(Tag)]
pub struct Gamma;

#[derive(Tag)]
pub struct Delta;

/// Reflexive marker: resolves only when both parameters name the same
/// type, which is how structural set identity is asserted.
pub trait Identical<T> {}
impl<T> Identical<T> for T {}

pub fn assert_identical<A, B>()
where
    A: Identical<B>,
{
}
