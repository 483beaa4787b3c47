//! Type-level boolean primitives: truth values, conditional selection and
//! the `And`/`Or`/`Not` connectives the set operators fold with.

/// Type-level `true`.
pub struct True;

/// Type-level `false`.
pub struct False;

/// Lowers a type-level truth value to a `bool` usable in `const` contexts.
pub trait Boolean {
    const VALUE: bool;
}

impl Boolean for True {
    const VALUE: bool = true;
}

impl Boolean for False {
    const VALUE: bool = false;
}

/// Conditional selection keyed on a type-level boolean.
pub trait Select<T, F> {
    type Output;
}

impl<T, F> Select<T, F> for True {
    type Output = T;
}

impl<T, F> Select<T, F> for False {
    type Output = F;
}

/// `T` if `C` is [`True`], `F` otherwise.
pub type If<C, T, F> = <C as Select<T, F>>::Output;

/// Type-level conjunction.
pub type And<A, B> = If<A, B, False>;

/// Type-level disjunction.
pub type Or<A, B> = If<A, True, B>;

/// Type-level negation.
pub type Not<A> = If<A, False, True>;
