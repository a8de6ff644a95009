//! Semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! M::empty_value().append(a) == a      // left identity
//! a.append(M::empty_value()) == a      // right identity
//! M::concat([a, b, c]) == a.append(b).append(c)
//! ```
//!
//! [`Foldable::fold`](super::Foldable::fold) relies on these laws: it folds
//! every element into `empty_value` with `append`.

use std::ops::Add;

use super::enumerable::Bounded;
use super::semigroup::Semigroup;
use super::wrappers::{Max, Min, Product, Sum};

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use fprelude::typeclass::{Monoid, Semigroup};
///
/// assert_eq!(String::empty_value(), "");
/// let words = vec![String::from("lazy"), String::from(" "), String::from("fold")];
/// assert_eq!(String::concat(words), "lazy fold");
/// ```
pub trait Monoid: Semigroup + Sized {
    /// The identity element of [`Semigroup::append`].
    fn empty_value() -> Self;

    /// Appends every value, left to right, onto [`Monoid::empty_value`].
    fn concat<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .fold(Self::empty_value(), Semigroup::append)
    }
}

impl Monoid for String {
    fn empty_value() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty_value() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty_value() -> Self {}
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty_value() -> Self {
        Self(A::default())
    }
}

macro_rules! product_identity {
    ($($number:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$number> {
                fn empty_value() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_identity!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty_value() -> Self {
        Self(A::min_bound())
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty_value() -> Self {
        Self(A::max_bound())
    }
}
