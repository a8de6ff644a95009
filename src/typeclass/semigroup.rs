//! Types with an associative binary operation.
//!
//! # Laws
//!
//! ```text
//! a.append(b).append(c) == a.append(b.append(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fprelude::typeclass::{Max, Semigroup};
//!
//! assert_eq!(String::from("point").append(String::from("free")), "pointfree");
//! assert_eq!(Semigroup::append(vec![1], vec![2, 3]), vec![1, 2, 3]);
//! assert_eq!(Max(3).append(Max(8)), Max(8));
//! ```
//!
//! `Vec` has an inherent `append(&mut self, &mut Vec)`; call the type class
//! operation as `Semigroup::append(left, right)` when the two would be
//! confused.

use std::ops::{Add, Mul};

use super::wrappers::{Max, Min, Product, Sum};

/// An associative binary operation.
pub trait Semigroup {
    /// Combines `self` with `other`, `self` first.
    #[must_use]
    fn append(self, other: Self) -> Self;
}

impl Semigroup for String {
    fn append(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn append(mut self, mut other: Self) -> Self {
        Vec::append(&mut self, &mut other);
        self
    }
}

impl Semigroup for () {
    fn append(self, (): Self) -> Self {}
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn append(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn append(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn append(self, other: Self) -> Self {
        if other.0 >= self.0 { other } else { self }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn append(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn string_append_is_associative(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
            let left = a.clone().append(b.clone()).append(c.clone());
            let right = a.append(b.append(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn sum_append_is_associative(a in -1000_i64..1000, b in -1000_i64..1000, c in -1000_i64..1000) {
            prop_assert_eq!(
                Sum(a).append(Sum(b)).append(Sum(c)),
                Sum(a).append(Sum(b).append(Sum(c)))
            );
        }

        #[test]
        fn min_keeps_the_smaller(a: i32, b: i32) {
            prop_assert_eq!(Min(a).append(Min(b)).0, a.min(b));
        }
    }

    #[test]
    fn vec_append_concatenates_in_order() {
        let joined = Semigroup::append(vec!['a'], vec!['b', 'c']);
        assert_eq!(joined, vec!['a', 'b', 'c']);
    }

    #[test]
    fn product_append_multiplies() {
        assert_eq!(Product(6).append(Product(7)), Product(42));
    }
}
