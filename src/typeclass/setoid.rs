//! Equality and ordering type classes.
//!
//! [`Setoid`] and [`Ordered`] are blanket-implemented over `PartialEq` and
//! `Ord`, so every comparable standard type takes part without further
//! code. The method names stay clear of the `PartialOrd` operators.
//!
//! # Laws
//!
//! ```text
//! a.equal(a)                                        // reflexivity
//! a.equal(b) == b.equal(a)                          // symmetry
//! a.less_than_or_equal(b) || b.less_than_or_equal(a) // totality
//! ```

use std::cmp::Ordering;

/// Types with an equality relation.
///
/// # Examples
///
/// ```rust
/// use fprelude::typeclass::Setoid;
///
/// assert!("fold".equal("fold"));
/// assert!(vec![1, 2].not_equal(&vec![2, 1]));
/// ```
pub trait Setoid {
    /// Whether `self` and `other` are equal.
    fn equal(&self, other: &Self) -> bool;

    /// Whether `self` and `other` differ.
    fn not_equal(&self, other: &Self) -> bool {
        !self.equal(other)
    }
}

impl<T: PartialEq + ?Sized> Setoid for T {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

/// Types with a total order.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fprelude::typeclass::Ordered;
///
/// assert_eq!('a'.compare(&'b'), Ordering::Less);
/// assert_eq!(3_i32.max_of(7), 7);
/// assert!("abc".greater_than_or_equal("abc"));
/// ```
pub trait Ordered: Setoid {
    /// The ordering of `self` relative to `other`.
    fn compare(&self, other: &Self) -> Ordering;

    /// `self < other`.
    fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// `self <= other`.
    fn less_than_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }

    /// `self > other`.
    fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// `self >= other`.
    fn greater_than_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }

    /// The larger of the two; `other` when they are equal.
    fn max_of(self, other: Self) -> Self
    where
        Self: Sized,
    {
        if self.less_than_or_equal(&other) { other } else { self }
    }

    /// The smaller of the two; `self` when they are equal.
    fn min_of(self, other: Self) -> Self
    where
        Self: Sized,
    {
        if self.less_than_or_equal(&other) { self } else { other }
    }
}

impl<T: Ord + ?Sized> Ordered for T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}
