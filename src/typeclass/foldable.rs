//! Reducing a structure to a summary value.
//!
//! Only [`Foldable::fold_left`] and [`Foldable::fold_right`] are required.
//! Every other operation is derived, most of them through
//! [`Foldable::fold_map`] and a wrapper such as [`Sum`] or [`Max`].
//!
//! # Laws
//!
//! ```text
//! fa.fold() == fa.fold_map(identity)
//! fa.fold_map(f) == fa.to_array().into_iter().map(f).fold(M::empty_value(), append)
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))    // when f is associative and commutative
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fprelude::prelude::*;
//!
//! let words = vec![String::from("point"), String::from("free")];
//! assert_eq!(words.clone().fold(), "pointfree");
//! assert_eq!(words.fold_map(|w: String| Sum(w.len())).into_inner(), 9);
//!
//! assert_eq!(vec![3, 1, 2].maximum(), Ok(3));
//! assert!(Vec::<i32>::new().minimum().is_err());
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use super::semigroup::Semigroup;
use super::setoid::Setoid;
use super::wrappers::{Max, Min, Product, Sum};
use crate::combinator::identity;
use crate::data::Optional;
use crate::error::{Result, SequenceError};

/// Structures whose elements can be folded into one value.
pub trait Foldable: TypeConstructor + Sized {
    /// Folds from the first element to the last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fprelude::typeclass::Foldable;
    ///
    /// let digits = vec![1, 2, 3].fold_left(0, |number, digit| number * 10 + digit);
    /// assert_eq!(digits, 123);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the last element to the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fprelude::typeclass::Foldable;
    ///
    /// let digits = vec![1, 2, 3].fold_right(0, |digit, number| number * 10 + digit);
    /// assert_eq!(digits, 321);
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a monoid and appends the results in order.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
    {
        self.fold_left(M::empty_value(), |accumulator, element| {
            Semigroup::append(accumulator, function(element))
        })
    }

    /// Appends every element: `fold_map(identity)`.
    fn fold(self) -> Self::Inner
    where
        Self::Inner: Monoid,
    {
        self.fold_map(identity)
    }

    /// The sum of the elements, zero when empty.
    fn sum(self) -> Self::Inner
    where
        Sum<Self::Inner>: Monoid,
    {
        self.fold_map(Sum).into_inner()
    }

    /// The product of the elements, one when empty.
    fn product(self) -> Self::Inner
    where
        Product<Self::Inner>: Monoid,
    {
        self.fold_map(Product).into_inner()
    }

    /// The largest element. The last one wins among equals.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] when there are no elements.
    fn maximum(self) -> Result<Self::Inner>
    where
        Self::Inner: Ord,
    {
        match self.fold_map(|element| Optional::Present(Max(element))) {
            Optional::Present(Max(largest)) => Ok(largest),
            Optional::Absent => Err(SequenceError::EmptySequence {
                operation: "maximum",
            }),
        }
    }

    /// The smallest element. The first one wins among equals.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] when there are no elements.
    fn minimum(self) -> Result<Self::Inner>
    where
        Self::Inner: Ord,
    {
        match self.fold_map(|element| Optional::Present(Min(element))) {
            Optional::Present(Min(smallest)) => Ok(smallest),
            Optional::Absent => Err(SequenceError::EmptySequence {
                operation: "minimum",
            }),
        }
    }

    /// Whether some element equals `value`.
    fn elem(&self, value: &Self::Inner) -> bool
    where
        Self: Clone,
        Self::Inner: Setoid,
    {
        self.clone()
            .fold_left(false, |found, element| found || element.equal(value))
    }

    /// Whether there are no elements.
    fn null(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// The number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// The elements in fold order.
    fn to_array(self) -> Vec<Self::Inner> {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn null(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_array(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], 0, 1)]
    #[case(vec![4], 4, 4)]
    #[case(vec![1, 2, 3, 4], 10, 24)]
    fn sum_and_product(#[case] values: Vec<i64>, #[case] sum: i64, #[case] product: i64) {
        assert_eq!(values.clone().sum(), sum);
        assert_eq!(values.product(), product);
    }

    #[test]
    fn extremes_of_an_empty_vec_fail() {
        assert_eq!(
            Vec::<u8>::new().maximum(),
            Err(SequenceError::EmptySequence {
                operation: "maximum"
            })
        );
        assert_eq!(
            Vec::<u8>::new().minimum(),
            Err(SequenceError::EmptySequence {
                operation: "minimum"
            })
        );
    }

    #[test]
    fn elem_uses_setoid_equality() {
        let letters = vec!['a', 'b'];
        assert!(letters.elem(&'b'));
        assert!(!letters.elem(&'z'));
    }

    #[test]
    fn fold_right_visits_last_first() {
        let trail = vec!["a", "b", "c"].fold_right(String::new(), |element, mut seen| {
            seen.push_str(element);
            seen
        });
        assert_eq!(trail, "cba");
    }

    proptest! {
        #[test]
        fn fold_agrees_with_concat(chunks in prop::collection::vec(".{0,4}", 0..8)) {
            let folded = chunks.clone().fold();
            prop_assert_eq!(folded, chunks.concat());
        }

        #[test]
        fn maximum_agrees_with_iterator(values in prop::collection::vec(any::<i32>(), 1..32)) {
            let expected = values.iter().copied().max();
            prop_assert_eq!(values.maximum().ok(), expected);
        }

        #[test]
        fn length_counts_every_element(values in prop::collection::vec(any::<u8>(), 0..32)) {
            prop_assert_eq!(Foldable::length(&values), values.len());
        }
    }
}
