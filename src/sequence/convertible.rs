//! User types with a two-way array conversion.
//!
//! A type opts in by implementing [`ArrayConvertible`]; wrapping a value in
//! [`Convertible`] makes it a sequence of [`Shape::Custom`].

use super::{Reshape, Retain, SequenceLike, Shape};
use crate::combinator::canonical;
use crate::error::Result;

/// A type that can be converted to an array of elements and back.
///
/// `from_array` may reject element lists that cannot form a value; it should
/// return [`SequenceError::UnsupportedShape`](crate::SequenceError::UnsupportedShape)
/// in that case.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Pair(i32, i32);
///
/// impl ArrayConvertible for Pair {
///     type Element = i32;
///
///     fn into_array(self) -> Vec<i32> {
///         vec![self.0, self.1]
///     }
///
///     fn from_array(items: Vec<i32>) -> Result<Self> {
///         match items.as_slice() {
///             [first, second] => Ok(Pair(*first, *second)),
///             _ => Err(SequenceError::unsupported(Shape::Custom, "a pair holds two values")),
///         }
///     }
/// }
///
/// let swapped = reverse(Convertible(Pair(1, 2))).unwrap();
/// assert_eq!(swapped.into_inner(), Pair(2, 1));
///
/// assert!(tail(Convertible(Pair(1, 2))).is_err());
/// ```
pub trait ArrayConvertible: Sized {
    /// The element type of the array form.
    type Element;

    /// Converts the value to its array form.
    fn into_array(self) -> Vec<Self::Element>;

    /// Rebuilds a value from its array form.
    ///
    /// # Errors
    ///
    /// Returns an error when `items` cannot form a value.
    fn from_array(items: Vec<Self::Element>) -> Result<Self>;
}

/// Adapts an [`ArrayConvertible`] type to the sequence combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Convertible<C>(pub C);

impl<C> Convertible<C> {
    /// Wraps a convertible value.
    #[inline]
    pub const fn new(value: C) -> Self {
        Self(value)
    }

    /// Consumes the wrapper and returns the value.
    #[inline]
    pub fn into_inner(self) -> C {
        self.0
    }

    /// Returns a reference to the value.
    #[inline]
    pub const fn as_inner(&self) -> &C {
        &self.0
    }
}

impl<C: ArrayConvertible> SequenceLike for Convertible<C> {
    type Item = C::Element;
    const SHAPE: Shape = Shape::Custom;

    fn into_canonical(self) -> Result<Vec<C::Element>> {
        Ok(self.0.into_array())
    }
}

impl<C: ArrayConvertible> Reshape<C::Element> for Convertible<C> {
    type Rebuilt = Self;
    type Mapped = Self;

    fn rebuild(items: Vec<C::Element>) -> Result<Self> {
        let rebuilt = C::from_array(items);
        #[cfg(feature = "tracing")]
        if let Err(error) = &rebuilt {
            tracing::debug!(%error, "custom sequence rejected its elements");
        }
        rebuilt.map(Self)
    }

    fn map_elements<F>(self, function: F) -> Result<Self>
    where
        F: FnMut(C::Element) -> C::Element + 'static,
    {
        Self::rebuild(canonical::map(function, self.0.into_array()))
    }
}

impl<C: ArrayConvertible> Retain for Convertible<C> {
    type Filtered = Self;

    fn retain_elements<P>(self, predicate: P) -> Result<Self>
    where
        P: FnMut(&C::Element) -> bool + 'static,
    {
        Self::rebuild(canonical::filter(predicate, self.0.into_array()))
    }
}
