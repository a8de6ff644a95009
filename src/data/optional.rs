//! A value that may be absent.

use std::fmt;

use crate::error::{Result, SequenceError};
use crate::typeclass::{
    Applicative, Comonad, Foldable, Functor, Monad, Monoid, Semigroup, TypeConstructor,
};

/// Either a present value or nothing.
///
/// `map` and `bind` skip `Absent`, `apply` needs both sides present, and
/// `extract` refuses `Absent` with [`SequenceError::AbsentValueAccessed`].
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// let halved = Optional::Present(8).bind(|n: i32| {
///     if n % 2 == 0 { Optional::Present(n / 2) } else { Optional::Absent }
/// });
/// assert_eq!(halved, Optional::Present(4));
/// assert_eq!(halved.to_string(), "Present(4)");
///
/// let missing: Optional<i32> = Optional::Absent;
/// assert_eq!(missing.extract(), Err(SequenceError::AbsentValueAccessed));
/// assert_eq!(missing.extract_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value.
    #[default]
    Absent,
    /// A value.
    Present(T),
}

impl<T> Optional<T> {
    /// Returns `true` for `Present`.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` for `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The held value, or `default` for `Absent`.
    pub fn extract_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Borrows the held value.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Converts to the standard `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

impl<T> Functor for Optional<T> {
    fn map<B, F>(self, mut function: F) -> Optional<B>
    where
        F: FnMut(T) -> B,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }
}

impl<T> Applicative for Optional<T> {
    fn apply<A, B>(self, values: Optional<A>) -> Optional<B>
    where
        T: FnMut(A) -> B,
        A: Clone,
    {
        match (self, values) {
            (Self::Present(mut function), Optional::Present(value)) => {
                Optional::Present(function(value))
            }
            _ => Optional::Absent,
        }
    }
}

impl<T> Monad for Optional<T> {
    fn bind<B, F>(self, mut function: F) -> Optional<B>
    where
        F: FnMut(T) -> Optional<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }
}

impl<T> Comonad for Optional<T> {
    fn extract(self) -> Result<T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(SequenceError::AbsentValueAccessed),
        }
    }

    fn extend<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(Self) -> B,
    {
        Optional::Present(function(self))
    }
}

impl<T: Semigroup> Semigroup for Optional<T> {
    fn append(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => Self::Present(left.append(right)),
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            (Self::Absent, Self::Absent) => Self::Absent,
        }
    }
}

impl<T: Semigroup> Monoid for Optional<T> {
    fn empty_value() -> Self {
        Self::Absent
    }
}

impl<T> Foldable for Optional<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Present(value) => function(init, value),
            Self::Absent => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Present(value) => function(value, init),
            Self::Absent => init,
        }
    }

    #[inline]
    fn null(&self) -> bool {
        self.is_absent()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_present())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    #[case(Optional::Present(2), Optional::Present(3), Optional::Present(5))]
    #[case(Optional::Present(2), Optional::Absent, Optional::Present(2))]
    #[case(Optional::Absent, Optional::Present(3), Optional::Present(3))]
    #[case(Optional::Absent, Optional::Absent, Optional::Absent)]
    fn append_combines_present_values(
        #[case] left: Optional<i32>,
        #[case] right: Optional<i32>,
        #[case] expected: Optional<i32>,
    ) {
        let summed = left.map(Sum).append(right.map(Sum)).map(Sum::into_inner);
        assert_eq!(summed, expected);
    }

    #[test]
    fn apply_needs_both_sides() {
        let increment = Optional::Present(|n: i32| n + 1);
        assert_eq!(increment.apply(Optional::Present(1)), Optional::Present(2));
        assert_eq!(increment.apply(Optional::Absent), Optional::Absent);

        let nothing: Optional<fn(i32) -> i32> = Optional::Absent;
        assert_eq!(nothing.apply(Optional::Present(1)), Optional::Absent);
    }

    #[test]
    fn extend_wraps_the_whole_value() {
        let absent: Optional<u8> = Optional::Absent;
        assert_eq!(absent.duplicate(), Optional::Present(Optional::Absent));
        assert_eq!(
            Optional::Present(4_u8).extend(|o| o.length()),
            Optional::Present(1)
        );
    }

    #[test]
    fn folds_see_at_most_one_element() {
        assert_eq!(Optional::Present(7).sum(), 7);
        assert_eq!(Optional::<i32>::Absent.sum(), 0);
        assert_eq!(Optional::Present('x').to_array(), vec!['x']);
        assert!(Optional::<char>::Absent.null());
    }

    #[test]
    fn converts_to_and_from_option() {
        assert_eq!(Optional::from(Some(3)), Optional::Present(3));
        assert_eq!(Optional::<i32>::from(None), Optional::Absent);
        assert_eq!(Option::from(Optional::Present("a")), Some("a"));
    }

    #[test]
    fn display_names_the_variant() {
        assert_eq!(Optional::Present(3).to_string(), "Present(3)");
        assert_eq!(Optional::<i32>::Absent.to_string(), "Absent");
    }

    #[test]
    fn absent_orders_first() {
        assert!(Optional::Absent < Optional::Present(i32::MIN));
    }
}
