//! Newtype wrappers selecting a monoid for a value type.
//!
//! A number is a monoid under addition and under multiplication, and an
//! ordered type under `max` and `min`. Each wrapper picks one:
//!
//! | wrapper | `append` | `empty_value` |
//! |---|---|---|
//! | [`Sum`] | `+` | `Default` (zero) |
//! | [`Product`] | `*` | one |
//! | [`Max`] | larger | [`Bounded::min_bound`](super::Bounded::min_bound) |
//! | [`Min`] | smaller | [`Bounded::max_bound`](super::Bounded::max_bound) |
//!
//! [`Foldable::sum`](super::Foldable::sum) and its siblings are `fold_map`
//! through these wrappers.

macro_rules! wrapper {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Returns the wrapped value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Borrows the wrapped value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self(value)
            }
        }
    };
}

wrapper! {
    /// The additive monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fprelude::typeclass::{Monoid, Sum};
    ///
    /// let total = Sum::concat(vec![Sum(1), Sum(2), Sum(3)]);
    /// assert_eq!(total.into_inner(), 6);
    /// ```
    Sum
}

wrapper! {
    /// The multiplicative monoid.
    Product
}

wrapper! {
    /// The monoid keeping the larger value.
    Max
}

wrapper! {
    /// The monoid keeping the smaller value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fprelude::typeclass::{Min, Monoid};
    ///
    /// assert_eq!(Min::<u8>::empty_value(), Min(255));
    /// assert_eq!(Min::concat([Min(4_u8), Min(2), Min(9)]), Min(2));
    /// ```
    Min
}
