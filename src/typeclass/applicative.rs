//! Applying functions held inside a structure.
//!
//! A structure of functions is applied to a structure of values. For
//! [`Optional`](crate::data::Optional) both sides must be present; for
//! [`Collection`](crate::data::Collection) every function meets every value,
//! function-major.
//!
//! # Laws
//!
//! ```text
//! pure(identity).apply(v) == v                  // identity
//! pure(f).apply(pure(x)) == pure(f(x))          // homomorphism
//! ```

use super::functor::Functor;

/// Functors whose elements can be functions applied to another instance.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// fn increment(x: i32) -> i32 { x + 1 }
/// fn tenfold(x: i32) -> i32 { x * 10 }
///
/// let functions = Collection::of(vec![increment as fn(i32) -> i32, tenfold]);
/// let applied = functions.apply(Collection::of(vec![1, 2]));
/// assert_eq!(applied.into_vec(), vec![2, 3, 10, 20]);
/// ```
pub trait Applicative: Functor {
    /// Applies the held functions to the values in `values`.
    fn apply<A, B>(self, values: Self::WithType<A>) -> Self::WithType<B>
    where
        Self::Inner: FnMut(A) -> B,
        A: Clone;
}
