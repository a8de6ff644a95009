//! Extracting from and extending over a context.
//!
//! `Comonad` is the dual of [`Monad`](super::Monad): `extract` takes a value
//! out where `pure` puts one in, and `extend` runs a function over the whole
//! context where `bind` runs one over each value.
//!
//! # Laws
//!
//! ```text
//! wa.duplicate().extract() == Ok(wa)
//! wa.extend(f).extract() == Ok(f(wa))
//! ```

use super::applicative::Applicative;
use crate::combinator::identity;
use crate::error::Result;

/// Contexts a value can be extracted from.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// let value = Optional::Present(3);
/// assert_eq!(value.extract(), Ok(3));
/// assert_eq!(value.duplicate(), Optional::Present(Optional::Present(3)));
///
/// let described = Optional::<i32>::Absent.extend(|o| o.is_present());
/// assert_eq!(described, Optional::Present(false));
/// ```
pub trait Comonad: Applicative + Sized {
    /// The value in focus.
    ///
    /// # Errors
    ///
    /// Returns an error when the context holds no value.
    fn extract(self) -> Result<Self::Inner>;

    /// Runs `function` over the whole context and wraps the result.
    fn extend<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self) -> B;

    /// Wraps the whole context: `extend(identity)`.
    fn duplicate(self) -> Self::WithType<Self> {
        self.extend(identity)
    }
}
