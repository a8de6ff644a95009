//! Mapping over the values inside a structure.
//!
//! # Laws
//!
//! ```text
//! fa.map(|x| x) == fa                          // identity
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))      // composition
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fprelude::prelude::*;
//!
//! let shown: Optional<String> = Optional::Present(5).map(|n: i32| n.show());
//! assert_eq!(shown, Optional::Present(String::from("5")));
//!
//! let empty: Optional<String> = Optional::<i32>::Absent.map(|n: i32| n.show());
//! assert_eq!(empty, Optional::Absent);
//! ```

use super::higher::TypeConstructor;

/// Structures whose elements can be transformed without changing the
/// structure.
pub trait Functor: TypeConstructor {
    /// Applies `function` to every element.
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// The structure holding exactly `value`.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Replaces every element with `value`.
    fn replace<B: Clone>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map(move |_| value.clone())
    }
}
