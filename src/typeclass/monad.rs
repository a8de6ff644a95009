//! Sequencing computations where each step depends on the previous value.
//!
//! # Laws
//!
//! ```text
//! pure(a).bind(f) == f(a)                                  // left identity
//! m.bind(pure) == m                                        // right identity
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))            // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fprelude::prelude::*;
//!
//! fn positive(text: &str) -> Optional<u32> {
//!     match u32::read(text) {
//!         Ok(n) if n > 0 => Optional::Present(n),
//!         _ => Optional::Absent,
//!     }
//! }
//!
//! let doubled = Optional::Present("21").bind(positive).bind(|n| Optional::Present(n * 2));
//! assert_eq!(doubled, Optional::Present(42));
//! assert_eq!(Optional::Present("0").bind(positive), Optional::Absent);
//! ```

use super::applicative::Applicative;

/// Applicatives that can chain dependent computations.
pub trait Monad: Applicative {
    /// Feeds every element to `function` and flattens the results.
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;
}
