//! Rendering to and parsing from text.
//!
//! [`Show`] is blanket-implemented over `Display` and [`Read`] over
//! `FromStr`, so `read(show(x)) == x` holds wherever the two standard traits
//! agree.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Result, SequenceError};

/// Types with a textual rendering.
///
/// # Examples
///
/// ```rust
/// use fprelude::typeclass::Show;
///
/// assert_eq!(42.5_f32.show(), "42.5");
/// assert_eq!('λ'.show(), "λ");
/// ```
pub trait Show {
    /// Renders the value.
    fn show(&self) -> String;
}

impl<T: Display + ?Sized> Show for T {
    #[inline]
    fn show(&self) -> String {
        self.to_string()
    }
}

/// Types that can be parsed from text.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// assert_eq!(u16::read("8080"), Ok(8080));
/// assert!(matches!(
///     u16::read("-1"),
///     Err(SequenceError::InvalidArgument { operation: "read", .. })
/// ));
/// ```
pub trait Read: Sized {
    /// Parses a value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] when `text` is not a valid
    /// rendering.
    fn read(text: &str) -> Result<Self>;
}

impl<T> Read for T
where
    T: FromStr,
    T::Err: Display,
{
    fn read(text: &str) -> Result<Self> {
        text.parse()
            .map_err(|error| SequenceError::invalid("read", format!("cannot parse {text:?}: {error}")))
    }
}
