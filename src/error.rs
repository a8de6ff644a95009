//! Error kinds raised by the sequence adapter, the combinators and the
//! reference types.
//!
//! Every fallible operation in this crate returns [`Result`], and every
//! failure is one of the [`SequenceError`] variants. Errors are surfaced to the
//! immediate caller; nothing is retried or swallowed.

use std::fmt;

use crate::sequence::Shape;

/// A specialized `Result` type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// The error kinds of the prelude.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// let error = head(Vec::<i32>::new()).unwrap_err();
/// assert_eq!(error, SequenceError::EmptySequence { operation: "head" });
/// assert_eq!(error.to_string(), "head: empty sequence");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The adapter could not project or rebuild a value of this shape.
    #[error("unsupported {shape} shape: {reason}")]
    UnsupportedShape {
        /// The shape that was being projected or rebuilt.
        shape: Shape,
        /// Why the conversion was rejected.
        reason: String,
    },

    /// The operation needs at least one element.
    #[error("{operation}: empty sequence")]
    EmptySequence {
        /// The operation that was applied to the empty input.
        operation: &'static str,
    },

    /// A positional or keyed access missed.
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange {
        /// The requested index or key, in debug form.
        index: String,
        /// The length of the container that was accessed.
        length: usize,
    },

    /// The arguments cannot be honoured for this input.
    #[error("{operation}: {reason}")]
    InvalidArgument {
        /// The operation that rejected its arguments.
        operation: &'static str,
        /// Why the arguments were rejected.
        reason: String,
    },

    /// A value was forcibly extracted from `Optional::Absent`.
    #[error("attempted to extract a value from Absent")]
    AbsentValueAccessed,
}

impl SequenceError {
    /// Creates an [`SequenceError::UnsupportedShape`].
    pub fn unsupported(shape: Shape, reason: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            shape,
            reason: reason.into(),
        }
    }

    /// Creates an [`SequenceError::IndexOutOfRange`] from any debuggable key.
    pub fn out_of_range<K: fmt::Debug + ?Sized>(index: &K, length: usize) -> Self {
        Self::IndexOutOfRange {
            index: format!("{index:?}"),
            length,
        }
    }

    /// Creates an [`SequenceError::InvalidArgument`].
    pub fn invalid(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        SequenceError::unsupported(Shape::Custom, "expected 2 elements, got 3"),
        "unsupported custom shape: expected 2 elements, got 3"
    )]
    #[case(SequenceError::EmptySequence { operation: "cycle" }, "cycle: empty sequence")]
    #[case(SequenceError::out_of_range(&7_usize, 3), "index 7 out of range for length 3")]
    #[case(SequenceError::out_of_range("name", 0), "index \"name\" out of range for length 0")]
    #[case(
        SequenceError::invalid("take", "negative count on a lazy sequence"),
        "take: negative count on a lazy sequence"
    )]
    #[case(SequenceError::AbsentValueAccessed, "attempted to extract a value from Absent")]
    fn display_names_the_failure(#[case] error: SequenceError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn errors_compare_by_value() {
        let first = SequenceError::out_of_range(&1_usize, 0);
        let second = first.clone();
        assert_eq!(first, second);
        assert_ne!(first, SequenceError::AbsentValueAccessed);
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<SequenceError>();
    }
}
