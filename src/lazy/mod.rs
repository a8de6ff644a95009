//! Lazy, pull-based sequences.
//!
//! A [`LazySequence`] is a forward-only stream: every call to
//! [`Iterator::next`] produces one element and advances a cursor that can
//! never be rewound. The consumer drives production; nothing runs in the
//! background.
//!
//! # State machine
//!
//! ```text
//! Created --next--> Producing --element--> Suspended --next--> Producing ...
//!                       |
//!                       +--end of a finite source--> Exhausted
//! ```
//!
//! Infinite sequences (`repeat`, `cycle`, `iterate`) never reach
//! [`GeneratorState::Exhausted`]. Equality and length are undefined on them,
//! so `LazySequence` implements neither `PartialEq` nor `Clone`, and
//! projecting an infinite sequence in full fails with
//! [`SequenceError::InvalidArgument`](crate::SequenceError::InvalidArgument)
//! instead of hanging.
//!
//! # Examples
//!
//! ```rust
//! use fprelude::prelude::*;
//!
//! let powers = iterate(|n: u64| n * 2, 1);
//! assert_eq!(take(6, powers).unwrap(), vec![1, 2, 4, 8, 16, 32]);
//!
//! let evens = filter(|n: &u64| n % 2 == 0, iterate(|n: u64| n + 1, 0)).unwrap();
//! assert_eq!(take(3, evens).unwrap(), vec![0, 2, 4]);
//!
//! assert!(count(repeat('x')).is_err());
//! ```

mod generators;

use std::fmt;

use crate::error::{Result, SequenceError};
use crate::sequence::{Reshape, Retain, SequenceLike, Shape};

pub use generators::{cycle, iterate, repeat, replicate, times};

/// The production state of a lazy sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorState {
    /// No element has been requested yet.
    Created,
    /// An element is being produced.
    Producing,
    /// An element was produced; the sequence waits for the next pull.
    Suspended,
    /// A finite source has ended. Terminal.
    Exhausted,
}

/// Whether a lazy sequence has a known end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    /// The source ends after finitely many elements.
    Finite,
    /// The source never ends.
    Infinite,
}

/// A lazily produced sequence with a single forward cursor.
///
/// Owned by exactly one consumer. Wrapping combinators such as
/// [`map`](crate::combinator::map) and [`filter`](crate::combinator::filter)
/// take the sequence by value and return a new lazy sequence that pulls from
/// it on demand.
pub struct LazySequence<T> {
    source: Box<dyn Iterator<Item = T>>,
    extent: Extent,
    state: GeneratorState,
    produced: usize,
}

impl<T> LazySequence<T> {
    fn with_extent<I>(source: I, extent: Extent) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Self {
            source: Box::new(source),
            extent,
            state: GeneratorState::Created,
            produced: 0,
        }
    }

    /// Wraps a source that ends after finitely many elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fprelude::lazy::{Extent, LazySequence};
    ///
    /// let sequence = LazySequence::finite(vec![1, 2, 3]);
    /// assert_eq!(sequence.extent(), Extent::Finite);
    /// assert_eq!(sequence.sum::<i32>(), 6);
    /// ```
    pub fn finite<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::with_extent(source.into_iter(), Extent::Finite)
    }

    /// Wraps a source the caller declares to be endless.
    ///
    /// Full projections of the result are rejected.
    pub fn infinite<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::with_extent(source.into_iter(), Extent::Infinite)
    }

    /// Returns whether the sequence has a known end.
    #[inline]
    pub const fn extent(&self) -> Extent {
        self.extent
    }

    /// Returns the current production state.
    #[inline]
    pub const fn state(&self) -> GeneratorState {
        self.state
    }

    /// Returns how many elements have been produced so far.
    #[inline]
    pub const fn produced(&self) -> usize {
        self.produced
    }

    /// Returns `true` for endless sequences.
    #[inline]
    pub const fn is_infinite(&self) -> bool {
        matches!(self.extent, Extent::Infinite)
    }

    fn produce_next(&mut self) -> Option<T> {
        if self.state == GeneratorState::Exhausted {
            return None;
        }
        self.state = GeneratorState::Producing;
        if let Some(element) = self.source.next() {
            self.produced += 1;
            self.state = GeneratorState::Suspended;
            Some(element)
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(produced = self.produced, "lazy sequence exhausted");
            self.state = GeneratorState::Exhausted;
            None
        }
    }
}

impl<T> Iterator for LazySequence<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.produce_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.extent, self.state) {
            (_, GeneratorState::Exhausted) => (0, Some(0)),
            (Extent::Infinite, _) => (usize::MAX, None),
            (Extent::Finite, _) => self.source.size_hint(),
        }
    }
}

impl<T: 'static> FromIterator<T> for LazySequence<T> {
    /// Collects the elements eagerly and replays them lazily.
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::finite(iterator.into_iter().collect::<Vec<_>>())
    }
}

impl<T> fmt::Debug for LazySequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazySequence")
            .field("extent", &self.extent)
            .field("state", &self.state)
            .field("produced", &self.produced)
            .finish_non_exhaustive()
    }
}

impl<T> SequenceLike for LazySequence<T> {
    type Item = T;
    const SHAPE: Shape = Shape::Lazy;

    fn is_bounded(&self) -> bool {
        self.extent == Extent::Finite
    }

    fn into_canonical(self) -> Result<Vec<T>> {
        if self.is_infinite() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                produced = self.produced,
                "refused to materialize an infinite lazy sequence"
            );
            return Err(SequenceError::invalid(
                "into_canonical",
                "an infinite lazy sequence cannot be materialized without a bound",
            ));
        }
        Ok(self.collect())
    }

    fn into_canonical_prefix(mut self, length: usize) -> Result<Vec<T>> {
        Ok(self.by_ref().take(length).collect())
    }
}

impl<A: 'static, B: 'static> Reshape<B> for LazySequence<A> {
    type Rebuilt = Vec<B>;
    type Mapped = LazySequence<B>;

    /// Lazy sequences are never rebuilt; combinators that consume one return
    /// the canonical container.
    fn rebuild(items: Vec<B>) -> Result<Vec<B>> {
        Ok(items)
    }

    fn map_elements<F>(self, function: F) -> Result<LazySequence<B>>
    where
        F: FnMut(A) -> B + 'static,
    {
        let extent = self.extent;
        Ok(LazySequence::with_extent(self.map(function), extent))
    }
}

impl<T: 'static> Retain for LazySequence<T> {
    type Filtered = Self;

    fn retain_elements<P>(self, predicate: P) -> Result<Self>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        let extent = self.extent;
        Ok(Self::with_extent(self.filter(predicate), extent))
    }
}

static_assertions::assert_not_impl_any!(LazySequence<i32>: Clone, PartialEq, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_follows_the_cursor() {
        let mut sequence = LazySequence::finite(vec!['a']);
        assert_eq!(sequence.state(), GeneratorState::Created);

        assert_eq!(sequence.next(), Some('a'));
        assert_eq!(sequence.state(), GeneratorState::Suspended);
        assert_eq!(sequence.produced(), 1);

        assert_eq!(sequence.next(), None);
        assert_eq!(sequence.state(), GeneratorState::Exhausted);
        assert_eq!(sequence.next(), None);
    }

    #[test]
    fn infinite_projection_is_rejected() {
        let sequence = LazySequence::infinite(std::iter::successors(Some(0_u32), |n| Some(n + 1)));
        let error = sequence.into_canonical().unwrap_err();
        assert!(matches!(error, SequenceError::InvalidArgument { .. }));
    }

    #[test]
    fn prefix_pulls_only_what_is_asked() {
        let sequence = LazySequence::infinite(0_u32..);
        assert_eq!(sequence.into_canonical_prefix(3).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn mapping_keeps_the_extent() {
        let mapped = LazySequence::infinite(0_u32..).map_elements(|n| n * 10).unwrap();
        assert!(mapped.is_infinite());
        assert_eq!(mapped.into_canonical_prefix(2).unwrap(), vec![0, 10]);
    }

    #[test]
    fn size_hint_of_infinite_has_no_upper_bound() {
        let sequence = LazySequence::infinite(std::iter::repeat(1));
        assert_eq!(sequence.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn debug_does_not_force_elements() {
        let sequence = LazySequence::finite(vec![1, 2]);
        let rendered = format!("{sequence:?}");
        assert!(rendered.contains("Finite"));
        assert!(rendered.contains("Created"));
    }
}
