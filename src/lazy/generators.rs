//! Lazy sequence generators.
//!
//! Each generator is a small iterator with its own cursor, wrapped in a
//! [`LazySequence`] that records whether it ends. A fresh call always starts
//! a fresh stream.

use super::LazySequence;
use crate::error::{Result, SequenceError};
use crate::sequence::SequenceLike;

struct Repeat<T> {
    value: T,
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.value.clone())
    }
}

struct Cycle<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T: Clone> Iterator for Cycle<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.cursor).cloned()?;
        self.cursor = (self.cursor + 1) % self.items.len();
        Some(item)
    }
}

struct Iterate<T, F> {
    seed: Option<T>,
    previous: Option<T>,
    function: F,
}

impl<T: Clone, F: FnMut(T) -> T> Iterator for Iterate<T, F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = match self.seed.take() {
            Some(seed) => seed,
            None => (self.function)(self.previous.take()?),
        };
        self.previous = Some(value.clone());
        Some(value)
    }
}

struct Times<F> {
    function: F,
    remaining: usize,
}

impl<T, F: FnMut() -> T> Iterator for Times<F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some((self.function)())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

struct Replicate<T> {
    value: T,
    remaining: usize,
}

impl<T: Clone> Iterator for Replicate<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Yields `value` forever.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// assert_eq!(take(3, repeat("ha")).unwrap(), vec!["ha", "ha", "ha"]);
/// ```
pub fn repeat<T: Clone + 'static>(value: T) -> LazySequence<T> {
    LazySequence::infinite(Repeat { value })
}

/// Repeats the elements of `sequence` from its start, forever.
///
/// The input is projected once; only a bounded sequence can be cycled.
///
/// # Errors
///
/// Returns [`SequenceError::EmptySequence`] when `sequence` has no elements,
/// and propagates projection errors (an infinite input cannot be cycled).
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// let letters = cycle("ab").unwrap();
/// assert_eq!(take(5, letters).unwrap(), vec!['a', 'b', 'a', 'b', 'a']);
///
/// assert!(cycle(Vec::<i32>::new()).is_err());
/// ```
pub fn cycle<S>(sequence: S) -> Result<LazySequence<S::Item>>
where
    S: SequenceLike,
    S::Item: Clone + 'static,
{
    let items = sequence.into_canonical()?;
    if items.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("refused to cycle an empty sequence");
        return Err(SequenceError::EmptySequence { operation: "cycle" });
    }
    Ok(LazySequence::infinite(Cycle { items, cursor: 0 }))
}

/// Yields `seed`, `function(seed)`, `function(function(seed))`, and so on.
///
/// Each element is computed from the previous one only when it is pulled.
pub fn iterate<T, F>(function: F, seed: T) -> LazySequence<T>
where
    T: Clone + 'static,
    F: FnMut(T) -> T + 'static,
{
    LazySequence::infinite(Iterate {
        seed: Some(seed),
        previous: None,
        function,
    })
}

/// Yields the result of calling `function` exactly `count` times.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// let mut next_id = 0;
/// let ids = times(move || { next_id += 1; next_id }, 3);
/// assert_eq!(ids.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn times<T, F>(function: F, count: usize) -> LazySequence<T>
where
    F: FnMut() -> T + 'static,
{
    LazySequence::finite(Times {
        function,
        remaining: count,
    })
}

/// Yields `value` exactly `count` times.
pub fn replicate<T: Clone + 'static>(value: T, count: usize) -> LazySequence<T> {
    LazySequence::finite(Replicate {
        value,
        remaining: count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lazy::GeneratorState;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn cycle_wraps_around() {
        let sequence = cycle(vec![1, 2]).unwrap();
        assert_eq!(sequence.take(5).collect::<Vec<_>>(), vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn cycle_rejects_empty_input() {
        let error = cycle(String::new()).unwrap_err();
        assert_eq!(error, SequenceError::EmptySequence { operation: "cycle" });
    }

    #[test]
    fn cycle_rejects_infinite_input() {
        let error = cycle(repeat(1)).unwrap_err();
        assert!(matches!(error, SequenceError::InvalidArgument { .. }));
    }

    #[test]
    fn iterate_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut sequence = iterate(
            move |n: i32| {
                counter.set(counter.get() + 1);
                n + 1
            },
            10,
        );

        assert_eq!(calls.get(), 0);
        assert_eq!(sequence.next(), Some(10));
        assert_eq!(calls.get(), 0);
        assert_eq!(sequence.next(), Some(11));
        assert_eq!(sequence.next(), Some(12));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    fn replicate_yields_exactly_count(#[case] count: usize) {
        let mut sequence = replicate('z', count);
        assert_eq!(sequence.by_ref().count(), count);
        assert_eq!(sequence.state(), GeneratorState::Exhausted);
    }

    #[test]
    fn times_reports_exact_size() {
        let sequence = times(|| 0_u8, 3);
        assert_eq!(sequence.size_hint(), (3, Some(3)));
    }

    #[test]
    fn fresh_calls_start_fresh_streams() {
        let mut first = repeat(7);
        let _ = first.next();
        let second = repeat(7);
        assert_eq!(first.produced(), 1);
        assert_eq!(second.produced(), 0);
    }
}
