//! Shape-generic sequence combinators.
//!
//! Every function takes its explicit arguments first and the sequence last,
//! projects the sequence to a `Vec` through [`SequenceLike`], runs the
//! algorithm of the same name in [`canonical`], and rebuilds the caller's
//! shape with [`Reshape::rebuild`].
//!
//! Functions that may be handed an infinite [`LazySequence`](crate::lazy::LazySequence)
//! only pull the elements they need (`head`, `null`, `take` with a
//! non-negative count, `zip` next to a finite partner). [`map`] and
//! [`filter`] wrap a lazy input in a new lazy sequence. Every other
//! combinator fails with [`SequenceError::InvalidArgument`] on an infinite
//! input.
//!
//! Closures passed to [`map`] and [`filter`] must be `'static`, since a lazy
//! input keeps them. Move captured values in.
//!
//! # Examples
//!
//! ```rust
//! use fprelude::prelude::*;
//!
//! assert_eq!(reverse("stressed").unwrap(), "desserts");
//! assert_eq!(tail(vec![1, 2, 3]).unwrap(), vec![2, 3]);
//! assert_eq!(drop(-2, vec![1, 2, 3, 4]).unwrap(), vec![3, 4]);
//! assert_eq!(concat(vec!["ab", "cd"]).unwrap(), "abcd");
//! ```

use std::fmt;

use super::canonical;
use crate::error::{Result, SequenceError};
use crate::sequence::{Indexable, Reshape, Retain, SequenceLike, Shape};

/// Applies `function` to each element in order, keeping the shape.
///
/// A lazy input stays lazy and nothing is applied until elements are pulled.
///
/// # Errors
///
/// Propagates projection and reconstruction errors.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// let squares = map(|n: u32| n * n, iterate(|n: u32| n + 1, 1)).unwrap();
/// assert_eq!(take(4, squares).unwrap(), vec![1, 4, 9, 16]);
/// ```
pub fn map<S, B, F>(function: F, sequence: S) -> Result<S::Mapped>
where
    S: Reshape<B>,
    F: FnMut(S::Item) -> B + 'static,
{
    sequence.map_elements(function)
}

/// Keeps the elements satisfying `predicate`, in order, keeping the shape.
///
/// # Errors
///
/// Propagates projection and reconstruction errors.
pub fn filter<S, P>(predicate: P, sequence: S) -> Result<S::Filtered>
where
    S: Retain,
    P: FnMut(&S::Item) -> bool + 'static,
{
    sequence.retain_elements(predicate)
}

/// Left fold: `function(acc, x)` from the first element to the last.
///
/// # Errors
///
/// Propagates projection errors.
pub fn foldl<S, B, F>(function: F, init: B, sequence: S) -> Result<B>
where
    S: SequenceLike,
    F: FnMut(B, S::Item) -> B,
{
    Ok(canonical::foldl(function, init, sequence.into_canonical()?))
}

/// Right fold: `function(x, acc)` from the last element to the first.
///
/// # Errors
///
/// Propagates projection errors.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// let nested = foldr(|c: char, acc: String| format!("{c}({acc})"), String::new(), "abc").unwrap();
/// assert_eq!(nested, "a(b(c()))");
/// ```
pub fn foldr<S, B, F>(function: F, init: B, sequence: S) -> Result<B>
where
    S: SequenceLike,
    F: FnMut(S::Item, B) -> B,
{
    Ok(canonical::foldr(function, init, sequence.into_canonical()?))
}

/// The first element, as a one-element value of the input's shape.
///
/// Pulls a single element from a lazy sequence.
///
/// # Errors
///
/// Returns [`SequenceError::EmptySequence`] on empty input.
pub fn head<S>(sequence: S) -> Result<S::Rebuilt>
where
    S: SequenceLike + Reshape<<S as SequenceLike>::Item>,
{
    S::rebuild(canonical::head(sequence.into_canonical_prefix(1)?)?)
}

/// The last element, as a one-element value of the input's shape.
///
/// # Errors
///
/// Returns [`SequenceError::EmptySequence`] on empty input.
pub fn last<S>(sequence: S) -> Result<S::Rebuilt>
where
    S: SequenceLike + Reshape<<S as SequenceLike>::Item>,
{
    S::rebuild(canonical::last(sequence.into_canonical()?)?)
}

/// Everything but the first element.
///
/// # Errors
///
/// Propagates projection and reconstruction errors.
pub fn tail<S>(sequence: S) -> Result<S::Rebuilt>
where
    S: SequenceLike + Reshape<<S as SequenceLike>::Item>,
{
    S::rebuild(canonical::tail(sequence.into_canonical()?))
}

/// Everything but the last element.
///
/// # Errors
///
/// Propagates projection and reconstruction errors.
pub fn init<S>(sequence: S) -> Result<S::Rebuilt>
where
    S: SequenceLike + Reshape<<S as SequenceLike>::Item>,
{
    S::rebuild(canonical::init(sequence.into_canonical()?))
}

/// The elements in reverse order.
///
/// # Errors
///
/// Propagates projection and reconstruction errors.
pub fn reverse<S>(sequence: S) -> Result<S::Rebuilt>
where
    S: SequenceLike + Reshape<<S as SequenceLike>::Item>,
{
    S::rebuild(canonical::reverse(sequence.into_canonical()?))
}

/// `item` followed by the elements of `sequence`.
///
/// # Errors
///
/// Propagates projection and reconstruction errors.
pub fn prepend<S>(item: S::Item, sequence: S) -> Result<S::Rebuilt>
where
    S: SequenceLike + Reshape<<S as SequenceLike>::Item>,
{
    S::rebuild(canonical::prepend(item, sequence.into_canonical()?))
}

/// The elements of `sequence` followed by `item`.
///
/// # Errors
///
/// Propagates projection and reconstruction errors.
pub fn append<S>(item: S::Item, sequence: S) -> Result<S::Rebuilt>
where
    S: SequenceLike + Reshape<<S as SequenceLike>::Item>,
{
    S::rebuild(canonical::append(item, sequence.into_canonical()?))
}

/// Flattens a sequence of sequences by one level.
///
/// The result takes the shape of the inner sequences.
///
/// # Errors
///
/// Propagates projection and reconstruction errors of the outer and inner
/// sequences.
pub fn concat<O, I>(sequences: O) -> Result<I::Rebuilt>
where
    O: SequenceLike<Item = I>,
    I: SequenceLike + Reshape<<I as SequenceLike>::Item>,
{
    let nested = sequences
        .into_canonical()?
        .into_iter()
        .map(SequenceLike::into_canonical)
        .collect::<Result<Vec<_>>>()?;
    I::rebuild(canonical::concat(nested))
}

/// Whether at least one element satisfies `predicate`.
///
/// # Errors
///
/// Propagates projection errors.
pub fn any<S, P>(predicate: P, sequence: S) -> Result<bool>
where
    S: SequenceLike,
    P: FnMut(&S::Item) -> bool,
{
    Ok(canonical::any(predicate, &sequence.into_canonical()?))
}

/// Whether every element satisfies `predicate`. `true` on empty input.
///
/// # Errors
///
/// Propagates projection errors.
pub fn all<S, P>(predicate: P, sequence: S) -> Result<bool>
where
    S: SequenceLike,
    P: FnMut(&S::Item) -> bool,
{
    Ok(canonical::all(predicate, &sequence.into_canonical()?))
}

/// Whether some element equals `item`.
///
/// # Errors
///
/// Propagates projection errors.
pub fn contains<S>(item: &S::Item, sequence: S) -> Result<bool>
where
    S: SequenceLike,
    S::Item: PartialEq,
{
    Ok(canonical::contains(item, &sequence.into_canonical()?))
}

/// The number of elements.
///
/// # Errors
///
/// Propagates projection errors; an infinite sequence has no count.
pub fn count<S: SequenceLike>(sequence: S) -> Result<usize> {
    Ok(sequence.into_canonical()?.len())
}

/// Alias of [`count`].
///
/// # Errors
///
/// See [`count`].
pub fn length<S: SequenceLike>(sequence: S) -> Result<usize> {
    count(sequence)
}

/// Whether the sequence has no elements. Pulls at most one element.
///
/// # Errors
///
/// Propagates projection errors.
pub fn null<S: SequenceLike>(sequence: S) -> Result<bool> {
    Ok(sequence.into_canonical_prefix(1)?.is_empty())
}

fn reject_negative_on_lazy<S: SequenceLike>(operation: &'static str, count: isize) -> Result<()> {
    if count < 0 && S::SHAPE == Shape::Lazy {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, count, "negative count on a lazy sequence");
        return Err(SequenceError::invalid(
            operation,
            format!("count {count} is negative and a lazy sequence has no known end"),
        ));
    }
    Ok(())
}

/// The first `count` elements; for a negative `count`, everything but the
/// last `|count|`.
///
/// A non-negative count pulls exactly that many elements from a lazy input.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] for a negative count on a lazy
/// sequence.
pub fn take<S>(count: isize, sequence: S) -> Result<S::Rebuilt>
where
    S: SequenceLike + Reshape<<S as SequenceLike>::Item>,
{
    reject_negative_on_lazy::<S>("take", count)?;
    let items = if count >= 0 {
        sequence.into_canonical_prefix(count.unsigned_abs())?
    } else {
        canonical::take(count, sequence.into_canonical()?)
    };
    S::rebuild(items)
}

/// Skips the first `count` elements; for a negative `count`, keeps only the
/// last `|count|`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] for a negative count on a lazy
/// sequence, or for any count on an infinite one.
pub fn drop<S>(count: isize, sequence: S) -> Result<S::Rebuilt>
where
    S: SequenceLike + Reshape<<S as SequenceLike>::Item>,
{
    reject_negative_on_lazy::<S>("drop", count)?;
    S::rebuild(canonical::drop(count, sequence.into_canonical()?))
}

enum Column<S: SequenceLike> {
    Ready(Vec<S::Item>),
    Pending(S),
}

/// Groups the elements at each position of several sequences, truncated to
/// the shortest.
///
/// Infinite inputs are pulled only as far as the shortest finite input.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] when every input is infinite.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// let grouped = zip(vec![vec![1, 2, 3], vec![4, 5]]).unwrap();
/// assert_eq!(grouped, vec![vec![1, 4], vec![2, 5]]);
///
/// let labelled = zip([repeat(0), LazySequence::finite(vec![7, 8])]).unwrap();
/// assert_eq!(labelled, vec![vec![0, 7], vec![0, 8]]);
/// ```
pub fn zip<O, S>(sequences: O) -> Result<Vec<Vec<S::Item>>>
where
    O: IntoIterator<Item = S>,
    S: SequenceLike,
{
    let mut bound: Option<usize> = None;
    let mut columns = Vec::new();
    for sequence in sequences {
        if sequence.is_bounded() {
            let items = sequence.into_canonical()?;
            bound = Some(bound.map_or(items.len(), |shortest| shortest.min(items.len())));
            columns.push(Column::Ready(items));
        } else {
            columns.push(Column::Pending(sequence));
        }
    }

    if columns.is_empty() {
        return Ok(Vec::new());
    }
    let Some(bound) = bound else {
        return Err(SequenceError::invalid(
            "zip",
            "every input is infinite, so the result has no end",
        ));
    };

    let columns = columns
        .into_iter()
        .map(|column| match column {
            Column::Ready(items) => Ok(items),
            Column::Pending(sequence) => sequence.into_canonical_prefix(bound),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(canonical::zip(columns))
}

/// Pairs the elements of two sequences, truncated to the shorter.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] when both inputs are infinite.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// let pairs = zip2(vec![1, 2, 3], "ab").unwrap();
/// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
/// ```
pub fn zip2<A, B>(left: A, right: B) -> Result<Vec<(A::Item, B::Item)>>
where
    A: SequenceLike,
    B: SequenceLike,
{
    let (left, right) = match (left.is_bounded(), right.is_bounded()) {
        (true, _) => {
            let left = left.into_canonical()?;
            let right = right.into_canonical_prefix(left.len())?;
            (left, right)
        }
        (false, true) => {
            let right = right.into_canonical()?;
            let left = left.into_canonical_prefix(right.len())?;
            (left, right)
        }
        (false, false) => {
            return Err(SequenceError::invalid(
                "zip2",
                "both inputs are infinite, so the result has no end",
            ));
        }
    };
    Ok(left.into_iter().zip(right).collect())
}

/// The value stored under `key` in `container`.
///
/// # Errors
///
/// Returns [`SequenceError::IndexOutOfRange`] when the key is absent.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use fprelude::prelude::*;
///
/// let ages = HashMap::from([("ada".to_string(), 36)]);
/// assert_eq!(pick("ada", &ages).unwrap(), 36);
/// assert!(pick("bob", &ages).is_err());
///
/// assert_eq!(pick(&1_usize, "héllo").unwrap(), 'é');
/// ```
pub fn pick<K, C>(key: &K, container: &C) -> Result<C::Value>
where
    K: fmt::Debug + ?Sized,
    C: Indexable<K> + ?Sized,
{
    container
        .lookup(key)
        .ok_or_else(|| SequenceError::out_of_range(key, container.size()))
}

/// [`pick`] applied to every element of `sequence`.
///
/// # Errors
///
/// Returns [`SequenceError::IndexOutOfRange`] for the first element lacking
/// `key`, and propagates projection errors.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// let rows = vec![vec!['a', 'b'], vec!['c', 'd']];
/// assert_eq!(pluck(&1_usize, rows).unwrap(), vec!['b', 'd']);
/// ```
pub fn pluck<K, S>(key: &K, sequence: S) -> Result<Vec<<S::Item as Indexable<K>>::Value>>
where
    K: fmt::Debug + ?Sized,
    S: SequenceLike,
    S::Item: Indexable<K>,
{
    sequence
        .into_canonical()?
        .iter()
        .map(|element| pick(key, element))
        .collect()
}

/// Whether `container` holds a value under `key`.
pub fn exists<K, C>(key: &K, container: &C) -> bool
where
    K: ?Sized,
    C: Indexable<K> + ?Sized,
{
    container.lookup(key).is_some()
}

/// `item` placed at position `index`.
///
/// # Errors
///
/// Returns [`SequenceError::IndexOutOfRange`] when `index` is past the end.
pub fn insert<S>(index: usize, item: S::Item, sequence: S) -> Result<S::Rebuilt>
where
    S: SequenceLike + Reshape<<S as SequenceLike>::Item>,
{
    S::rebuild(canonical::insert(index, item, sequence.into_canonical()?)?)
}

/// The value without the element at position `index`.
///
/// # Errors
///
/// Returns [`SequenceError::IndexOutOfRange`] when no element is at `index`.
pub fn delete<S>(index: usize, sequence: S) -> Result<S::Rebuilt>
where
    S: SequenceLike + Reshape<<S as SequenceLike>::Item>,
{
    S::rebuild(canonical::delete(index, sequence.into_canonical()?)?)
}
