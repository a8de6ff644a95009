//! The combinators over the canonical container.
//!
//! The shape-generic combinators in [`list`](super::list) project their input
//! to a `Vec`, call the function of the same name here, and rebuild the
//! caller's shape from the result. [`Collection`](crate::data::Collection)
//! calls these directly.
//!
//! Functions here never fail except where a position is out of range.

use crate::error::{Result, SequenceError};

/// Applies `function` to every element, in order.
pub fn map<A, B, F>(function: F, items: Vec<A>) -> Vec<B>
where
    F: FnMut(A) -> B,
{
    items.into_iter().map(function).collect()
}

/// Keeps the elements satisfying `predicate`, in order.
pub fn filter<T, P>(mut predicate: P, mut items: Vec<T>) -> Vec<T>
where
    P: FnMut(&T) -> bool,
{
    items.retain(|item| predicate(item));
    items
}

/// Left fold: `function(function(init, x0), x1)...`.
pub fn foldl<T, B, F>(function: F, init: B, items: Vec<T>) -> B
where
    F: FnMut(B, T) -> B,
{
    items.into_iter().fold(init, function)
}

/// Right fold: `function(x0, function(x1, ... function(xn, init)))`.
///
/// The accumulator threads from the last element to the first.
pub fn foldr<T, B, F>(mut function: F, init: B, items: Vec<T>) -> B
where
    F: FnMut(T, B) -> B,
{
    items
        .into_iter()
        .rev()
        .fold(init, |accumulator, item| function(item, accumulator))
}

/// The first element as a one-element container.
///
/// # Errors
///
/// Returns [`SequenceError::EmptySequence`] when `items` is empty.
pub fn head<T>(items: Vec<T>) -> Result<Vec<T>> {
    let first = items
        .into_iter()
        .next()
        .ok_or(SequenceError::EmptySequence { operation: "head" })?;
    Ok(vec![first])
}

/// The last element as a one-element container.
///
/// # Errors
///
/// Returns [`SequenceError::EmptySequence`] when `items` is empty.
pub fn last<T>(mut items: Vec<T>) -> Result<Vec<T>> {
    let final_item = items
        .pop()
        .ok_or(SequenceError::EmptySequence { operation: "last" })?;
    Ok(vec![final_item])
}

/// Everything but the first element. Empty stays empty.
pub fn tail<T>(items: Vec<T>) -> Vec<T> {
    items.into_iter().skip(1).collect()
}

/// Everything but the last element. Empty stays empty.
pub fn init<T>(mut items: Vec<T>) -> Vec<T> {
    items.pop();
    items
}

/// `item` followed by `items`.
pub fn prepend<T>(item: T, mut items: Vec<T>) -> Vec<T> {
    items.insert(0, item);
    items
}

/// `items` followed by `item`.
pub fn append<T>(item: T, mut items: Vec<T>) -> Vec<T> {
    items.push(item);
    items
}

/// The elements in reverse order, built by folding [`prepend`].
pub fn reverse<T>(items: Vec<T>) -> Vec<T> {
    let capacity = items.len();
    foldl(
        |reversed, item| prepend(item, reversed),
        Vec::with_capacity(capacity),
        items,
    )
}

/// Flattens one level of nesting.
pub fn concat<T>(nested: Vec<Vec<T>>) -> Vec<T> {
    nested.into_iter().flatten().collect()
}

/// Whether at least one element satisfies `predicate`.
pub fn any<T, P>(predicate: P, items: &[T]) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().any(predicate)
}

/// Whether every element satisfies `predicate`. `true` on empty input.
pub fn all<T, P>(predicate: P, items: &[T]) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().all(predicate)
}

/// Whether some element equals `item`.
pub fn contains<T: PartialEq>(item: &T, items: &[T]) -> bool {
    items.contains(item)
}

/// Splits a signed count into the number of leading elements to keep.
const fn leading(count: isize, length: usize) -> usize {
    let magnitude = count.unsigned_abs();
    if count >= 0 {
        if magnitude < length { magnitude } else { length }
    } else {
        length.saturating_sub(magnitude)
    }
}

/// The first `count` elements, or for a negative `count` everything but the
/// last `|count|`.
pub fn take<T>(count: isize, mut items: Vec<T>) -> Vec<T> {
    let keep = leading(count, items.len());
    items.truncate(keep);
    items
}

/// Skips the first `count` elements, or for a negative `count` keeps only the
/// last `|count|`.
///
/// `take(n, xs)` followed by `drop(n, xs)` always reassembles `xs`.
pub fn drop<T>(count: isize, mut items: Vec<T>) -> Vec<T> {
    let skip = leading(count, items.len());
    items.drain(..skip);
    items
}

/// Per-position groups of two or more containers, truncated to the shortest.
pub fn zip<T>(columns: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let rows = columns.iter().map(Vec::len).min().unwrap_or(0);
    let mut sources: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
    (0..rows)
        .map(|_| sources.iter_mut().filter_map(Iterator::next).collect())
        .collect()
}

/// `item` placed at `index`, shifting later elements right.
///
/// # Errors
///
/// Returns [`SequenceError::IndexOutOfRange`] when `index > items.len()`.
pub fn insert<T>(index: usize, item: T, mut items: Vec<T>) -> Result<Vec<T>> {
    if index > items.len() {
        return Err(SequenceError::out_of_range(&index, items.len()));
    }
    items.insert(index, item);
    Ok(items)
}

/// `items` without the element at `index`.
///
/// # Errors
///
/// Returns [`SequenceError::IndexOutOfRange`] when `index >= items.len()`.
pub fn delete<T>(index: usize, mut items: Vec<T>) -> Result<Vec<T>> {
    if index >= items.len() {
        return Err(SequenceError::out_of_range(&index, items.len()));
    }
    items.remove(index);
    Ok(items)
}
