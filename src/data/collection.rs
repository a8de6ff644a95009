//! An immutable ordered collection.

use std::fmt;
use std::str::FromStr;

use crate::combinator::canonical;
use crate::error::{Result, SequenceError};
use crate::sequence::{Indexable, Reshape, Retain, SequenceLike, Shape};
use crate::typeclass::{
    Applicative, Foldable, Functor, Monad, Monoid, Semigroup, TypeConstructor,
};

/// An ordered collection backed by a `Vec`.
///
/// Every operation consumes the collection and returns a new one.
/// `map`, `bind` and `apply` go through [`canonical::map`], and
/// [`Foldable::fold`] is the generic `fold_map(identity)`.
///
/// # Examples
///
/// ```rust
/// use fprelude::prelude::*;
///
/// let pairs = Collection::of(vec![1, 2]).bind(|n| Collection::of(vec![n, n * 10]));
/// assert_eq!(pairs.to_string(), "[1, 10, 2, 20]");
///
/// let words: Collection<String> = "[ab, cd]".parse().unwrap();
/// assert_eq!(words.fold(), "abcd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    /// Creates an empty collection.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Wraps `items` without copying.
    #[inline]
    #[must_use]
    pub const fn of(items: Vec<T>) -> Self {
        Self { items }
    }

    /// The number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterates over the elements by reference.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwraps the backing `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::of(items)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// Parses `[a, b, c]`. Elements are split on commas and trimmed, so an
/// element's own text must not contain a comma.
impl<T> FromStr for Collection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = SequenceError;

    fn from_str(text: &str) -> Result<Self> {
        let body = text
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| {
                SequenceError::invalid("parse", format!("expected [..], got {text:?}"))
            })?;

        if body.trim().is_empty() {
            return Ok(Self::new());
        }

        body.split(',')
            .map(|part| {
                let part = part.trim();
                part.parse().map_err(|error| {
                    SequenceError::invalid("parse", format!("cannot parse {part:?}: {error}"))
                })
            })
            .collect()
    }
}

// =============================================================================
// Sequence Adapter Implementations
// =============================================================================

impl<T> SequenceLike for Collection<T> {
    type Item = T;
    const SHAPE: Shape = Shape::Ordered;

    fn into_canonical(self) -> Result<Vec<T>> {
        Ok(self.items)
    }
}

impl<A, B> Reshape<B> for Collection<A> {
    type Rebuilt = Collection<B>;
    type Mapped = Collection<B>;

    fn rebuild(items: Vec<B>) -> Result<Collection<B>> {
        Ok(Collection::of(items))
    }

    fn map_elements<F>(self, function: F) -> Result<Collection<B>>
    where
        F: FnMut(A) -> B + 'static,
    {
        Ok(Functor::map(self, function))
    }
}

impl<T> Retain for Collection<T> {
    type Filtered = Self;

    fn retain_elements<P>(self, predicate: P) -> Result<Self>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Ok(Self::of(canonical::filter(predicate, self.items)))
    }
}

impl<T: Clone> Indexable<usize> for Collection<T> {
    type Value = T;

    fn lookup(&self, key: &usize) -> Option<T> {
        self.items.get(*key).cloned()
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Collection<T> {
    type Inner = T;
    type WithType<B> = Collection<B>;
}

impl<T> Functor for Collection<T> {
    fn map<B, F>(self, function: F) -> Collection<B>
    where
        F: FnMut(T) -> B,
    {
        Collection::of(canonical::map(function, self.items))
    }

    #[inline]
    fn pure<B>(value: B) -> Collection<B> {
        Collection::of(vec![value])
    }
}

impl<T> Applicative for Collection<T> {
    fn apply<A, B>(self, values: Collection<A>) -> Collection<B>
    where
        T: FnMut(A) -> B,
        A: Clone,
    {
        let rows = canonical::map(
            |mut function| canonical::map(|value| function(value), values.items.clone()),
            self.items,
        );
        Collection::of(canonical::concat(rows))
    }
}

impl<T> Monad for Collection<T> {
    fn bind<B, F>(self, mut function: F) -> Collection<B>
    where
        F: FnMut(T) -> Collection<B>,
    {
        let nested = canonical::map(|element| function(element).items, self.items);
        Collection::of(canonical::concat(nested))
    }
}

impl<T> Semigroup for Collection<T> {
    fn append(self, other: Self) -> Self {
        Self::of(Semigroup::append(self.items, other.items))
    }
}

impl<T> Monoid for Collection<T> {
    fn empty_value() -> Self {
        Self::new()
    }
}

impl<T> Foldable for Collection<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        canonical::foldl(function, init, self.items)
    }

    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        canonical::foldr(function, init, self.items)
    }

    /// Maps every element, then concatenates the results with
    /// [`Monoid::concat`].
    fn fold_map<M, F>(self, function: F) -> M
    where
        M: Monoid,
        F: FnMut(T) -> M,
    {
        M::concat(canonical::map(function, self.items))
    }

    #[inline]
    fn null(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn to_array(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Max, Product};
    use rstest::rstest;

    #[test]
    fn apply_is_function_major() {
        fn increment(n: i32) -> i32 {
            n + 1
        }
        fn hundredfold(n: i32) -> i32 {
            n * 100
        }
        let functions = Collection::of(vec![increment as fn(i32) -> i32, hundredfold]);
        let applied = functions.apply(Collection::of(vec![1, 2, 3]));
        assert_eq!(applied.into_vec(), vec![2, 3, 4, 100, 200, 300]);
    }

    #[test]
    fn bind_flattens_one_level() {
        let spread = Collection::of(vec![1, 3]).bind(|n| Collection::of(vec![n; 2]));
        assert_eq!(spread.into_vec(), vec![1, 1, 3, 3]);
    }

    #[test]
    fn fold_uses_the_element_monoid() {
        let nested = Collection::of(vec![vec![1], vec![], vec![2, 3]]);
        assert_eq!(nested.fold(), vec![1, 2, 3]);
    }

    #[test]
    fn fold_map_through_wrappers() {
        let values = Collection::of(vec![3_u32, 9, 4]);
        assert_eq!(values.clone().fold_map(Max).into_inner(), 9);
        assert_eq!(values.fold_map(Product).into_inner(), 108);
    }

    #[rstest]
    #[case("[]", vec![])]
    #[case("[ 7 ]", vec![7])]
    #[case("[1, 2,3]", vec![1, 2, 3])]
    fn parses_bracketed_lists(#[case] text: &str, #[case] expected: Vec<i32>) {
        let parsed: Collection<i32> = text.parse().unwrap();
        assert_eq!(parsed.into_vec(), expected);
    }

    #[rstest]
    #[case("1, 2")]
    #[case("[1, two]")]
    #[case("[1,, 2]")]
    fn rejects_malformed_lists(#[case] text: &str) {
        let error = text.parse::<Collection<i32>>().unwrap_err();
        assert!(matches!(
            error,
            SequenceError::InvalidArgument {
                operation: "parse",
                ..
            }
        ));
    }

    #[test]
    fn display_and_parse_agree() {
        let values = Collection::of(vec![-1, 0, 12]);
        let text = values.to_string();
        assert_eq!(text, "[-1, 0, 12]");
        assert_eq!(text.parse::<Collection<i32>>().unwrap(), values);
    }

    #[test]
    fn indexable_by_position() {
        let letters: Collection<char> = "abc".chars().collect();
        assert_eq!(letters.lookup(&2), Some('c'));
        assert_eq!(letters.lookup(&3), None);
        assert_eq!(letters.size(), 3);
    }

    #[test]
    fn reshape_keeps_the_collection() {
        let rebuilt = <Collection<i32> as Reshape<String>>::rebuild(vec![String::from("a")]);
        assert_eq!(rebuilt.unwrap(), Collection::of(vec![String::from("a")]));
    }
}
