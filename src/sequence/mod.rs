//! The sequence adapter.
//!
//! Every combinator in this crate accepts "any sequence-like value". This
//! module defines what that means: a value that can be projected to the
//! canonical ordered container (`Vec<T>`) and rebuilt into its original shape
//! from a new canonical container.
//!
//! The recognized shapes form a closed set, tagged by [`Shape`]:
//!
//! | shape | types | projection | rebuild |
//! |---|---|---|---|
//! | [`Shape::Ordered`] | `Vec<T>`, `&[T]`, `Collection<T>` | identity | same collection (`&[T]` gives `Vec<T>`) |
//! | [`Shape::Text`] | `String`, `&str` | `char`s in order | concatenation into a `String` |
//! | [`Shape::Lazy`] | [`LazySequence<T>`](crate::lazy::LazySequence) | pulled on demand | canonical `Vec<T>` |
//! | [`Shape::Custom`] | [`Convertible<C>`] for `C: ArrayConvertible` | `into_array` | `from_array` |
//!
//! The shape witness used for reconstruction is the static type of the
//! input: `S::rebuild(items)` produces `S::Rebuilt`.
//!
//! # Laws
//!
//! ## Round trip
//!
//! For every finite `value: S` where `S: SequenceLike + Reshape<<S as SequenceLike>::Item, Rebuilt = S>`:
//!
//! ```text
//! S::rebuild(value.clone().into_canonical()?) == value
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fprelude::sequence::{Reshape, SequenceLike, Shape, shape_of};
//!
//! let text = String::from("héllo");
//! assert_eq!(shape_of(&text), Shape::Text);
//!
//! let characters = text.clone().into_canonical().unwrap();
//! assert_eq!(characters, vec!['h', 'é', 'l', 'l', 'o']);
//! assert_eq!(<String as Reshape<char>>::rebuild(characters).unwrap(), text);
//! ```

mod convertible;
mod text;

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::combinator::canonical;
use crate::error::Result;

pub use convertible::{ArrayConvertible, Convertible};
pub use text::{chars, lines, unchars, unlines, unwords, words};

/// The closed set of sequence shapes the adapter recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// An ordered, integer-indexed collection.
    Ordered,
    /// Text, viewed as a sequence of characters.
    Text,
    /// A lazily produced, possibly infinite sequence.
    Lazy,
    /// A user type with a two-way array conversion.
    Custom,
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ordered => "ordered",
            Self::Text => "text",
            Self::Lazy => "lazy",
            Self::Custom => "custom",
        };
        formatter.write_str(name)
    }
}

/// A value that can be projected to the canonical ordered container.
pub trait SequenceLike: Sized {
    /// The element type of the canonical container.
    type Item;

    /// The shape tag of this type.
    const SHAPE: Shape;

    /// Returns `false` when the value has no known end.
    ///
    /// Only lazy sequences can be unbounded.
    fn is_bounded(&self) -> bool {
        true
    }

    /// Projects the whole value to the canonical container.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`](crate::SequenceError::InvalidArgument)
    /// when the value is unbounded.
    fn into_canonical(self) -> Result<Vec<Self::Item>>;

    /// Projects at most `length` leading elements.
    ///
    /// Lazy sequences override this to pull exactly the elements requested,
    /// which makes it the only projection that is safe on an infinite input.
    ///
    /// # Errors
    ///
    /// Propagates projection errors of the underlying value.
    fn into_canonical_prefix(self, length: usize) -> Result<Vec<Self::Item>> {
        let mut items = self.into_canonical()?;
        items.truncate(length);
        Ok(items)
    }
}

/// Reconstruction of a shape from canonical elements of type `B`.
pub trait Reshape<B>: SequenceLike {
    /// The value produced when a combinator rebuilds this shape.
    type Rebuilt;

    /// The value produced by an element-wise transform of this shape.
    type Mapped;

    /// Rebuilds this shape from canonical elements.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::UnsupportedShape`](crate::SequenceError::UnsupportedShape)
    /// when the elements cannot form a value of this shape.
    fn rebuild(items: Vec<B>) -> Result<Self::Rebuilt>;

    /// Applies `function` to every element, keeping the shape.
    ///
    /// # Errors
    ///
    /// Propagates projection and reconstruction errors.
    fn map_elements<F>(self, function: F) -> Result<Self::Mapped>
    where
        F: FnMut(Self::Item) -> B + 'static;
}

/// Element selection that keeps the shape.
pub trait Retain: SequenceLike {
    /// The value produced by filtering this shape.
    type Filtered;

    /// Keeps the elements satisfying `predicate`, in order.
    ///
    /// # Errors
    ///
    /// Propagates projection and reconstruction errors.
    fn retain_elements<P>(self, predicate: P) -> Result<Self::Filtered>
    where
        P: FnMut(&Self::Item) -> bool + 'static;
}

/// Index or key access on a container.
///
/// Used by [`pick`](crate::combinator::pick), [`pluck`](crate::combinator::pluck)
/// and [`exists`](crate::combinator::exists).
pub trait Indexable<K: ?Sized> {
    /// The value stored under a key.
    type Value;

    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &K) -> Option<Self::Value>;

    /// Returns the number of entries.
    fn size(&self) -> usize;
}

/// Returns the shape tag of a value.
///
/// # Examples
///
/// ```rust
/// use fprelude::sequence::{Shape, shape_of};
///
/// assert_eq!(shape_of(&vec![1, 2]), Shape::Ordered);
/// assert_eq!(shape_of(&"text"), Shape::Text);
/// ```
pub const fn shape_of<S: SequenceLike>(_value: &S) -> Shape {
    S::SHAPE
}

/// Projects a value to the canonical container.
///
/// # Errors
///
/// See [`SequenceLike::into_canonical`].
pub fn to_canonical<S: SequenceLike>(value: S) -> Result<Vec<S::Item>> {
    value.into_canonical()
}

/// Rebuilds the shape `S` from a canonical container.
///
/// # Errors
///
/// See [`Reshape::rebuild`].
///
/// # Examples
///
/// ```rust
/// use fprelude::sequence::from_canonical;
///
/// let text = from_canonical::<String, _>(vec!['o', 'k']).unwrap();
/// assert_eq!(text, "ok");
/// ```
pub fn from_canonical<S, B>(items: Vec<B>) -> Result<S::Rebuilt>
where
    S: Reshape<B>,
{
    S::rebuild(items)
}

// =============================================================================
// Ordered: Vec<T>
// =============================================================================

impl<T> SequenceLike for Vec<T> {
    type Item = T;
    const SHAPE: Shape = Shape::Ordered;

    fn into_canonical(self) -> Result<Self> {
        Ok(self)
    }
}

impl<A, B> Reshape<B> for Vec<A> {
    type Rebuilt = Vec<B>;
    type Mapped = Vec<B>;

    fn rebuild(items: Vec<B>) -> Result<Vec<B>> {
        Ok(items)
    }

    fn map_elements<F>(self, function: F) -> Result<Vec<B>>
    where
        F: FnMut(A) -> B + 'static,
    {
        Ok(canonical::map(function, self))
    }
}

impl<T> Retain for Vec<T> {
    type Filtered = Self;

    fn retain_elements<P>(self, predicate: P) -> Result<Self>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Ok(canonical::filter(predicate, self))
    }
}

// =============================================================================
// Ordered: &[T]
// =============================================================================

impl<T: Clone> SequenceLike for &[T] {
    type Item = T;
    const SHAPE: Shape = Shape::Ordered;

    fn into_canonical(self) -> Result<Vec<T>> {
        Ok(self.to_vec())
    }

    fn into_canonical_prefix(self, length: usize) -> Result<Vec<T>> {
        Ok(self.iter().take(length).cloned().collect())
    }
}

impl<A: Clone, B> Reshape<B> for &[A] {
    type Rebuilt = Vec<B>;
    type Mapped = Vec<B>;

    fn rebuild(items: Vec<B>) -> Result<Vec<B>> {
        Ok(items)
    }

    fn map_elements<F>(self, function: F) -> Result<Vec<B>>
    where
        F: FnMut(A) -> B + 'static,
    {
        Ok(canonical::map(function, self.to_vec()))
    }
}

impl<T: Clone> Retain for &[T] {
    type Filtered = Vec<T>;

    fn retain_elements<P>(self, mut predicate: P) -> Result<Vec<T>>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Ok(self.iter().filter(|item| predicate(item)).cloned().collect())
    }
}

// =============================================================================
// Indexable implementations
// =============================================================================

impl<T: Clone> Indexable<usize> for Vec<T> {
    type Value = T;

    fn lookup(&self, key: &usize) -> Option<T> {
        self.get(*key).cloned()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: Clone> Indexable<usize> for [T] {
    type Value = T;

    fn lookup(&self, key: &usize) -> Option<T> {
        self.get(*key).cloned()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: Clone, const N: usize> Indexable<usize> for [T; N] {
    type Value = T;

    fn lookup(&self, key: &usize) -> Option<T> {
        self.get(*key).cloned()
    }

    fn size(&self) -> usize {
        N
    }
}

impl<K, Q, V, S> Indexable<Q> for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    V: Clone,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<V> {
        self.get(key).cloned()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, Q, V> Indexable<Q> for BTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
    V: Clone,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<V> {
        self.get(key).cloned()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K: ?Sized, I: Indexable<K> + ?Sized> Indexable<K> for &I {
    type Value = I::Value;

    fn lookup(&self, key: &K) -> Option<I::Value> {
        (**self).lookup(key)
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}
