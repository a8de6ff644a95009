//! Reference implementations of the type classes.
//!
//! - [`Optional`]: zero or one value; `Functor` through `Comonad`, `Monoid`
//!   and `Foldable`
//! - [`Collection`]: an ordered sequence; `Functor` through `Monad`,
//!   `Monoid`, `Foldable` and the sequence adapter traits
//!
//! The two types share no base type. Each satisfies the laws on its own.

mod collection;
mod optional;

pub use collection::Collection;
pub use optional::Optional;

use crate::sequence::{Indexable, Reshape, Retain, SequenceLike};
use crate::typeclass::{Comonad, Foldable, Monad, Monoid};

static_assertions::assert_impl_all!(Optional<i32>: Monad, Comonad, Foldable, Copy);
static_assertions::assert_impl_all!(Optional<String>: Monoid, Default);
static_assertions::assert_impl_all!(Collection<i32>: Monad, Monoid, Foldable, Retain);
static_assertions::assert_impl_all!(Collection<char>: SequenceLike, Reshape<u8>, Indexable<usize>);
static_assertions::assert_not_impl_any!(Collection<i32>: Comonad);
