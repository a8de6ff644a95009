//! Type class traits for the prelude.
//!
//! - [`Setoid`] and [`Ordered`]: equality and total ordering
//! - [`Show`] and [`Read`]: rendering to and parsing from text
//! - [`Enum`] and [`Bounded`]: stepping through and bounding a type
//! - [`Semigroup`] and [`Monoid`]: associative append with an identity
//! - [`Functor`], [`Applicative`], [`Monad`]: mapping, applying and chaining
//! - [`Comonad`]: extracting from and extending over a context
//! - [`Foldable`]: reducing a structure to a summary value
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types. [`TypeConstructor`] uses a generic
//! associated type to name "the same container with another element type",
//! which is what `Functor` and its subclasses need.
//!
//! # Examples
//!
//! ```rust
//! use fprelude::prelude::*;
//!
//! let greeting = Semigroup::append(String::from("point"), String::from("free"));
//! assert_eq!(greeting, "pointfree");
//!
//! let total = Sum::concat(vec![Sum(1), Sum(2), Sum(3)]);
//! assert_eq!(total, Sum(6));
//!
//! let chained = Optional::Present(4).bind(|n| Optional::Present(n + 1));
//! assert_eq!(chained.extract(), Ok(5));
//! ```

mod applicative;
mod comonad;
mod enumerable;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod setoid;
mod show;
mod wrappers;

pub use applicative::Applicative;
pub use comonad::Comonad;
pub use enumerable::{Bounded, Enum};
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use setoid::{Ordered, Setoid};
pub use show::{Read, Show};
pub use wrappers::{Max, Min, Product, Sum};
