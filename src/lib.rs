//! # fprelude
//!
//! A point-free functional prelude for Rust.
//!
//! ## Overview
//!
//! - **Sequence Adapter**: one abstraction over ordered collections, text,
//!   lazy sequences and user types convertible to arrays
//! - **Combinators**: map, filter, folds, take/drop, zip, pick/pluck, flip,
//!   partial application and currying
//! - **Lazy Sequences**: pull-based generators (`repeat`, `cycle`, `iterate`,
//!   `times`, `replicate`)
//! - **Type Classes**: Eq, Ord, Show, Read, Enum, Bounded, Monoid, Functor,
//!   Applicative, Monad, Comonad, Foldable
//! - **Reference Types**: [`Optional`](data::Optional) and
//!   [`Collection`](data::Collection)
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the reference types in [`data`]
//! - `compose`: `compose!`, `pipe!`, `partial!`, `curry2!`..`curry4!`, `curry3_1_2!`
//! - `tracing`: Structured logging of rejected operations
//! - `serde`: Serialization for the reference types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fprelude::prelude::*;
//!
//! let doubled = map(|x: i32| x * 2, vec![1, 2, 3]).unwrap();
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let shouted = map(|c: char| c.to_ascii_uppercase(), "abc").unwrap();
//! assert_eq!(shouted, "ABC");
//!
//! let cycled = take(5, cycle(vec![1, 2]).unwrap()).unwrap();
//! assert_eq!(cycled, vec![1, 2, 1, 2, 1]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use fprelude::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::error::{Result, SequenceError};
    pub use crate::lazy::*;
    pub use crate::sequence::*;

    #[cfg(feature = "typeclass")]
    pub use crate::data::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod combinator;
pub mod error;
pub mod lazy;
pub mod sequence;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "typeclass")]
pub mod data;

#[cfg(feature = "compose")]
pub mod compose;

pub use error::{Result, SequenceError};
