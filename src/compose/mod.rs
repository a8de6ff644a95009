//! Composition, partial application and currying macros.
//!
//! - [`compose!`]: right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`pipe!`]: left-to-right composition, or a value threaded through a
//!   chain with `pipe!(x => f, g)`
//! - [`partial!`]: fixes arguments of a two- or three-argument function,
//!   with `__` marking the open positions
//! - [`curry2!`], [`curry3!`], [`curry4!`]: fixed-arity currying
//! - [`curry3_1_2!`]: one argument, then the remaining two
//!
//! The two-function building blocks these expand to live in
//! [`combinator::function`](crate::combinator::function).
//!
//! # Laws
//!
//! ```text
//! compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)
//! compose!(identity, f) == f == compose!(f, identity)
//! pipe!(f, g, h) == compose!(h, g, f)
//! partial!(f, a, __, __)(b, c) == curry3!(f)(a)(b)(c) == f(a, b, c)
//! curry3_1_2!(f)(a)(b, c) == f(a, b, c)
//! ```
//!
//! # Examples
//!
//! ```
//! use fprelude::{compose, curry3, partial, pipe};
//!
//! fn f(a: i32, b: i32, c: i32) -> i32 {
//!     a * 100 + b * 10 + c
//! }
//!
//! assert_eq!(partial!(f, 1, __, __)(2, 3), 123);
//! assert_eq!(curry3!(f)(1)(2)(3), 123);
//!
//! let digits = |n: i32| n.to_string().len();
//! let squared = |n: i32| n * n;
//! assert_eq!(compose!(digits, squared)(123), pipe!(squared, digits)(123));
//! ```

mod compose_macro;
mod curry_macro;
mod partial_macro;
mod pipe_macro;

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry3_1_2;
pub use crate::curry4;
pub use crate::partial;
pub use crate::pipe;
