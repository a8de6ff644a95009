//! Point-free combinators.
//!
//! - [`list`]: shape-generic sequence combinators (`map`, `filter`, folds,
//!   `take`/`drop`, `zip`, `pick`/`pluck`, ...)
//! - [`function`]: combinators over functions (`identity`, `flip`,
//!   `compose`, `pipe`, ...)
//! - [`canonical`]: the same sequence algorithms over `Vec<T>`, which every
//!   shape-generic combinator delegates to
//!
//! `list` and `function` are re-exported here and from the prelude.
//! `canonical` is kept behind its module path since its names overlap.

pub mod canonical;
pub mod function;
pub mod list;

pub use function::*;
pub use list::*;
