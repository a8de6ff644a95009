//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>`
//! directly. [`TypeConstructor`] names the element type (`Inner`) and the
//! same constructor applied to another element type (`WithType<B>`), which
//! is enough to state [`Functor`](super::Functor), [`Monad`](super::Monad)
//! and [`Foldable`](super::Foldable) once for every container.
//!
//! # Examples
//!
//! ```rust
//! use fprelude::prelude::*;
//!
//! fn relabel<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Optional<String> = relabel(Optional::Present(3));
//! assert_eq!(none, Optional::Absent);
//! ```

/// A type constructor applied to one element type.
pub trait TypeConstructor {
    /// The element type.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Collection, Optional};

    fn assert_inner<T: TypeConstructor<Inner = I>, I>() {}

    #[test]
    fn inner_types() {
        assert_inner::<Vec<u8>, u8>();
        assert_inner::<Optional<String>, String>();
        assert_inner::<Collection<char>, char>();
    }

    #[test]
    fn with_type_keeps_the_constructor() {
        fn rewrap<T: TypeConstructor>() -> Option<T::WithType<bool>> {
            None
        }
        let _: Option<Optional<bool>> = rewrap::<Optional<i32>>();
        let _: Option<Vec<bool>> = rewrap::<Vec<i32>>();
    }
}
