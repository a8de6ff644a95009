//! Property-based tests for the type class laws of `Collection`.
//!
//! The fold agreement property is the important one here: folding through
//! `fold_map(identity)` must equal a plain left fold with `append` from
//! `empty_value`.

#![cfg(feature = "typeclass")]

use fprelude::combinator::foldl;
use fprelude::data::Collection;
use fprelude::typeclass::{
    Applicative, Foldable, Functor, Max, Monad, Monoid, Product, Semigroup, Sum,
};
use proptest::prelude::*;

fn collection<S: Strategy>(values: S) -> impl Strategy<Value = Collection<S::Value>> {
    prop::collection::vec(values, 0..12).prop_map(Collection::of)
}

fn neighbours(n: i32) -> Collection<i32> {
    Collection::of(vec![n.wrapping_sub(1), n.wrapping_add(1)])
}

fn halves(n: i32) -> Collection<i32> {
    if n % 2 == 0 {
        Collection::of(vec![n / 2])
    } else {
        Collection::new()
    }
}

// =============================================================================
// Functor and Monad
// =============================================================================

proptest! {
    /// Identity Law for map.
    #[test]
    fn prop_functor_identity(values in collection(any::<i32>())) {
        prop_assert_eq!(values.clone().map(|x| x), values);
    }

    /// Composition Law for map.
    #[test]
    fn prop_functor_composition(values in collection(any::<i32>())) {
        let first = |n: i32| n.wrapping_mul(2);
        let second = |n: i32| n.to_string();
        prop_assert_eq!(
            values.clone().map(first).map(second),
            values.map(|x| second(first(x)))
        );
    }

    /// Left Identity Law: `pure(a).bind(f) == f(a)`.
    #[test]
    fn prop_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Collection::<i32>::pure(value).bind(neighbours), neighbours(value));
    }

    /// Right Identity Law: `m.bind(pure) == m`.
    #[test]
    fn prop_monad_right_identity(values in collection(any::<i32>())) {
        prop_assert_eq!(values.clone().bind(Collection::<i32>::pure), values);
    }

    /// Associativity Law for bind.
    #[test]
    fn prop_monad_associativity(values in collection(any::<i32>())) {
        let left = values.clone().bind(neighbours).bind(halves);
        let right = values.bind(|x| neighbours(x).bind(halves));
        prop_assert_eq!(left, right);
    }

    /// Applying one function is the same as mapping it.
    #[test]
    fn prop_apply_with_one_function_is_map(values in collection(any::<i32>())) {
        let increment = |n: i32| n.wrapping_add(1);
        let applied = Collection::<i32>::pure(increment).apply(values.clone());
        prop_assert_eq!(applied, values.map(increment));
    }

    /// Function-major application yields one row per function.
    #[test]
    fn prop_apply_length_is_the_product(values in collection(any::<i32>())) {
        let functions: Vec<fn(i32) -> i32> = vec![i32::wrapping_neg, i32::signum, i32::wrapping_abs];
        let applied = Collection::of(functions).apply(values.clone());
        prop_assert_eq!(applied.len(), 3 * values.len());
    }
}

// =============================================================================
// Monoid
// =============================================================================

proptest! {
    /// The empty collection is the identity on both sides.
    #[test]
    fn prop_monoid_identity(values in collection(any::<u8>())) {
        prop_assert_eq!(Collection::<u8>::empty_value().append(values.clone()), values.clone());
        prop_assert_eq!(values.clone().append(Collection::<u8>::empty_value()), values);
    }

    /// Appending is associative.
    #[test]
    fn prop_monoid_associativity(
        first in collection(any::<u8>()),
        second in collection(any::<u8>()),
        third in collection(any::<u8>()),
    ) {
        let left = first.clone().append(second.clone()).append(third.clone());
        let right = first.append(second.append(third));
        prop_assert_eq!(left, right);
    }

    /// `concat` appends every part in order.
    #[test]
    fn prop_concat_preserves_order(parts in prop::collection::vec(collection(any::<u8>()), 0..5)) {
        let expected: Vec<u8> = parts.iter().flat_map(|part| part.iter().copied()).collect();
        prop_assert_eq!(Collection::concat(parts).into_vec(), expected);
    }
}

// =============================================================================
// Foldable
// =============================================================================

proptest! {
    /// `fold` agrees with a left fold of `append` from `empty_value`.
    #[test]
    fn prop_fold_agrees_with_left_append(values in collection(".{0,5}")) {
        let expected = foldl(Semigroup::append, String::empty_value(), values.clone().into_vec()).unwrap();
        prop_assert_eq!(values.fold(), expected);
    }

    /// `fold` of nested collections flattens them.
    #[test]
    fn prop_fold_of_collections(values in collection(collection(any::<i8>()))) {
        let expected = values.clone().fold_left(Collection::empty_value(), Semigroup::append);
        prop_assert_eq!(values.fold(), expected);
    }

    /// `sum` and `product` go through their wrappers.
    #[test]
    fn prop_sum_and_product(values in collection(0_i64..8)) {
        let plain = values.clone().into_vec();
        prop_assert_eq!(values.clone().sum(), plain.iter().sum::<i64>());
        prop_assert_eq!(values.product(), plain.iter().product::<i64>());
    }

    /// `maximum` agrees with `fold_map(Max)` on non-empty input.
    #[test]
    fn prop_maximum(values in prop::collection::vec(any::<i32>(), 1..12)) {
        let collection = Collection::of(values);
        let largest: Max<i32> = collection.clone().fold_map(Max);
        prop_assert_eq!(collection.maximum(), Ok(largest.into_inner()));
    }

    /// Right and left folds agree for a commutative, associative operation.
    #[test]
    fn prop_fold_directions_agree(values in collection(any::<u32>())) {
        let left = values.clone().fold_left(Sum(0_u32), |acc, n| acc.append(Sum(n % 1000)));
        let right = values.fold_right(Sum(0_u32), |n, acc| Sum(n % 1000).append(acc));
        prop_assert_eq!(left, right);
    }

    /// `elem`, `null` and `length` agree with the backing vector.
    #[test]
    fn prop_queries(values in collection(any::<u8>()), needle in any::<u8>()) {
        let plain = values.clone().into_vec();
        prop_assert_eq!(values.elem(&needle), plain.contains(&needle));
        prop_assert_eq!(values.null(), plain.is_empty());
        prop_assert_eq!(Foldable::length(&values), plain.len());
        prop_assert_eq!(values.to_array(), plain);
    }
}

#[test]
fn test_product_of_an_empty_collection_is_one() {
    let none: Collection<u16> = Collection::new();
    assert_eq!(none.fold_map(Product).into_inner(), 1);
}
