//! Property-based tests for the type class laws of `Optional`.
//!
//! - **Functor**: identity and composition
//! - **Applicative**: identity and homomorphism
//! - **Monad**: left identity, right identity and associativity
//! - **Comonad**: `extract` after `duplicate` or `extend`
//! - **Monoid**: identity and associativity over a semigroup payload

#![cfg(feature = "typeclass")]

use fprelude::data::Optional;
use fprelude::typeclass::{
    Applicative, Comonad, Foldable, Functor, Monad, Monoid, Semigroup, Sum,
};
use fprelude::SequenceError;
use proptest::prelude::*;

fn optional<S: Strategy>(values: S) -> impl Strategy<Value = Optional<S::Value>> {
    prop::option::of(values).prop_map(Optional::from)
}

fn halve(n: i32) -> Optional<i32> {
    if n % 2 == 0 {
        Optional::Present(n / 2)
    } else {
        Optional::Absent
    }
}

fn positive(n: i32) -> Optional<i32> {
    if n > 0 { Optional::Present(n) } else { Optional::Absent }
}

// =============================================================================
// Functor
// =============================================================================

proptest! {
    /// Identity Law: mapping the identity function changes nothing.
    #[test]
    fn prop_functor_identity(value in optional(any::<i32>())) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    /// Composition Law: two maps equal one map of the composition.
    #[test]
    fn prop_functor_composition(value in optional(any::<i32>())) {
        let first = |n: i32| n.wrapping_add(1);
        let second = |n: i32| n.wrapping_mul(3);
        prop_assert_eq!(value.map(first).map(second), value.map(|x| second(first(x))));
    }
}

// =============================================================================
// Applicative
// =============================================================================

proptest! {
    /// Identity Law: applying a present identity changes nothing.
    #[test]
    fn prop_applicative_identity(value in optional(any::<i32>())) {
        let identity = Optional::<i32>::pure(|x: i32| x);
        prop_assert_eq!(identity.apply(value), value);
    }

    /// Homomorphism Law: applying pure to pure is pure of the application.
    #[test]
    fn prop_applicative_homomorphism(value in any::<i32>()) {
        let negate = |n: i32| n.wrapping_neg();
        let applied = Optional::<i32>::pure(negate).apply(Optional::<i32>::pure(value));
        prop_assert_eq!(applied, Optional::Present(value.wrapping_neg()));
    }
}

// =============================================================================
// Monad
// =============================================================================

proptest! {
    /// Left Identity Law: `pure(a).bind(f) == f(a)`.
    #[test]
    fn prop_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Optional::Present(value).bind(halve), halve(value));
    }

    /// Right Identity Law: `m.bind(pure) == m`.
    #[test]
    fn prop_monad_right_identity(value in optional(any::<i32>())) {
        prop_assert_eq!(value.bind(Optional::Present), value);
    }

    /// Associativity Law.
    #[test]
    fn prop_monad_associativity(value in optional(any::<i32>())) {
        let left = value.bind(halve).bind(positive);
        let right = value.bind(|x| halve(x).bind(positive));
        prop_assert_eq!(left, right);
    }

    /// Absent short-circuits every bind.
    #[test]
    fn prop_absent_short_circuits(steps in 0_usize..8) {
        let mut value: Optional<i32> = Optional::Absent;
        for _ in 0..steps {
            value = value.bind(|n| Optional::Present(n + 1));
        }
        prop_assert_eq!(value, Optional::Absent);
    }
}

// =============================================================================
// Comonad
// =============================================================================

proptest! {
    /// `extract` after `duplicate` returns the original value.
    #[test]
    fn prop_comonad_duplicate_extract(value in optional(any::<i32>())) {
        prop_assert_eq!(value.duplicate().extract(), Ok(value));
    }

    /// `extract` after `extend(f)` is `f` of the original value.
    #[test]
    fn prop_comonad_extend_extract(value in optional(any::<i32>())) {
        let describe = |o: Optional<i32>| o.extract_or(0).wrapping_mul(2);
        prop_assert_eq!(value.extend(describe).extract(), Ok(describe(value)));
    }

    /// `extract` of a present value returns it.
    #[test]
    fn prop_extract_present(value in any::<i32>()) {
        prop_assert_eq!(Optional::Present(value).extract(), Ok(value));
    }
}

#[test]
fn test_extract_absent_fails() {
    assert_eq!(
        Optional::<i32>::Absent.extract(),
        Err(SequenceError::AbsentValueAccessed)
    );
}

// =============================================================================
// Monoid and Foldable
// =============================================================================

proptest! {
    /// Absent is the identity on both sides.
    #[test]
    fn prop_monoid_identity(value in optional(".{0,6}")) {
        prop_assert_eq!(Optional::<String>::empty_value().append(value.clone()), value.clone());
        prop_assert_eq!(value.clone().append(Optional::<String>::empty_value()), value);
    }

    /// Appending is associative.
    #[test]
    fn prop_monoid_associativity(
        first in optional(".{0,4}"),
        second in optional(".{0,4}"),
        third in optional(".{0,4}"),
    ) {
        let left = first.clone().append(second.clone()).append(third.clone());
        let right = first.append(second.append(third));
        prop_assert_eq!(left, right);
    }

    /// Folding sees the present value once and nothing otherwise.
    #[test]
    fn prop_fold_map_counts_presence(value in optional(any::<i32>())) {
        let seen: Sum<usize> = value.fold_map(|_| Sum(1));
        prop_assert_eq!(seen.into_inner(), usize::from(value.is_present()));
    }
}
