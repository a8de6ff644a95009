#![cfg(all(feature = "serde", feature = "typeclass"))]

//! Integration tests for serde support.
//!
//! `Optional` uses serde's externally tagged enum layout, `Collection` is a
//! plain JSON array and `Shape` is its variant name.

use fprelude::data::{Collection, Optional};
use fprelude::sequence::Shape;
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Optional
// =============================================================================

#[rstest]
#[case(Optional::Present(3), r#"{"Present":3}"#)]
#[case(Optional::Absent, r#""Absent""#)]
fn test_optional_json_layout(#[case] value: Optional<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
    let restored: Optional<i32> = serde_json::from_str(expected).unwrap();
    assert_eq!(restored, value);
}

#[test]
fn test_optional_rejects_unknown_variants() {
    assert!(serde_json::from_str::<Optional<i32>>(r#""Missing""#).is_err());
}

// =============================================================================
// Collection
// =============================================================================

#[test]
fn test_collection_is_a_plain_array() {
    let values = Collection::of(vec![String::from("a"), String::from("b")]);
    let json = serde_json::to_string(&values).unwrap();
    assert_eq!(json, r#"["a","b"]"#);

    let restored: Collection<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, values);
}

#[test]
fn test_nested_reference_types() {
    let nested = Collection::of(vec![Optional::Present(1_u8), Optional::Absent]);
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, r#"[{"Present":1},"Absent"]"#);
    assert_eq!(serde_json::from_str::<Collection<Optional<u8>>>(&json).unwrap(), nested);
}

// =============================================================================
// Shape
// =============================================================================

#[rstest]
#[case(Shape::Ordered, r#""Ordered""#)]
#[case(Shape::Text, r#""Text""#)]
#[case(Shape::Lazy, r#""Lazy""#)]
#[case(Shape::Custom, r#""Custom""#)]
fn test_shape_json_layout(#[case] shape: Shape, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&shape).unwrap(), expected);
    assert_eq!(serde_json::from_str::<Shape>(expected).unwrap(), shape);
}

proptest! {
    /// Collections survive a JSON round trip.
    #[test]
    fn prop_collection_json_round_trip(values in prop::collection::vec(any::<i64>(), 0..16)) {
        let collection = Collection::of(values);
        let json = serde_json::to_string(&collection).unwrap();
        prop_assert_eq!(serde_json::from_str::<Collection<i64>>(&json).unwrap(), collection);
    }
}
