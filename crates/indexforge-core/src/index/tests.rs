//! Tests for index keys and index sets.

use super::*;

#[test]
fn test_scalar_set() {
    let set = IndexSet::scalar();
    assert!(set.is_scalar());
    assert_eq!(set.len(), 1);
    assert!(set.contains(&IndexKey::Scalar));
}

#[test]
fn test_new_preserves_declaration_order() {
    let set = IndexSet::new([3, 1, 2]).unwrap();
    let keys: Vec<_> = set.iter().cloned().collect();
    assert_eq!(keys, vec![IndexKey::Int(3), IndexKey::Int(1), IndexKey::Int(2)]);
    assert_eq!(set.position(&IndexKey::Int(1)), Some(1));
    assert!(!set.is_scalar());
}

#[test]
fn test_new_rejects_duplicates() {
    let err = IndexSet::new([1, 2, 1]).unwrap_err();
    assert!(err.to_string().contains("duplicate index 1"));
}

#[test]
fn test_new_rejects_mixed_scalar() {
    let result = IndexSet::new([IndexKey::Scalar, IndexKey::Int(1)]);
    assert!(result.is_err());
}

#[test]
fn test_range_is_half_open() {
    let set = IndexSet::range(1, 4);
    assert_eq!(set.len(), 3);
    assert!(set.contains(&IndexKey::Int(1)));
    assert!(!set.contains(&IndexKey::Int(4)));
}

#[test]
fn test_product_flattens_tuples() {
    let a = IndexSet::new(["a", "b"]).unwrap();
    let b = IndexSet::range(1, 3);
    let ab = IndexSet::product(&a, &b);
    assert_eq!(ab.len(), 4);
    assert_eq!(ab.position(&IndexKey::from(("a", 2))), Some(1));
    assert_eq!(ab.position(&IndexKey::from(("b", 1))), Some(2));

    let abc = IndexSet::product(&ab, &IndexSet::new([10]).unwrap());
    assert!(abc.contains(&IndexKey::from(("b", 2, 10))));
    assert_eq!(abc.iter().next().map(IndexKey::dimen), Some(3));
}

#[test]
fn test_product_with_scalar_factor_keeps_plain_keys() {
    let a = IndexSet::range(1, 3);
    let left = IndexSet::product(&IndexSet::scalar(), &a);
    let right = IndexSet::product(&a, &IndexSet::scalar());
    for set in [&left, &right] {
        assert!(set.contains(&IndexKey::Int(1)));
        assert_eq!(set.position(&IndexKey::Int(2)), Some(1));
    }
    assert!(IndexSet::product(&IndexSet::scalar(), &IndexSet::scalar()).is_scalar());
}

#[test]
fn test_unordered_flag() {
    let set = IndexSet::range(0, 2).unordered();
    assert!(!set.is_ordered());
    assert!(!IndexSet::product(&set, &IndexSet::range(0, 1)).is_ordered());
}

#[test]
fn test_key_display() {
    assert_eq!(IndexKey::Scalar.to_string(), "None");
    assert_eq!(IndexKey::from(7).to_string(), "7");
    assert_eq!(IndexKey::from(("x", 1)).to_string(), "('x', 1)");
}

#[test]
fn test_unsigned_keys_convert_losslessly() {
    assert_eq!(IndexKey::from(u32::MAX), IndexKey::Int(4_294_967_295));
    assert_eq!(IndexKey::from(7u8), IndexKey::Int(7));
}
