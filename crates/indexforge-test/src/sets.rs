//! Index set fixtures.

use indexforge_core::{IndexKey, IndexSet};

/// The index set `[1, 2, 3]`.
pub fn one_two_three() -> IndexSet {
    IndexSet::range(1, 4)
}

/// Products crossed with planning periods, e.g. `('widget', 2)`.
pub fn products_by_period() -> IndexSet {
    let products = IndexSet::new(["widget", "gadget"]).expect("distinct products");
    IndexSet::product(&products, &IndexSet::range(1, 4))
}

/// Extracts the integer from an `IndexKey::Int`.
///
/// # Panics
///
/// Panics on any other key.
pub fn int(index: &IndexKey) -> i64 {
    match index {
        IndexKey::Int(i) => *i,
        other => panic!("expected integer index, got {other}"),
    }
}
