//! Tests for indexed containers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::container::{ComponentKind, ConstructionState, IndexedContainer, PolicyContainer};
use crate::error::ComponentError;
use crate::index::{IndexKey, IndexSet};
use crate::rule::RuleOutcome;
use crate::value::{Domain, Entry, Value};

mod access;
mod policy;

fn one_two_three() -> IndexSet {
    IndexSet::new([1, 2, 3]).unwrap()
}

fn int(index: &IndexKey) -> i64 {
    match index {
        IndexKey::Int(i) => *i,
        other => panic!("expected integer index, got {other}"),
    }
}

fn keys(container: &IndexedContainer) -> Vec<IndexKey> {
    container.keys().cloned().collect()
}
