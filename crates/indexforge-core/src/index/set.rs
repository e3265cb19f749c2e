//! Ordered index sets.

use std::fmt;

use indexmap::IndexSet as KeySet;

use super::IndexKey;
use crate::error::{ComponentError, Result};

/// Finite set of index keys a component is declared over.
///
/// Members keep the order they were declared in. Once bound to a container
/// the set is never modified.
#[derive(Clone, PartialEq, Eq)]
pub struct IndexSet {
    keys: KeySet<IndexKey>,
    ordered: bool,
}

impl IndexSet {
    /// The single-member index set of a scalar component.
    pub fn scalar() -> Self {
        let mut keys = KeySet::with_capacity(1);
        keys.insert(IndexKey::Scalar);
        Self {
            keys,
            ordered: true,
        }
    }

    /// Creates an ordered index set from explicit keys.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a key appears twice or if the
    /// scalar sentinel is mixed with other keys.
    pub fn new<I, K>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<IndexKey>,
    {
        let iter = keys.into_iter();
        let mut set = KeySet::with_capacity(iter.size_hint().0);
        for key in iter {
            let key = key.into();
            if !set.insert(key.clone()) {
                return Err(ComponentError::configuration(
                    "<index set>",
                    format!("duplicate index {key}"),
                ));
            }
        }
        if set.len() > 1 && set.contains(&IndexKey::Scalar) {
            return Err(ComponentError::configuration(
                "<index set>",
                "the scalar index cannot be combined with other indices",
            ));
        }
        Ok(Self {
            keys: set,
            ordered: true,
        })
    }

    /// Creates the integer index set `[start, end)`.
    pub fn range(start: i64, end: i64) -> Self {
        Self {
            keys: (start..end).map(IndexKey::Int).collect(),
            ordered: true,
        }
    }

    /// Cartesian product of two index sets with flattened tuple keys.
    ///
    /// Members are ordered lexicographically by `(a, b)` position.
    pub fn product(a: &IndexSet, b: &IndexSet) -> Self {
        let keys = a
            .keys
            .iter()
            .flat_map(|x| b.keys.iter().map(move |y| x.join(y)))
            .collect();
        Self {
            keys,
            ordered: a.ordered && b.ordered,
        }
    }

    /// Marks this set as unordered for reporting purposes.
    ///
    /// Iteration stays deterministic (declaration order); the flag only
    /// records that the order carries no meaning.
    pub fn unordered(mut self) -> Self {
        self.ordered = false;
        self
    }

    /// Returns whether member order is meaningful.
    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// Returns true if this is the scalar index set.
    pub fn is_scalar(&self) -> bool {
        self.keys.len() == 1 && self.keys.contains(&IndexKey::Scalar)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &IndexKey) -> bool {
        self.keys.contains(key)
    }

    /// Returns the declaration position of `key`.
    pub fn position(&self, key: &IndexKey) -> Option<usize> {
        self.keys.get_index_of(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexKey> + '_ {
        self.keys.iter()
    }
}

impl fmt::Debug for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexSet")
            .field("len", &self.keys.len())
            .field("ordered", &self.ordered)
            .finish()
    }
}

impl<'a> IntoIterator for &'a IndexSet {
    type Item = &'a IndexKey;
    type IntoIter = indexmap::set::Iter<'a, IndexKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
