//! Policy-only container variant.

use std::fmt;

use super::{ComponentKind, ConstructionReport, ConstructionState, IndexedContainer};
use crate::error::{Result, RuleError};
use crate::index::{IndexKey, IndexSet};
use crate::rule::RuleOutcome;
use crate::value::Entry;

/// A component whose entries come only from its construction rule.
///
/// Build actions have no incremental-insert or mutation capability: the
/// rule runs once over the index set and the result is read-only. Through
/// the [`Component`](crate::Component) trait, `add` is rejected with
/// [`ComponentError::UnsupportedOperation`](crate::ComponentError::UnsupportedOperation).
pub struct PolicyContainer {
    inner: IndexedContainer,
}

impl PolicyContainer {
    /// Declares a build action over `index_set` driven by `rule`.
    pub fn new<F>(name: impl Into<String>, index_set: IndexSet, rule: F) -> Result<Self>
    where
        F: Fn(&IndexedContainer, &IndexKey) -> std::result::Result<RuleOutcome, RuleError>
            + Send
            + Sync
            + 'static,
    {
        let inner = IndexedContainer::builder(name, index_set)
            .kind(ComponentKind::BuildAction)
            .rule(rule)
            .build_unchecked()?;
        Ok(Self { inner })
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn index_set(&self) -> &IndexSet {
        self.inner.index_set()
    }

    pub fn state(&self) -> ConstructionState {
        self.inner.state()
    }

    pub fn is_constructed(&self) -> bool {
        self.inner.is_constructed()
    }

    /// Evaluates the rule over the index set.
    pub fn construct(&mut self) -> Result<ConstructionReport> {
        self.inner.construct()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn get(&self, index: impl Into<IndexKey>) -> Option<&Entry> {
        self.inner.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IndexKey, &Entry)> + '_ {
        self.inner.iter()
    }

    pub fn progress(&self) -> &super::ConstructionProgress {
        self.inner.progress()
    }
}

impl fmt::Debug for PolicyContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PolicyContainer").field(&self.inner).finish()
    }
}
