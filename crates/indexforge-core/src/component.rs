//! Polymorphic component interface.

use std::any::Any;

use crate::container::{
    ComponentKind, ConstructionReport, ConstructionState, IndexedContainer, PolicyContainer,
};
use crate::error::{ComponentError, Result};
use crate::index::{IndexKey, IndexSet};
use crate::value::Entry;

/// Capabilities every component offers to the modeling layer.
///
/// Incremental insertion is optional: the default [`add`](Self::add)
/// rejects the call, and only variants that support it override it.
pub trait Component: Send + Sync + Any {
    fn name(&self) -> &str;

    fn kind(&self) -> ComponentKind;

    fn index_set(&self) -> &IndexSet;

    /// Number of materialized entries (see [`IndexedContainer::len`]).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: &IndexKey) -> Option<&Entry>;

    /// Iterates materialized entries in the component's defined order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&IndexKey, &Entry)> + '_>;

    fn state(&self) -> ConstructionState;

    fn is_constructed(&self) -> bool {
        self.state() == ConstructionState::Constructed
    }

    fn construct(&mut self) -> Result<ConstructionReport>;

    /// Explicitly initializes the entry at `index`.
    fn add(&mut self, index: IndexKey, entry: Entry) -> Result<()> {
        let _ = (index, entry);
        Err(ComponentError::UnsupportedOperation {
            component: self.name().to_string(),
            operation: "add",
        })
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Receives construction reports from the modeling layer.
pub trait ConstructionObserver {
    fn on_constructed(&mut self, report: &ConstructionReport);
}

impl Component for IndexedContainer {
    fn name(&self) -> &str {
        IndexedContainer::name(self)
    }

    fn kind(&self) -> ComponentKind {
        IndexedContainer::kind(self)
    }

    fn index_set(&self) -> &IndexSet {
        IndexedContainer::index_set(self)
    }

    fn len(&self) -> usize {
        IndexedContainer::len(self)
    }

    fn get(&self, index: &IndexKey) -> Option<&Entry> {
        IndexedContainer::get(self, index.clone())
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&IndexKey, &Entry)> + '_> {
        Box::new(self.iter())
    }

    fn state(&self) -> ConstructionState {
        IndexedContainer::state(self)
    }

    fn construct(&mut self) -> Result<ConstructionReport> {
        IndexedContainer::construct(self)
    }

    fn add(&mut self, index: IndexKey, entry: Entry) -> Result<()> {
        IndexedContainer::add(self, index, entry)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Component for PolicyContainer {
    fn name(&self) -> &str {
        PolicyContainer::name(self)
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::BuildAction
    }

    fn index_set(&self) -> &IndexSet {
        PolicyContainer::index_set(self)
    }

    fn len(&self) -> usize {
        PolicyContainer::len(self)
    }

    fn get(&self, index: &IndexKey) -> Option<&Entry> {
        PolicyContainer::get(self, index.clone())
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&IndexKey, &Entry)> + '_> {
        Box::new(self.iter())
    }

    fn state(&self) -> ConstructionState {
        PolicyContainer::state(self)
    }

    fn construct(&mut self) -> Result<ConstructionReport> {
        PolicyContainer::construct(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
