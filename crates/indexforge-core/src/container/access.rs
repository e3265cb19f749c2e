//! Incremental insertion and mutable access.

use tracing::debug;

use super::{ConstructionState, IndexedContainer};
use crate::error::{ComponentError, Result};
use crate::index::IndexKey;
use crate::value::Entry;

impl IndexedContainer {
    /// Explicitly initializes the entry at `index`.
    ///
    /// Filling an [`Entry::Unconstructed`] placeholder is always allowed. An
    /// existing entry is replaced only if the container was declared with
    /// `overwrite_on_add`.
    ///
    /// # Errors
    ///
    /// - [`ComponentError::Index`] if `index` is outside the index set
    /// - [`ComponentError::DuplicateIndex`] if an entry already exists
    /// - [`ComponentError::Domain`] if the entry violates the kind or domain
    pub fn add(&mut self, index: impl Into<IndexKey>, entry: impl Into<Entry>) -> Result<()> {
        let index = index.into();
        let entry = entry.into().normalized();
        self.require_member(&index)?;
        if !self.overwrite_on_add && self.entries.get(&index).is_some_and(Entry::is_constructed) {
            return Err(ComponentError::DuplicateIndex {
                component: self.name.clone(),
                index,
            });
        }
        self.validate_entry(&index, &entry)?;

        if self.mutable || self.entries.contains_key(&index) {
            self.entries.insert(index, entry);
        } else {
            self.insert_in_index_order(index, entry);
        }
        Ok(())
    }

    /// Returns the entry at `index`.
    ///
    /// On a mutable container a missing member index is materialized from
    /// the default, or as an [`Entry::Unconstructed`] placeholder when there
    /// is no default. A mutable container that was never constructed is
    /// constructed first.
    ///
    /// # Errors
    ///
    /// - [`ComponentError::Index`] if `index` is outside the index set
    /// - [`ComponentError::Missing`] if an immutable container has no entry there
    pub fn lookup(&mut self, index: impl Into<IndexKey>) -> Result<&Entry> {
        let index = index.into();
        self.require_member(&index)?;
        if !self.mutable {
            return self.entries.get(&index).ok_or_else(|| ComponentError::Missing {
                component: self.name.clone(),
                index,
            });
        }

        self.ensure_constructed()?;
        if !self.entries.contains_key(&index) {
            let entry = self.default.clone().unwrap_or(Entry::Unconstructed);
            debug!(component = %self.name, index = %index, "implicit construction on lookup");
            self.entries.insert(index.clone(), entry);
        }
        self.entries.get(&index).ok_or_else(|| ComponentError::Missing {
            component: self.name.clone(),
            index,
        })
    }

    /// Assigns `entry` at `index`, creating the entry if needed.
    ///
    /// # Errors
    ///
    /// - [`ComponentError::Immutable`] if the container is not mutable
    /// - [`ComponentError::Index`] if `index` is outside the index set
    /// - [`ComponentError::Domain`] if the entry violates the kind or domain
    pub fn set(&mut self, index: impl Into<IndexKey>, entry: impl Into<Entry>) -> Result<()> {
        if !self.mutable {
            return Err(ComponentError::Immutable {
                component: self.name.clone(),
            });
        }
        let index = index.into();
        let entry = entry.into().normalized();
        self.require_member(&index)?;
        self.validate_entry(&index, &entry)?;
        self.ensure_constructed()?;

        if !self.entries.contains_key(&index) {
            debug!(component = %self.name, index = %index, "implicit construction on set");
        }
        self.entries.insert(index, entry);
        Ok(())
    }

    /// Removes and returns the entry at `index`.
    ///
    /// # Errors
    ///
    /// - [`ComponentError::Immutable`] if the container is not mutable
    /// - [`ComponentError::Index`] if `index` is outside the index set
    /// - [`ComponentError::Missing`] if nothing is materialized there
    pub fn remove(&mut self, index: impl Into<IndexKey>) -> Result<Entry> {
        if !self.mutable {
            return Err(ComponentError::Immutable {
                component: self.name.clone(),
            });
        }
        let index = index.into();
        self.require_member(&index)?;
        self.entries
            .shift_remove(&index)
            .ok_or_else(|| ComponentError::Missing {
                component: self.name.clone(),
                index,
            })
    }

    fn ensure_constructed(&mut self) -> Result<()> {
        if self.state != ConstructionState::Constructed {
            self.construct()?;
        }
        Ok(())
    }
}
