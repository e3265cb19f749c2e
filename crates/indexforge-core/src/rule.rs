//! Construction rules.
//!
//! A rule derives the entry for one index during eager construction. It is
//! handed read access to the container being built, so it can consult
//! entries produced for earlier indices.

use std::fmt;

use crate::container::IndexedContainer;
use crate::error::RuleError;
use crate::index::IndexKey;
use crate::value::Entry;

/// What a construction rule produced for one index.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    /// Materialize this entry.
    Entry(Entry),
    /// Leave the index permanently unmaterialized.
    Skip,
    /// Reserve the index with an [`Entry::Unconstructed`] placeholder.
    NotYetConstructed,
}

impl RuleOutcome {
    /// Shorthand for `RuleOutcome::Entry(value.into())`.
    pub fn value(value: impl Into<Entry>) -> Self {
        RuleOutcome::Entry(value.into())
    }
}

/// Signature of a construction rule.
pub type RuleFn =
    dyn Fn(&IndexedContainer, &IndexKey) -> Result<RuleOutcome, RuleError> + Send + Sync;

/// A boxed construction rule owned by its container.
pub struct ConstructionRule {
    f: Box<RuleFn>,
}

impl ConstructionRule {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&IndexedContainer, &IndexKey) -> Result<RuleOutcome, RuleError>
            + Send
            + Sync
            + 'static,
    {
        Self { f: Box::new(f) }
    }

    pub(crate) fn evaluate(
        &self,
        container: &IndexedContainer,
        index: &IndexKey,
    ) -> Result<RuleOutcome, RuleError> {
        (self.f)(container, index)
    }
}

impl fmt::Debug for ConstructionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConstructionRule(..)")
    }
}
