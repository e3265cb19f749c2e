//! Construction lifecycle tracking.

use std::time::Duration;

use crate::index::IndexKey;

/// Lifecycle of a container.
///
/// `Declared → Constructing → Constructed`; `Constructed` never reverts. A
/// container left in `Constructing` had its construction aborted by an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConstructionState {
    #[default]
    Declared,
    Constructing,
    Constructed,
}

/// Record of which indices the construction rule has handled so far.
///
/// Survives a failed `construct()` so a retry resumes after the last
/// evaluated index and diagnostics can name what already succeeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructionProgress {
    /// Number of index-set positions the rule has been evaluated for.
    pub evaluated: usize,
    /// Indices the rule materialized.
    pub succeeded: Vec<IndexKey>,
    /// Indices the rule skipped.
    pub skipped: Vec<IndexKey>,
    /// Index whose evaluation aborted the last construction attempt.
    pub failed: Option<IndexKey>,
}

impl ConstructionProgress {
    pub fn is_skipped(&self, index: &IndexKey) -> bool {
        self.skipped.contains(index)
    }
}

/// Summary of a completed construction, reported to the modeling layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionReport {
    pub component: String,
    /// Entries materialized after construction.
    pub entries: usize,
    /// Indices the rule skipped.
    pub skipped: usize,
    /// Entries filled from the default by dense expansion.
    pub filled: usize,
    pub duration: Duration,
}
