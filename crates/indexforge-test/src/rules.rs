//! Construction rule fixtures.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use indexforge_core::{IndexKey, IndexedContainer, RuleError, RuleOutcome};

use crate::sets::int;

/// Records how often a rule was invoked for each index.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<Mutex<HashMap<IndexKey, usize>>>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, index: &IndexKey) {
        let mut calls = self.calls.lock().unwrap();
        *calls.entry(index.clone()).or_insert(0) += 1;
    }

    /// Number of times the rule ran for `index`.
    pub fn count(&self, index: impl Into<IndexKey>) -> usize {
        let calls = self.calls.lock().unwrap();
        calls.get(&index.into()).copied().unwrap_or(0)
    }

    /// Total number of rule invocations.
    pub fn total(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

/// Rule returning the integer index as its value and skipping `skipped`.
pub fn skip_index(
    skipped: i64,
    counter: CallCounter,
) -> impl Fn(&IndexedContainer, &IndexKey) -> Result<RuleOutcome, RuleError> + Send + Sync + 'static
{
    move |_, index| {
        counter.record(index);
        let i = int(index);
        if i == skipped {
            Ok(RuleOutcome::Skip)
        } else {
            Ok(RuleOutcome::value(i))
        }
    }
}

/// Rule skipping every index for which `skip` returns true.
pub fn skip_where<P>(
    skip: P,
    counter: CallCounter,
) -> impl Fn(&IndexedContainer, &IndexKey) -> Result<RuleOutcome, RuleError> + Send + Sync + 'static
where
    P: Fn(i64) -> bool + Send + Sync + 'static,
{
    move |_, index| {
        counter.record(index);
        let i = int(index);
        if skip(i) {
            Ok(RuleOutcome::Skip)
        } else {
            Ok(RuleOutcome::value(i))
        }
    }
}

/// Rule failing at `failing` and returning the index elsewhere.
pub fn fail_at(
    failing: i64,
) -> impl Fn(&IndexedContainer, &IndexKey) -> Result<RuleOutcome, RuleError> + Send + Sync + 'static
{
    move |_, index| {
        let i = int(index);
        if i == failing {
            Err(format!("no data for period {i}").into())
        } else {
            Ok(RuleOutcome::value(i))
        }
    }
}
