//! Construction policy engine.

use std::time::Instant;

use tracing::{debug, info, trace, warn};

use super::{ConstructionReport, ConstructionState, IndexedContainer};
use crate::error::{ComponentError, Result};
use crate::index::IndexKey;
use crate::rule::RuleOutcome;
use crate::value::Entry;

impl IndexedContainer {
    /// Applies the construction policy.
    ///
    /// Runs the initializer mapping, or evaluates the rule over the index set
    /// in order, then fills the default into every remaining index if the
    /// container is dense. Indices the rule skipped stay unmaterialized even
    /// when dense.
    ///
    /// A rule failure leaves the container `Constructing` with the entries
    /// produced so far; calling `construct()` again resumes at the failing
    /// index without re-invoking the rule for handled indices.
    ///
    /// # Errors
    ///
    /// - [`ComponentError::State`] if an immutable container is already constructed
    /// - [`ComponentError::Index`] if an initializer key is outside the index set
    /// - [`ComponentError::DuplicateIndex`] if an initializer key or a rule index
    ///   was already added
    /// - [`ComponentError::Domain`] if a value violates the kind or domain
    /// - [`ComponentError::RuleEvaluation`] if the rule fails
    pub fn construct(&mut self) -> Result<ConstructionReport> {
        if self.state == ConstructionState::Constructed {
            if self.mutable {
                return Ok(self.report(0, Instant::now()));
            }
            return Err(ComponentError::state(&self.name, "already constructed"));
        }

        let start = Instant::now();
        info!(
            event = "construct_start",
            component = %self.name,
            kind = self.kind.name(),
            indices = self.index_set.len(),
            resumed = self.state == ConstructionState::Constructing,
        );
        self.state = ConstructionState::Constructing;

        if self.initializer.is_some() {
            self.apply_initializer()?;
        } else if self.rule.is_some() {
            self.apply_rule()?;
        }

        let filled = if self.dense { self.fill_dense() } else { 0 };

        if !self.mutable {
            self.restore_index_order();
        }
        self.state = ConstructionState::Constructed;

        let report = self.report(filled, start);
        info!(
            event = "construct_end",
            component = %self.name,
            entries = report.entries,
            skipped = report.skipped,
            filled = report.filled,
            duration_ms = report.duration.as_millis() as u64,
        );
        Ok(report)
    }

    fn report(&self, filled: usize, start: Instant) -> ConstructionReport {
        ConstructionReport {
            component: self.name.clone(),
            entries: self.entries.len(),
            skipped: self.progress.skipped.len(),
            filled,
            duration: start.elapsed(),
        }
    }

    // Validates every pair before inserting any, so a failure leaves no
    // partial state behind.
    fn apply_initializer(&mut self) -> Result<()> {
        let Some(pairs) = self.initializer.as_ref() else {
            return Ok(());
        };
        for (index, entry) in pairs {
            self.require_member(index)?;
            self.validate_entry(index, entry)?;
            if !self.overwrite_on_add && self.entries.get(index).is_some_and(Entry::is_constructed)
            {
                return Err(ComponentError::DuplicateIndex {
                    component: self.name.clone(),
                    index: index.clone(),
                });
            }
        }
        if let Some(pairs) = self.initializer.take() {
            debug!(component = %self.name, pairs = pairs.len(), "applying initializer");
            self.entries.extend(pairs);
        }
        Ok(())
    }

    fn apply_rule(&mut self) -> Result<()> {
        let Some(rule) = self.rule.take() else {
            return Ok(());
        };
        self.progress.failed = None;

        let pending: Vec<IndexKey> = self
            .index_set
            .iter()
            .skip(self.progress.evaluated)
            .cloned()
            .collect();

        for index in pending {
            if !self.overwrite_on_add && self.entries.get(&index).is_some_and(Entry::is_constructed)
            {
                self.progress.failed = Some(index.clone());
                self.rule = Some(rule);
                return Err(ComponentError::DuplicateIndex {
                    component: self.name.clone(),
                    index,
                });
            }
            trace!(component = %self.name, index = %index, "evaluating rule");
            let outcome = match rule.evaluate(self, &index) {
                Ok(outcome) => outcome,
                Err(source) => {
                    warn!(component = %self.name, index = %index, error = %source, "rule failed");
                    return Err(self.abort_rule(rule, index, source));
                }
            };

            let entry = match outcome {
                RuleOutcome::Skip => {
                    self.progress.skipped.push(index);
                    self.progress.evaluated += 1;
                    continue;
                }
                RuleOutcome::NotYetConstructed => Entry::Unconstructed,
                RuleOutcome::Entry(Entry::Unconstructed) => {
                    let source = "rule returned an unconstructed entry; \
                                  use RuleOutcome::NotYetConstructed"
                        .into();
                    return Err(self.abort_rule(rule, index, source));
                }
                RuleOutcome::Entry(entry) => entry.normalized(),
            };

            if let Err(e) = self.validate_entry(&index, &entry) {
                self.progress.failed = Some(index);
                self.rule = Some(rule);
                return Err(e);
            }
            self.entries.insert(index.clone(), entry);
            self.progress.succeeded.push(index);
            self.progress.evaluated += 1;
        }

        self.rule = Some(rule);
        Ok(())
    }

    fn abort_rule(
        &mut self,
        rule: crate::rule::ConstructionRule,
        index: IndexKey,
        source: crate::error::RuleError,
    ) -> ComponentError {
        self.progress.failed = Some(index.clone());
        self.rule = Some(rule);
        ComponentError::RuleEvaluation {
            component: self.name.clone(),
            index,
            source,
        }
    }

    fn fill_dense(&mut self) -> usize {
        let Some(default) = self.default.clone() else {
            return 0;
        };
        let missing: Vec<IndexKey> = self
            .index_set
            .iter()
            .filter(|k| !self.entries.contains_key(*k) && !self.progress.is_skipped(k))
            .cloned()
            .collect();
        debug!(component = %self.name, filled = missing.len(), "dense default fill");
        let filled = missing.len();
        for index in missing {
            self.entries.insert(index, default.clone());
        }
        filled
    }
}
