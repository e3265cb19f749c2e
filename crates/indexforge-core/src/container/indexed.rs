//! The indexed container and its declaration builder.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;

use super::{ComponentKind, ConstructionProgress, ConstructionState};
use crate::error::{ComponentError, Result, RuleError};
use crate::index::{IndexKey, IndexSet};
use crate::rule::{ConstructionRule, RuleOutcome};
use crate::value::{Domain, Entry};

/// Maps an index set to materialized entries under a construction policy.
///
/// The container starts out [`ConstructionState::Declared`]. Entries come to
/// exist from the initializer mapping or the construction rule when
/// [`construct`](Self::construct) runs, from explicit [`add`](Self::add)
/// calls, and, for mutable containers, implicitly on
/// [`lookup`](Self::lookup) and [`set`](Self::set).
///
/// # Example
///
/// ```
/// use indexforge_core::{IndexSet, IndexedContainer, RuleOutcome};
///
/// let mut squares = IndexedContainer::builder("squares", IndexSet::range(1, 4))
///     .rule(|_, index| {
///         let i = match index {
///             indexforge_core::IndexKey::Int(i) => *i,
///             _ => return Ok(RuleOutcome::Skip),
///         };
///         Ok(RuleOutcome::value(i * i))
///     })
///     .build()
///     .unwrap();
///
/// squares.construct().unwrap();
/// assert_eq!(squares.len(), 3);
/// assert_eq!(squares.get(3).and_then(|e| e.value()).and_then(|v| v.as_i64()), Some(9));
/// ```
pub struct IndexedContainer {
    pub(crate) name: String,
    pub(crate) kind: ComponentKind,
    pub(crate) index_set: IndexSet,
    pub(crate) entries: IndexMap<IndexKey, Entry>,
    pub(crate) initializer: Option<Vec<(IndexKey, Entry)>>,
    pub(crate) rule: Option<ConstructionRule>,
    pub(crate) default: Option<Entry>,
    pub(crate) domain: Domain,
    pub(crate) dense: bool,
    pub(crate) mutable: bool,
    pub(crate) overwrite_on_add: bool,
    pub(crate) state: ConstructionState,
    pub(crate) progress: ConstructionProgress,
}

impl IndexedContainer {
    /// Starts declaring a container named `name` over `index_set`.
    pub fn builder(name: impl Into<String>, index_set: IndexSet) -> ContainerBuilder {
        ContainerBuilder::new(name, index_set)
    }

    /// Starts declaring a scalar container.
    pub fn scalar(name: impl Into<String>) -> ContainerBuilder {
        ContainerBuilder::new(name, IndexSet::scalar())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn index_set(&self) -> &IndexSet {
        &self.index_set
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn default_entry(&self) -> Option<&Entry> {
        self.default.as_ref()
    }

    pub fn is_dense(&self) -> bool {
        self.dense
    }

    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    pub fn is_scalar(&self) -> bool {
        self.index_set.is_scalar()
    }

    pub fn state(&self) -> ConstructionState {
        self.state
    }

    pub fn is_constructed(&self) -> bool {
        self.state == ConstructionState::Constructed
    }

    /// Which indices the rule has handled, including after a failed attempt.
    pub fn progress(&self) -> &ConstructionProgress {
        &self.progress
    }

    /// Number of materialized entries.
    ///
    /// Scalar set-kind components report the cardinality of the set they
    /// hold instead.
    pub fn len(&self) -> usize {
        if self.kind.scalar_len_is_cardinality() && self.is_scalar() {
            return self
                .entries
                .get(&IndexKey::Scalar)
                .and_then(Entry::value)
                .and_then(|v| v.as_set())
                .map_or(0, <[_]>::len);
        }
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if an entry is materialized at `index`.
    pub fn contains(&self, index: impl Into<IndexKey>) -> bool {
        self.entries.contains_key(&index.into())
    }

    /// Reads the entry at `index` without materializing anything.
    pub fn get(&self, index: impl Into<IndexKey>) -> Option<&Entry> {
        self.entries.get(&index.into())
    }

    /// Reads the entry at `index`, falling back to the default.
    ///
    /// Never materializes; sparse containers use this to see defaults for
    /// indices they do not store.
    pub fn get_or_default(&self, index: impl Into<IndexKey>) -> Option<&Entry> {
        let index = index.into();
        if !self.index_set.contains(&index) {
            return None;
        }
        self.entries.get(&index).or(self.default.as_ref())
    }

    /// Iterates materialized `(index, entry)` pairs.
    ///
    /// Mutable containers yield insertion order; all others yield index-set
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&IndexKey, &Entry)> + '_ {
        self.entries.iter()
    }

    /// Iterates materialized indices in the same order as [`iter`](Self::iter).
    pub fn keys(&self) -> impl Iterator<Item = &IndexKey> + '_ {
        self.entries.keys()
    }

    pub(crate) fn require_member(&self, index: &IndexKey) -> Result<()> {
        if self.index_set.contains(index) {
            Ok(())
        } else {
            Err(ComponentError::Index {
                component: self.name.clone(),
                index: index.clone(),
            })
        }
    }

    /// Checks an entry against the kind and domain of this container.
    pub(crate) fn validate_entry(&self, index: &IndexKey, entry: &Entry) -> Result<()> {
        let violation = |value: String, domain: &'static str| ComponentError::Domain {
            component: self.name.clone(),
            index: index.clone(),
            value,
            domain,
        };
        match entry {
            Entry::Unconstructed => Ok(()),
            Entry::Expression(e) if self.kind == ComponentKind::Set => {
                Err(violation(e.to_string(), "Set"))
            }
            Entry::Expression(_) => Ok(()),
            Entry::Value(value) if self.kind == ComponentKind::Set => {
                let members = value
                    .as_set()
                    .ok_or_else(|| violation(value.to_string(), "Set"))?;
                match members.iter().find(|m| !self.domain.contains(m)) {
                    Some(bad) => Err(violation(bad.to_string(), self.domain.name())),
                    None => Ok(()),
                }
            }
            Entry::Value(value) if !self.domain.contains(value) => {
                Err(violation(value.to_string(), self.domain.name()))
            }
            Entry::Value(_) => Ok(()),
        }
    }

    /// Re-sorts entries into index-set order.
    pub(crate) fn restore_index_order(&mut self) {
        let index_set = &self.index_set;
        self.entries
            .sort_by_cached_key(|key, _| index_set.position(key).unwrap_or(usize::MAX));
    }

    /// Inserts a new entry at its index-set position.
    ///
    /// Entries must already be in index-set order.
    pub(crate) fn insert_in_index_order(&mut self, index: IndexKey, entry: Entry) {
        let index_set = &self.index_set;
        let target = index_set.position(&index).unwrap_or(usize::MAX);
        let slot = self
            .entries
            .partition_point(|key, _| index_set.position(key).unwrap_or(usize::MAX) < target);
        self.entries.shift_insert(slot, index, entry);
    }
}

impl fmt::Debug for IndexedContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedContainer")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("index_set", &self.index_set)
            .field("entries", &self.entries.len())
            .field("dense", &self.dense)
            .field("mutable", &self.mutable)
            .field("state", &self.state)
            .finish()
    }
}

/// Declaration of an [`IndexedContainer`].
///
/// [`build`](Self::build) validates the combination of settings and returns
/// an unconstructed container.
pub struct ContainerBuilder {
    name: String,
    index_set: IndexSet,
    kind: ComponentKind,
    initializer: Option<Vec<(IndexKey, Entry)>>,
    rule: Option<ConstructionRule>,
    default: Option<Entry>,
    domain: Domain,
    dense: bool,
    mutable: bool,
    requires_initial_value: Option<bool>,
    overwrite_on_add: bool,
}

impl ContainerBuilder {
    fn new(name: impl Into<String>, index_set: IndexSet) -> Self {
        Self {
            name: name.into(),
            index_set,
            kind: ComponentKind::default(),
            initializer: None,
            rule: None,
            default: None,
            domain: Domain::Any,
            dense: false,
            mutable: false,
            requires_initial_value: None,
            overwrite_on_add: false,
        }
    }

    pub fn kind(mut self, kind: ComponentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Supplies the initializer mapping applied by `construct()`.
    pub fn initialize<I, K, E>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<IndexKey>,
        E: Into<Entry>,
    {
        self.initializer = Some(
            pairs
                .into_iter()
                .map(|(k, e)| (k.into(), e.into().normalized()))
                .collect(),
        );
        self
    }

    /// Initial value of a scalar container.
    pub fn value(self, entry: impl Into<Entry>) -> Self {
        self.initialize([(IndexKey::Scalar, entry.into())])
    }

    /// Supplies the per-index construction rule.
    pub fn rule<F>(mut self, f: F) -> Self
    where
        F: Fn(&IndexedContainer, &IndexKey) -> std::result::Result<RuleOutcome, RuleError>
            + Send
            + Sync
            + 'static,
    {
        self.rule = Some(ConstructionRule::new(f));
        self
    }

    pub fn default(mut self, entry: impl Into<Entry>) -> Self {
        self.default = Some(entry.into().normalized());
        self
    }

    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Materialize the default for every index not otherwise initialized.
    pub fn dense(mut self, dense: bool) -> Self {
        self.dense = dense;
        self
    }

    /// Allow creation and mutation after construction.
    pub fn mutable(mut self, mutable: bool) -> Self {
        self.mutable = mutable;
        self
    }

    /// Overrides the kind's policy on whether an initial value is required.
    pub fn requires_initial_value(mut self, required: bool) -> Self {
        self.requires_initial_value = Some(required);
        self
    }

    /// Let `add` replace existing entries instead of failing.
    pub fn overwrite_on_add(mut self, overwrite: bool) -> Self {
        self.overwrite_on_add = overwrite;
        self
    }

    /// Validates the declaration and returns the unconstructed container.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Configuration`] for invalid combinations:
    /// both an initializer and a rule, an initializer that repeats an index,
    /// dense expansion without a default, a default outside the domain, a
    /// required initial value that nothing can provide, or a build-action
    /// kind (declared through [`PolicyContainer`](super::PolicyContainer)).
    pub fn build(self) -> Result<IndexedContainer> {
        if self.kind == ComponentKind::BuildAction {
            return Err(ComponentError::configuration(
                &self.name,
                "build-action components are declared as policy containers",
            ));
        }
        self.build_unchecked()
    }

    pub(crate) fn build_unchecked(self) -> Result<IndexedContainer> {
        let name = self.name;
        if self.initializer.is_some() && self.rule.is_some() {
            return Err(ComponentError::configuration(
                &name,
                "an initializer and a rule cannot both be given",
            ));
        }
        if let Some(pairs) = &self.initializer {
            let mut seen = HashSet::with_capacity(pairs.len());
            if let Some((index, _)) = pairs.iter().find(|(index, _)| !seen.insert(index)) {
                return Err(ComponentError::configuration(
                    &name,
                    format!("the initializer gives index {index} more than once"),
                ));
            }
        }
        if self.dense && self.default.is_none() {
            return Err(ComponentError::configuration(
                &name,
                "dense expansion requires a default value",
            ));
        }
        let requires = self
            .requires_initial_value
            .unwrap_or_else(|| self.kind.requires_initial_value(&self.index_set));
        let has_source = self.initializer.is_some()
            || self.rule.is_some()
            || self.default.is_some()
            || self.mutable;
        if requires && !has_source {
            return Err(ComponentError::configuration(
                &name,
                "no initial value, rule, or default was given",
            ));
        }

        let container = IndexedContainer {
            name,
            kind: self.kind,
            index_set: self.index_set,
            entries: IndexMap::new(),
            initializer: self.initializer,
            rule: self.rule,
            default: None,
            domain: self.domain,
            dense: self.dense,
            mutable: self.mutable,
            overwrite_on_add: self.overwrite_on_add,
            state: ConstructionState::Declared,
            progress: ConstructionProgress::default(),
        };
        if let Some(default) = &self.default {
            container
                .validate_entry(&IndexKey::Scalar, default)
                .map_err(|e| match e {
                    ComponentError::Domain { value, domain, .. } => ComponentError::configuration(
                        &container.name,
                        format!("default value {value} is outside the domain {domain}"),
                    ),
                    other => other,
                })?;
        }
        Ok(IndexedContainer {
            default: self.default,
            ..container
        })
    }
}
