//! Per-kind component policy.

use crate::index::IndexSet;

/// The kind of component a container holds.
///
/// Kinds decide the policies that differ between components sharing the
/// same container machinery: whether a scalar declaration needs an initial
/// value, what `len()` reports for a scalar, and which entries are valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComponentKind {
    /// Data-like component (parameters). Never requires an initial value.
    #[default]
    Data,
    /// Modeling component that must be given a value when scalar.
    Standard,
    /// Set-valued component; entries must be set values.
    Set,
    /// Rule-driven component without incremental insertion.
    BuildAction,
}

impl ComponentKind {
    /// Whether a declaration over `index_set` needs an initial value by default.
    pub fn requires_initial_value(&self, index_set: &IndexSet) -> bool {
        matches!(self, ComponentKind::Standard) && index_set.is_scalar()
    }

    /// Whether scalar `len()` reports the cardinality of the held set.
    pub fn scalar_len_is_cardinality(&self) -> bool {
        matches!(self, ComponentKind::Set)
    }

    /// Whether containers of this kind accept explicit `add`.
    pub fn supports_add(&self) -> bool {
        !matches!(self, ComponentKind::BuildAction)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Data => "data",
            ComponentKind::Standard => "standard",
            ComponentKind::Set => "set",
            ComponentKind::BuildAction => "build_action",
        }
    }
}
