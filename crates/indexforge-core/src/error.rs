//! Error types for IndexForge

use thiserror::Error;

use crate::index::IndexKey;

/// Error raised by a construction rule.
pub type RuleError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for indexed component operations.
///
/// Every variant names the component it was raised for so the surrounding
/// modeling layer can report the failing component without extra context.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// Invalid combination of index set, initializer, rule, default and
    /// density at declaration time.
    #[error("Configuration error in component '{component}': {message}")]
    Configuration { component: String, message: String },

    /// The construction rule failed or returned an invalid sentinel.
    #[error("Rule for component '{component}' failed at index {index}: {source}")]
    RuleEvaluation {
        component: String,
        index: IndexKey,
        #[source]
        source: RuleError,
    },

    /// Explicit `add` on an index that already has an entry.
    #[error("Component '{component}' already has an entry at index {index}")]
    DuplicateIndex { component: String, index: IndexKey },

    /// Index outside the component's index set.
    #[error("Index {index} is not a member of the index set of component '{component}'")]
    Index { component: String, index: IndexKey },

    /// Lookup on a member index that has no materialized entry.
    #[error("Component '{component}' has no entry at index {index}")]
    Missing { component: String, index: IndexKey },

    /// Write attempt on a non-mutable component.
    #[error("Component '{component}' is not mutable")]
    Immutable { component: String },

    /// Operation not offered by this component variant.
    #[error("Component '{component}' does not support {operation}")]
    UnsupportedOperation {
        component: String,
        operation: &'static str,
    },

    /// Repeated or out-of-order construction.
    #[error("Invalid state for component '{component}': {message}")]
    State { component: String, message: String },

    /// Value outside the component's declared domain.
    #[error("Value {value} at index {index} is outside the domain {domain} of component '{component}'")]
    Domain {
        component: String,
        index: IndexKey,
        value: String,
        domain: &'static str,
    },

    /// A block already holds a component with this name.
    #[error("A component named '{0}' is already declared")]
    DuplicateComponent(String),
}

impl ComponentError {
    pub(crate) fn configuration(component: &str, message: impl Into<String>) -> Self {
        ComponentError::Configuration {
            component: component.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn state(component: &str, message: impl Into<String>) -> Self {
        ComponentError::State {
            component: component.to_string(),
            message: message.into(),
        }
    }

    /// Returns the index this error is tagged with, if any.
    pub fn index(&self) -> Option<&IndexKey> {
        match self {
            ComponentError::RuleEvaluation { index, .. }
            | ComponentError::DuplicateIndex { index, .. }
            | ComponentError::Index { index, .. }
            | ComponentError::Missing { index, .. }
            | ComponentError::Domain { index, .. } => Some(index),
            _ => None,
        }
    }
}

/// Result type alias for indexed component operations
pub type Result<T> = std::result::Result<T, ComponentError>;
