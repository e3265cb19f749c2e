//! IndexForge Core - Indexed components with lazy construction
//!
//! This crate provides the container abstraction that maps an index space to
//! component entries:
//! - Index keys and index sets, with scalar components as the one-member case
//! - Entry payloads: values, opaque expressions and unconstructed placeholders
//! - Construction rules evaluated per index, with skip support
//! - The indexed container: sparse or dense, immutable or mutable
//! - The policy-only container variant for build actions

pub mod component;
pub mod container;
pub mod error;
pub mod index;
pub mod rule;
pub mod value;

pub use component::{Component, ConstructionObserver};
pub use container::{
    ComponentKind, ConstructionProgress, ConstructionReport, ConstructionState, ContainerBuilder,
    IndexedContainer, PolicyContainer,
};
pub use error::{ComponentError, Result, RuleError};
pub use index::{IndexKey, IndexSet};
pub use rule::{ConstructionRule, RuleOutcome};
pub use value::{Domain, Entry, Expression, Value};
