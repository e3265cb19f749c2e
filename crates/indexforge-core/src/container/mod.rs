//! Indexed containers and their construction policies.
//!
//! - [`IndexedContainer`]: sparse or dense, immutable or mutable container
//!   declared through [`ContainerBuilder`]
//! - [`PolicyContainer`]: rule-only variant without incremental insertion
//! - [`ComponentKind`]: per-kind policies shared by both

mod access;
mod construct;
mod indexed;
mod kind;
mod policy;
mod state;

pub use indexed::{ContainerBuilder, IndexedContainer};
pub use kind::ComponentKind;
pub use policy::PolicyContainer;
pub use state::{ConstructionProgress, ConstructionReport, ConstructionState};

#[cfg(test)]
mod tests;
