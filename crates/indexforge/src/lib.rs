//! IndexForge - Indexed model components in Rust
//!
//! Declare components over index sets, pick how their entries come to
//! exist, and construct them together in a [`Block`].
//!
//! # Example
//!
//! ```rust
//! use indexforge::prelude::*;
//!
//! let mut block = Block::new("model");
//! block
//!     .declare(
//!         IndexedContainer::builder("capacity", IndexSet::range(1, 4))
//!             .initialize([(1, 1.0)])
//!             .default(0.0)
//!             .dense(true)
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! block.construct().unwrap();
//! assert_eq!(block.container("capacity").unwrap().len(), 3);
//! ```

// Core types
pub use indexforge_core::{
    Component, ComponentError, ComponentKind, ConstructionObserver, ConstructionProgress,
    ConstructionReport, ConstructionState, ContainerBuilder, Domain, Entry, Expression, IndexKey,
    IndexSet, IndexedContainer, PolicyContainer, Result, RuleError, RuleOutcome, Value,
};

// Declarative configuration
pub use indexforge_config::{ComponentConfig, ConfigError, IndexConfig, ModelConfig};

mod block;
pub use block::Block;

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{Block, Component, ComponentKind, Domain, Entry, Expression, RuleOutcome};
    pub use super::{IndexKey, IndexSet, IndexedContainer, PolicyContainer, Value};
    pub use super::{ComponentError, ModelConfig};
}
