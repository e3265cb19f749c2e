//! Configuration system for IndexForge.
//!
//! Declare indexed components in TOML or YAML files instead of code. Rules
//! are code and cannot be declared here; everything else a container takes
//! at declaration can.
//!
//! # Examples
//!
//! ```
//! use indexforge_config::ModelConfig;
//!
//! let config = ModelConfig::from_toml_str(r#"
//!     [[components]]
//!     name = "capacity"
//!     index = { range = { start = 1, end = 4 } }
//!     initialize = [{ index = 1, value = 1.0 }]
//!     default = 0.0
//!     dense = true
//!
//!     [[components]]
//!     name = "price"
//!     index = { values = ["a", "b"] }
//!     mutable = true
//! "#).unwrap();
//!
//! assert_eq!(config.components.len(), 2);
//!
//! let mut capacity = config.components[0].to_container().unwrap();
//! capacity.construct().unwrap();
//! assert_eq!(capacity.len(), 3);
//! ```

use std::collections::HashSet;
use std::path::Path;

use indexforge_core::{
    ComponentError, ComponentKind, Domain, IndexKey, IndexSet, IndexedContainer, Value,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Component(#[from] ComponentError),
}

/// Component declarations for one model.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ModelConfig {
    /// Components in declaration order.
    #[serde(default)]
    pub components: Vec<ComponentConfig>,
}

impl ModelConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// declares two components with the same name.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Adds a component declaration.
    pub fn with_component(mut self, component: ComponentConfig) -> Self {
        self.components.push(component);
        self
    }

    /// Finds a component declaration by name.
    pub fn component(&self, name: &str) -> Option<&ComponentConfig> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Checks that component names are unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "component '{}' is declared twice",
                    component.name
                )));
            }
        }
        Ok(())
    }
}

/// Declaration of one indexed component.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ComponentConfig {
    pub name: String,

    #[serde(default)]
    pub kind: ComponentKind,

    /// Index set; scalar when omitted.
    #[serde(default)]
    pub index: IndexConfig,

    /// Initial `(index, value)` pairs.
    #[serde(default)]
    pub initialize: Vec<InitialValue>,

    /// Initial value of a scalar component.
    #[serde(default)]
    pub value: Option<Value>,

    #[serde(default)]
    pub default: Option<Value>,

    #[serde(default)]
    pub domain: Domain,

    #[serde(default)]
    pub dense: bool,

    #[serde(default)]
    pub mutable: bool,

    /// Overrides the kind's policy when set.
    #[serde(default)]
    pub requires_initial_value: Option<bool>,

    #[serde(default)]
    pub overwrite_on_add: bool,
}

impl ComponentConfig {
    /// Creates a declaration for a scalar data component.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_index(mut self, index: IndexConfig) -> Self {
        self.index = index;
        self
    }

    pub fn with_initial(mut self, index: impl Into<IndexKey>, value: impl Into<Value>) -> Self {
        self.initialize.push(InitialValue {
            index: index.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn dense(mut self) -> Self {
        self.dense = true;
        self
    }

    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    /// Builds the unconstructed container this declaration describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when both `value` and `initialize`
    /// are given, and [`ConfigError::Component`] for declarations the
    /// container itself rejects.
    pub fn to_container(&self) -> Result<IndexedContainer, ConfigError> {
        let index_set = self.index.to_index_set()?;
        let mut builder = IndexedContainer::builder(self.name.clone(), index_set)
            .kind(self.kind)
            .domain(self.domain)
            .dense(self.dense)
            .mutable(self.mutable)
            .overwrite_on_add(self.overwrite_on_add);

        match (&self.value, self.initialize.is_empty()) {
            (Some(_), false) => {
                return Err(ConfigError::Invalid(format!(
                    "component '{}' gives both `value` and `initialize`",
                    self.name
                )));
            }
            (Some(value), true) => builder = builder.value(value.clone()),
            (None, false) => {
                builder = builder.initialize(
                    self.initialize
                        .iter()
                        .map(|init| (init.index.clone(), init.value.clone())),
                );
            }
            (None, true) => {}
        }
        if let Some(default) = &self.default {
            builder = builder.default(default.clone());
        }
        if let Some(required) = self.requires_initial_value {
            builder = builder.requires_initial_value(required);
        }

        debug!(component = %self.name, kind = self.kind.name(), "declaring from config");
        Ok(builder.build()?)
    }
}

/// One `(index, value)` pair of an initializer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct InitialValue {
    pub index: IndexKey,
    pub value: Value,
}

/// Index set declaration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexConfig {
    /// Single implicit index.
    #[default]
    Scalar,

    /// Explicit ordered members.
    Values(Vec<IndexKey>),

    /// Integers in `[start, end)`.
    Range { start: i64, end: i64 },

    /// Cartesian product of the listed sets.
    Product(Vec<IndexConfig>),
}

impl IndexConfig {
    /// Builds the index set this declaration describes.
    pub fn to_index_set(&self) -> Result<IndexSet, ConfigError> {
        match self {
            IndexConfig::Scalar => Ok(IndexSet::scalar()),
            IndexConfig::Values(keys) => Ok(IndexSet::new(keys.iter().cloned())?),
            IndexConfig::Range { start, end } => {
                if end < start {
                    return Err(ConfigError::Invalid(format!(
                        "range end {end} is before start {start}"
                    )));
                }
                Ok(IndexSet::range(*start, *end))
            }
            IndexConfig::Product(factors) => {
                let mut iter = factors.iter();
                let first = iter.next().ok_or_else(|| {
                    ConfigError::Invalid("a product needs at least one factor".to_string())
                })?;
                let mut set = first.to_index_set()?;
                for factor in iter {
                    set = IndexSet::product(&set, &factor.to_index_set()?);
                }
                Ok(set)
            }
        }
    }
}
