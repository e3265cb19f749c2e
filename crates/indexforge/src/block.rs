//! Named component registry for one model.

use indexmap::IndexMap;
use tracing::info;

use indexforge_config::{ConfigError, ModelConfig};
use indexforge_core::{
    Component, ComponentError, ConstructionObserver, ConstructionReport, IndexedContainer,
    PolicyContainer, Result,
};

/// Owns a model's components by name and constructs them in declaration order.
///
/// Components report to the block as they finish construction; the block
/// keeps those reports for diagnostics.
#[derive(Default)]
pub struct Block {
    name: String,
    components: IndexMap<String, Box<dyn Component>>,
    reports: Vec<ConstructionReport>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declares every component of `config` in a new block.
    pub fn from_config(
        name: impl Into<String>,
        config: &ModelConfig,
    ) -> std::result::Result<Self, ConfigError> {
        let mut block = Self::new(name);
        for component in &config.components {
            block.declare(component.to_container()?)?;
        }
        Ok(block)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a component under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::DuplicateComponent`] if the name is taken.
    pub fn declare<C: Component>(&mut self, component: C) -> Result<()> {
        let name = component.name().to_string();
        if self.components.contains_key(&name) {
            return Err(ComponentError::DuplicateComponent(name));
        }
        info!(
            event = "declare",
            block = %self.name,
            component = %name,
            kind = component.kind().name(),
        );
        self.components.insert(name, Box::new(component));
        Ok(())
    }

    /// Constructs every component not yet constructed, in declaration order.
    ///
    /// Stops at the first failure and returns its error; components
    /// declared after the failing one stay unconstructed.
    pub fn construct(&mut self) -> Result<()> {
        for i in 0..self.components.len() {
            let report = match self.components.get_index_mut(i) {
                Some((_, component)) if !component.is_constructed() => component.construct()?,
                _ => continue,
            };
            self.on_constructed(&report);
        }
        Ok(())
    }

    /// Constructs a single component by name.
    pub fn construct_component(&mut self, name: &str) -> Result<ConstructionReport> {
        let component = self
            .components
            .get_mut(name)
            .ok_or_else(|| ComponentError::State {
                component: name.to_string(),
                message: format!("not declared in block '{}'", self.name),
            })?;
        let report = component.construct()?;
        self.on_constructed(&report);
        Ok(report)
    }

    pub fn component(&self, name: &str) -> Option<&dyn Component> {
        self.components.get(name).map(|c| c.as_ref())
    }

    pub fn component_mut(&mut self, name: &str) -> Option<&mut (dyn Component + 'static)> {
        self.components.get_mut(name).map(|c| c.as_mut())
    }

    /// Typed access to an indexed container.
    pub fn container(&self, name: &str) -> Option<&IndexedContainer> {
        self.component(name)?.as_any().downcast_ref()
    }

    pub fn container_mut(&mut self, name: &str) -> Option<&mut IndexedContainer> {
        self.component_mut(name)?.as_any_mut().downcast_mut()
    }

    /// Typed access to a build action.
    pub fn policy(&self, name: &str) -> Option<&PolicyContainer> {
        self.component(name)?.as_any().downcast_ref()
    }

    /// Component names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Reports of every construction completed through this block.
    pub fn reports(&self) -> &[ConstructionReport] {
        &self.reports
    }
}

impl ConstructionObserver for Block {
    fn on_constructed(&mut self, report: &ConstructionReport) {
        info!(
            event = "registered",
            block = %self.name,
            component = %report.component,
            entries = report.entries,
        );
        self.reports.push(report.clone());
    }
}

impl std::fmt::Debug for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Block")
            .field("name", &self.name)
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .finish()
    }
}
