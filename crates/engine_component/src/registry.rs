//! Component registry: maps serialised type names back to Rust types.
//!
//! Writing a component out only needs the value itself (see
//! [`AnyComponent::to_json`]). Reading one back needs to know which Rust type
//! a tag like `"Transform"` stands for; the registry holds one
//! [`ComponentMeta`] per known type for that purpose, keyed by the
//! [`ComponentTypeId`] of its name.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::component::{AnyComponent, Component, ComponentTypeId};
use crate::error::ComponentError;

/// Metadata about a component type, used to rebuild type-erased values.
#[derive(Debug, Clone)]
pub struct ComponentMeta {
    /// The unique type identifier.
    pub type_id: ComponentTypeId,
    /// The human-readable name of the component (e.g. `"Transform"`).
    pub name: &'static str,
    /// Build a boxed component from its JSON fields.
    pub deserialize_fn: fn(serde_json::Value) -> Result<Box<dyn AnyComponent>, serde_json::Error>,
}

/// Registry of component types that can be deserialised.
#[derive(Debug, Default, Clone)]
pub struct ComponentRegistry {
    types: HashMap<ComponentTypeId, ComponentMeta>,
}

impl ComponentRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Register `T`. Registering the same name twice keeps the latest entry.
    pub fn register<T: Component>(&mut self) -> &mut Self {
        let meta = T::meta();
        debug!(component = meta.name, type_id = meta.type_id.0, "registered component type");
        if let Some(previous) = self.types.insert(meta.type_id, meta) {
            if previous.name != T::type_name() {
                warn!(
                    replaced = previous.name,
                    component = T::type_name(),
                    "component type id collision"
                );
            }
        }
        self
    }

    /// Builder form of [`ComponentRegistry::register`].
    #[must_use]
    pub fn with<T: Component>(mut self) -> Self {
        self.register::<T>();
        self
    }

    #[must_use]
    pub fn get_by_id(&self, type_id: ComponentTypeId) -> Option<&ComponentMeta> {
        self.types.get(&type_id)
    }

    /// Look up a type by its serialised name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ComponentMeta> {
        self.get_by_id(ComponentTypeId::from_name(name))
            .filter(|meta| meta.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of registered component types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Rebuild a component of the named type from its JSON fields.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::UnknownType`] if `name` was never registered,
    /// or [`ComponentError::Deserialize`] if `value` does not fit the type.
    pub fn deserialize(
        &self,
        name: &str,
        value: serde_json::Value,
    ) -> Result<Box<dyn AnyComponent>, ComponentError> {
        let meta = self
            .get(name)
            .ok_or_else(|| ComponentError::UnknownType(name.to_string()))?;
        (meta.deserialize_fn)(value).map_err(|source| ComponentError::Deserialize {
            name: name.to_string(),
            source,
        })
    }
}
