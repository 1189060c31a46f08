//! Per-entity component storage.
//!
//! A [`ComponentStore`] is an ordered list of boxed components. Typed lookups
//! scan it front to back and stop at the first component of the requested
//! type, so when an entity carries two components of the same type only the
//! earlier one is reachable through [`ComponentStore::get`].

use crate::component::{AnyComponent, Component};

/// Ordered, heterogeneous collection of components owned by one entity.
#[derive(Debug, Default)]
pub struct ComponentStore {
    /// Components in insertion order.
    components: Vec<Box<dyn AnyComponent>>,
}

impl ComponentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Append a component. Duplicates of an existing type are accepted.
    pub fn add<T: Component>(&mut self, component: T) {
        self.components.push(Box::new(component));
    }

    /// Append an already type-erased component.
    pub fn add_boxed(&mut self, component: Box<dyn AnyComponent>) {
        self.components.push(component);
    }

    /// Returns the first component of type `T`, or `None` if there is none.
    #[must_use]
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.components.iter().find_map(|c| c.downcast_ref::<T>())
    }

    /// Mutable variant of [`ComponentStore::get`], with the same first-match rule.
    #[must_use]
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find_map(|c| c.downcast_mut::<T>())
    }

    /// Returns `true` if at least one component of type `T` is present.
    #[must_use]
    pub fn has<T: Component>(&self) -> bool {
        self.components.iter().any(|c| c.is::<T>())
    }

    /// Remove and return the first component of type `T`.
    ///
    /// The remaining components keep their relative order, so a later
    /// duplicate of `T` becomes the one returned by [`ComponentStore::get`].
    pub fn remove<T: Component>(&mut self) -> Option<T> {
        let index = self.components.iter().position(|c| c.is::<T>())?;
        let boxed = self.components.remove(index);
        boxed.into_any().downcast::<T>().ok().map(|b| *b)
    }

    /// Number of components, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate over all components in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn AnyComponent> {
        self.components.iter().map(|c| &**c)
    }

    /// Type names of all components in insertion order.
    #[must_use]
    pub fn type_names(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.name()).collect()
    }
}
