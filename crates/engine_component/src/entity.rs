//! Entity identifiers and the entity container.
//!
//! An [`Entity`] is a named, ordered bag of components. Entities are only ever
//! created by a [`World`](crate::World), which hands out an [`EntityId`] from
//! its [`EntityAllocator`] so systems can refer to an entity without holding a
//! borrow of it.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::component::{AnyComponent, Component};
use crate::store::ComponentStore;

/// Handle to an entity in one [`World`](crate::World).
///
/// Ids are issued in creation order starting at 1 and are never reused, even
/// after the entity is despawned, so ordering two ids orders their creation.
/// Zero is never a valid id, which lets `Option<EntityId>` stay 8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(NonZeroU64);

impl EntityId {
    /// The raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues [`EntityId`]s for a single world.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    issued: u64,
}

impl IdAllocator {
    pub(crate) fn issue(&mut self) -> EntityId {
        let id = NonZeroU64::MIN.saturating_add(self.issued);
        self.issued += 1;
        EntityId(id)
    }

    /// Ids handed out so far, including ones whose entity is gone.
    pub(crate) fn issued(&self) -> u64 {
        self.issued
    }
}

/// A named container owning zero or more components.
///
/// The name is a display label only; several entities in one world may share
/// it.
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    name: String,
    components: ComponentStore,
}

impl Entity {
    pub(crate) fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            components: ComponentStore::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach a component. See [`ComponentStore::add`].
    pub fn add_component<T: Component>(&mut self, component: T) -> &mut Self {
        self.components.add(component);
        self
    }

    /// Attach an already type-erased component.
    pub fn add_boxed_component(&mut self, component: Box<dyn AnyComponent>) -> &mut Self {
        self.components.add_boxed(component);
        self
    }

    /// First component of type `T`, if any.
    #[must_use]
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components.get::<T>()
    }

    #[must_use]
    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components.get_mut::<T>()
    }

    #[must_use]
    pub fn has_component<T: Component>(&self) -> bool {
        self.components.has::<T>()
    }

    /// Detach and return the first component of type `T`.
    pub fn remove_component<T: Component>(&mut self) -> Option<T> {
        self.components.remove::<T>()
    }

    /// Read access to the underlying store.
    #[must_use]
    pub fn components(&self) -> &ComponentStore {
        &self.components
    }
}
