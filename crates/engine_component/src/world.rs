//! The entity registry.
//!
//! A [`World`] owns every entity for a running session. Entities are kept in
//! creation order and that order never changes: systems that walk the world
//! see the same sequence every frame, and [`World::despawn`] closes the gap
//! instead of swapping the last entity in.

use tracing::debug;

use crate::component::Component;
use crate::entity::{Entity, EntityId, IdAllocator};
use crate::error::WorldError;

/// Top-level owner of all entities.
#[derive(Debug, Default)]
pub struct World {
    ids: IdAllocator,
    /// Live entities, in creation order. Because ids are allocated
    /// monotonically this is also ascending id order.
    entities: Vec<Entity>,
}

impl World {
    /// Create a new empty world.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ids: IdAllocator::default(),
            entities: Vec::new(),
        }
    }

    /// Create an empty entity and append it to the world.
    ///
    /// Always succeeds. The name is not checked: empty and duplicate names
    /// are allowed.
    pub fn create_entity(&mut self, name: impl Into<String>) -> &mut Entity {
        let id = self.ids.issue();
        let entity = Entity::new(id, name);
        debug!(entity = id.get(), name = entity.name(), "entity created");
        self.entities.push(entity);
        let last = self.entities.len() - 1;
        &mut self.entities[last]
    }

    /// Like [`World::create_entity`], but refuses a name that a live entity
    /// already carries.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateName`] if the name is taken.
    pub fn create_unique_entity(
        &mut self,
        name: impl Into<String>,
    ) -> Result<&mut Entity, WorldError> {
        let name = name.into();
        if self.find(&name).is_some() {
            return Err(WorldError::DuplicateName(name));
        }
        Ok(self.create_entity(name))
    }

    /// Remove an entity and hand it back to the caller. Its components are
    /// dropped when the returned value is.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EntityNotFound`] if no live entity has `id`.
    pub fn despawn(&mut self, id: EntityId) -> Result<Entity, WorldError> {
        let index = self.index_of(id).ok_or(WorldError::EntityNotFound(id))?;
        let entity = self.entities.remove(index);
        debug!(entity = id.get(), name = entity.name(), "entity despawned");
        Ok(entity)
    }

    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|i| &self.entities[i])
    }

    #[must_use]
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.index_of(id).map(|i| &mut self.entities[i])
    }

    /// First entity (in creation order) with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name() == name)
    }

    /// All live entities in creation order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Every entity that has a `T`, paired with its first `T`.
    pub fn query<T: Component>(&self) -> impl Iterator<Item = (&Entity, &T)> {
        self.entities
            .iter()
            .filter_map(|e| e.get_component::<T>().map(|c| (e, c)))
    }

    /// Mutable variant of [`World::query`].
    pub fn query_mut<T: Component>(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.entities.iter_mut().filter_map(|e| {
            let id = e.id();
            e.get_component_mut::<T>().map(|c| (id, c))
        })
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the number of ids ever allocated, despawned entities included.
    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.ids.issued()
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.binary_search_by_key(&id, Entity::id).ok()
    }
}

impl<'a> IntoIterator for &'a World {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

impl<'a> IntoIterator for &'a mut World {
    type Item = &'a mut Entity;
    type IntoIter = std::slice::IterMut<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter_mut()
    }
}
