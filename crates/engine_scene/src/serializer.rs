//! Conversion between live entities and scene records.
//!
//! Loading is all-or-nothing: every component of every record is rebuilt
//! before the first entity is created, so a scene with one bad component
//! leaves the world untouched.
//!
//! Binary snapshots are MessagePack with named fields, so they stay readable
//! by any MessagePack tool and tolerate field reordering.

use std::path::Path;

use engine_component::{AnyComponent, ComponentRegistry, Entity, EntityId, World};
use tracing::{debug, info};

use crate::error::SceneError;
use crate::format::{ComponentRecord, EntityRecord, SceneRecord};

impl EntityRecord {
    /// Capture an entity's name and components.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Component`] if a component fails to serialise.
    pub fn from_entity(entity: &Entity) -> Result<Self, SceneError> {
        let components = entity
            .components()
            .iter()
            .map(|c| -> Result<ComponentRecord, SceneError> {
                Ok(ComponentRecord {
                    type_name: c.name().to_string(),
                    data: c.to_json()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: entity.name().to_string(),
            components,
        })
    }

    /// Rebuild every component and append a new entity to `world`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Component`] for an unregistered type name or
    /// component data that does not fit its type. The world is unchanged on
    /// error.
    pub fn spawn_into(
        self,
        registry: &ComponentRegistry,
        world: &mut World,
    ) -> Result<EntityId, SceneError> {
        Ok(self.rebuild(registry)?.spawn(world))
    }

    fn rebuild(self, registry: &ComponentRegistry) -> Result<PendingEntity, SceneError> {
        let components = self
            .components
            .into_iter()
            .map(|record| registry.deserialize(&record.type_name, record.data))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PendingEntity {
            name: self.name,
            components,
        })
    }
}

/// An entity whose components are rebuilt but which is not in a world yet.
struct PendingEntity {
    name: String,
    components: Vec<Box<dyn AnyComponent>>,
}

impl PendingEntity {
    fn spawn(self, world: &mut World) -> EntityId {
        let entity = world.create_entity(self.name);
        for component in self.components {
            entity.add_boxed_component(component);
        }
        entity.id()
    }
}

impl SceneRecord {
    /// Capture every entity of `world` in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Component`] if a component fails to serialise.
    pub fn from_world(world: &World) -> Result<Self, SceneError> {
        let entities = world
            .iter()
            .map(EntityRecord::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entities })
    }

    /// Append every entity to `world`, in record order.
    ///
    /// # Errors
    ///
    /// See [`EntityRecord::spawn_into`]. Nothing is appended if any record
    /// fails.
    pub fn spawn_into(
        self,
        registry: &ComponentRegistry,
        world: &mut World,
    ) -> Result<Vec<EntityId>, SceneError> {
        let pending = self
            .entities
            .into_iter()
            .map(|record| record.rebuild(registry))
            .collect::<Result<Vec<_>, _>>()?;
        let ids: Vec<_> = pending.into_iter().map(|p| p.spawn(world)).collect();
        debug!(count = ids.len(), "scene spawned");
        Ok(ids)
    }
}

/// Serialise one entity to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`SceneError`] if a component cannot be serialised.
pub fn serialize_entity(entity: &Entity) -> Result<String, SceneError> {
    let record = EntityRecord::from_entity(entity)?;
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Parse one entity from JSON and append it to `world`.
///
/// # Errors
///
/// Returns [`SceneError::Json`] for malformed text and
/// [`SceneError::Component`] for unknown or mismatched components.
pub fn deserialize_entity(
    text: &str,
    registry: &ComponentRegistry,
    world: &mut World,
) -> Result<EntityId, SceneError> {
    let record: EntityRecord = serde_json::from_str(text)?;
    record.spawn_into(registry, world)
}

/// Serialise a whole world to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`SceneError`] if a component cannot be serialised.
pub fn serialize_world(world: &World) -> Result<String, SceneError> {
    let record = SceneRecord::from_world(world)?;
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Parse a world from JSON and append its entities to `world`.
///
/// # Errors
///
/// See [`deserialize_entity`].
pub fn deserialize_world(
    text: &str,
    registry: &ComponentRegistry,
    world: &mut World,
) -> Result<Vec<EntityId>, SceneError> {
    let record: SceneRecord = serde_json::from_str(text)?;
    record.spawn_into(registry, world)
}

/// Encode a whole world as a MessagePack snapshot.
///
/// # Errors
///
/// Returns [`SceneError`] if a component cannot be serialised or encoded.
pub fn encode_world(world: &World) -> Result<Vec<u8>, SceneError> {
    Ok(rmp_serde::to_vec_named(&SceneRecord::from_world(world)?)?)
}

/// Decode a MessagePack snapshot and append its entities to `world`.
///
/// # Errors
///
/// Returns [`SceneError::Decode`] for malformed bytes, otherwise see
/// [`deserialize_entity`].
pub fn decode_world(
    bytes: &[u8],
    registry: &ComponentRegistry,
    world: &mut World,
) -> Result<Vec<EntityId>, SceneError> {
    let record: SceneRecord = rmp_serde::from_slice(bytes)?;
    record.spawn_into(registry, world)
}

/// Write `world` to a JSON scene file.
///
/// # Errors
///
/// Returns [`SceneError::Io`] if the file cannot be written.
pub fn save_world(world: &World, path: impl AsRef<Path>) -> Result<(), SceneError> {
    let path = path.as_ref();
    let text = serialize_world(world)?;
    std::fs::write(path, text).map_err(|source| SceneError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), entities = world.len(), "scene saved");
    Ok(())
}

/// Load a JSON scene file and append its entities to `world`.
///
/// # Errors
///
/// Returns [`SceneError::Io`] if the file cannot be read, otherwise see
/// [`deserialize_world`].
pub fn load_world(
    path: impl AsRef<Path>,
    registry: &ComponentRegistry,
    world: &mut World,
) -> Result<Vec<EntityId>, SceneError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let ids = deserialize_world(&text, registry, world)?;
    info!(path = %path.display(), entities = ids.len(), "scene loaded");
    Ok(ids)
}
