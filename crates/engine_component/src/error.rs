//! Error types for the component core.
//!
//! Looking up a component that an entity does not have is *not* an error and
//! never shows up here; those lookups return `None`.

use crate::entity::EntityId;

/// Errors raised by the opt-in world operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// [`World::create_unique_entity`](crate::World::create_unique_entity)
    /// found a live entity with the same name.
    #[error("an entity named {0:?} already exists")]
    DuplicateName(String),

    /// No live entity has this id.
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),
}

/// Errors raised while converting components to or from serialised data.
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    /// The type name is not present in the [`ComponentRegistry`](crate::ComponentRegistry).
    #[error("unknown component type: {0}")]
    UnknownType(String),

    #[error("failed to serialise component {name}: {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The component serialised, but the result does not load back as the
    /// same type.
    #[error("component {name} cannot be saved faithfully: {source}")]
    Unrepresentable {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to deserialise component {name}: {source}")]
    Deserialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
