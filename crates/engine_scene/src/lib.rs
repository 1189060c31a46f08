//! # engine_scene
//!
//! Saving and loading entities.
//!
//! This crate provides:
//!
//! - [`format`]: the serialisable record types and the on-disk layout.
//! - [`serializer`]: conversion between live entities and JSON or
//!   MessagePack scenes.
//! - [`error`]: scene error types.

pub mod error;
pub mod format;
pub mod serializer;

pub use error::SceneError;
pub use format::{ComponentRecord, EntityRecord, SceneRecord};
pub use serializer::{
    decode_world, deserialize_entity, deserialize_world, encode_world, load_world, save_world,
    serialize_entity, serialize_world,
};
