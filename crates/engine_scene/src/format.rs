//! Serialisable record types.
//!
//! ## Layout
//!
//! One entity is a JSON object with its name and its components in store
//! order. Each component is tagged with its
//! [`Component::type_name`](engine_component::Component::type_name) and
//! carries its own serde fields under `data`:
//!
//! ```json
//! {
//!   "name": "Player",
//!   "components": [
//!     { "type": "Transform", "data": { "position": [0.0, 0.0, 0.0], "rotation": [0.0, 0.0, 0.0], "scale": [1.0, 1.0, 1.0] } },
//!     { "type": "MeshRenderer", "data": { "mesh_path": "m.obj", "material_path": "" } }
//!   ]
//! }
//! ```
//!
//! A whole world is `{ "entities": [ ... ] }` in world iteration order. Entity
//! ids are runtime handles and are not written; loading allocates new ones.
//! The MessagePack snapshot is the same records encoded with named fields.

use serde::{Deserialize, Serialize};

/// One component: its type tag plus its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// One entity: its name plus its components in store order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub name: String,
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
}

/// A whole world.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    #[serde(default)]
    pub entities: Vec<EntityRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_tag_is_named_type() {
        let record = ComponentRecord {
            type_name: "Camera".into(),
            data: serde_json::json!({ "fov": 45.0 }),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "Camera");
        assert_eq!(value["data"]["fov"], 45.0);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let entity: EntityRecord = serde_json::from_str(r#"{ "name": "bare" }"#).unwrap();
        assert!(entity.components.is_empty());

        let scene: SceneRecord = serde_json::from_str("{}").unwrap();
        assert!(scene.entities.is_empty());
    }
}
