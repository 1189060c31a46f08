//! Mesh renderer component.

use engine_component::Component;
use serde::{Deserialize, Serialize};

/// Marks an entity as drawable and names the assets to draw it with.
///
/// Both paths are opaque to the core; the render backend decides how to
/// resolve and load them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeshRenderer {
    /// Path or identifier of the mesh asset.
    pub mesh_path: String,
    /// Path or identifier of the material asset.
    #[serde(default)]
    pub material_path: String,
}

impl MeshRenderer {
    /// A renderer for `mesh_path` with no material.
    #[must_use]
    pub fn new(mesh_path: impl Into<String>) -> Self {
        Self {
            mesh_path: mesh_path.into(),
            material_path: String::new(),
        }
    }

    #[must_use]
    pub fn with_material(mut self, material_path: impl Into<String>) -> Self {
        self.material_path = material_path.into();
        self
    }
}

impl Component for MeshRenderer {
    fn type_name() -> &'static str {
        "MeshRenderer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let r = MeshRenderer::new("m.obj").with_material("stone.mat");
        assert_eq!(r.mesh_path, "m.obj");
        assert_eq!(r.material_path, "stone.mat");
    }

    #[test]
    fn test_material_defaults_when_missing() {
        let r: MeshRenderer = serde_json::from_value(serde_json::json!({ "mesh_path": "a.obj" }))
            .unwrap();
        assert_eq!(r, MeshRenderer::new("a.obj"));
    }
}
