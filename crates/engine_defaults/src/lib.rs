//! # engine_defaults
//!
//! The standard component set every scene can rely on:
//!
//! - [`Transform`] (re-exported from `engine_math`)
//! - [`MeshRenderer`]
//! - [`Camera`]
//!
//! [`standard_registry`] returns a [`ComponentRegistry`] that already knows
//! all of them, which is what scene loading uses unless a game registers its
//! own types on top.

pub mod camera;
pub mod mesh_renderer;

use engine_component::ComponentRegistry;

pub use camera::Camera;
pub use engine_math::Transform;
pub use mesh_renderer::MeshRenderer;

/// A registry containing every standard component type.
#[must_use]
pub fn standard_registry() -> ComponentRegistry {
    ComponentRegistry::new()
        .with::<Transform>()
        .with::<MeshRenderer>()
        .with::<Camera>()
}

#[cfg(test)]
mod tests {
    use engine_component::World;
    use engine_math::Vec3;

    use super::*;

    #[test]
    fn test_player_with_standard_components() {
        let mut world = World::new();
        world
            .create_entity("Player")
            .add_component(Transform::from_position(Vec3::ZERO))
            .add_component(MeshRenderer::new("m.obj"));

        let player = world.find("Player").unwrap();
        assert_eq!(
            player.get_component::<Transform>(),
            Some(&Transform::from_position(Vec3::ZERO))
        );
        assert_eq!(
            player.get_component::<MeshRenderer>().map(|m| m.mesh_path.as_str()),
            Some("m.obj")
        );
        assert!(player.get_component::<Camera>().is_none());
    }

    #[test]
    fn test_same_named_cameras_stay_distinct() {
        let mut world = World::new();
        world.create_entity("A").add_component(Camera::default());
        world.create_entity("A").add_component(Camera {
            fov: 90.0,
            ..Camera::default()
        });

        let fovs: Vec<_> = world
            .query::<Camera>()
            .map(|(entity, camera)| (entity.name(), camera.fov))
            .collect();
        assert_eq!(fovs, vec![("A", 45.0), ("A", 90.0)]);
    }

    #[test]
    fn test_standard_registry_contents() {
        let registry = standard_registry();
        assert_eq!(registry.len(), 3);
        for name in ["Transform", "MeshRenderer", "Camera"] {
            assert!(registry.contains(name), "missing {name}");
        }
    }
}
