//! Constant-gravity physics.
//!
//! Every entity with a [`Transform`] falls along -Y at a constant rate:
//! `position.y -= gravity * dt`. There is no velocity state, no collision and
//! no other axis is touched. Entities without a transform are skipped.

use engine_component::World;
use engine_defaults::Transform;
use tracing::trace;

use crate::System;
use crate::context::SystemContext;

/// Gravitational constant in world units per second squared.
pub const GRAVITY: f32 = 9.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsSystem {
    /// Downward displacement per second of simulated time.
    pub gravity: f32,
}

impl PhysicsSystem {
    #[must_use]
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }

    /// Apply one step of `dt` seconds. Returns how many transforms moved.
    pub fn step(&self, world: &mut World, dt: f32) -> usize {
        let mut moved = 0;
        for (entity, transform) in world.query_mut::<Transform>() {
            transform.position.y -= self.gravity * dt;
            trace!(
                entity = entity.get(),
                x = transform.position.x,
                y = transform.position.y,
                z = transform.position.z,
                "updated position"
            );
            moved += 1;
        }
        moved
    }
}

impl Default for PhysicsSystem {
    fn default() -> Self {
        Self::new(GRAVITY)
    }
}

impl System for PhysicsSystem {
    fn name(&self) -> &str {
        "physics"
    }

    fn run(&mut self, world: &mut World, ctx: &SystemContext) {
        self.step(world, ctx.dt);
    }
}

#[cfg(test)]
mod tests {
    use engine_defaults::MeshRenderer;
    use engine_math::Vec3;

    use super::*;

    #[test]
    fn test_one_sixtieth_from_origin() {
        let mut world = World::new();
        let id = world
            .create_entity("Player")
            .add_component(Transform::default())
            .id();

        PhysicsSystem::default().step(&mut world, 1.0 / 60.0);

        let pos = world
            .entity(id)
            .and_then(|e| e.get_component::<Transform>())
            .map(|t| t.position)
            .unwrap();
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.z, 0.0);
        assert!((pos.y - (-9.8 / 60.0)).abs() < 1e-6);
        assert!((pos.y - (-0.1633)).abs() < 1e-4);
    }

    #[test]
    fn test_entities_without_transform_are_skipped() {
        let mut world = World::new();
        world.create_entity("scenery").add_component(MeshRenderer::new("tree.obj"));
        world
            .create_entity("falling")
            .add_component(Transform::from_position(Vec3::new(1.0, 10.0, -2.0)));

        let moved = PhysicsSystem::default().step(&mut world, 0.5);
        assert_eq!(moved, 1);

        let t = world
            .find("falling")
            .and_then(|e| e.get_component::<Transform>())
            .unwrap();
        assert_eq!(t.position, Vec3::new(1.0, 10.0 - 4.9, -2.0));
    }

    #[test]
    fn test_only_first_transform_moves() {
        let mut world = World::new();
        world
            .create_entity("double")
            .add_component(Transform::default())
            .add_component(Transform::default());

        PhysicsSystem::new(10.0).step(&mut world, 1.0);

        let ys: Vec<f32> = world.entities()[0]
            .components()
            .iter()
            .filter_map(|c| c.downcast_ref::<Transform>())
            .map(|t| t.position.y)
            .collect();
        assert_eq!(ys, vec![-10.0, 0.0]);
    }

    #[test]
    fn test_run_uses_context_dt() {
        let mut world = World::new();
        world.create_entity("p").add_component(Transform::default());

        let mut physics = PhysicsSystem::new(2.0);
        physics.run(&mut world, &SystemContext::new(1, 0.25));
        physics.run(&mut world, &SystemContext::new(2, 0.25));

        let y = world.entities()[0]
            .get_component::<Transform>()
            .map(|t| t.position.y);
        assert_eq!(y, Some(-1.0));
    }
}
