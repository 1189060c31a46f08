//! Mesh rendering pass.
//!
//! The core does not talk to a GPU. [`RenderSystem`] walks the world in order,
//! turns every entity with a [`MeshRenderer`] into a [`MeshDraw`], and hands
//! it to a [`RenderBackend`]. What a backend does with mesh and material
//! paths (load, cache, draw) is its own business.

use engine_component::{EntityId, World};
use engine_defaults::{MeshRenderer, Transform};
use engine_math::Mat4;
use tracing::{debug, info};

use crate::System;
use crate::context::SystemContext;

/// Background colour used when a frame is cleared.
pub const CLEAR_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];

/// One mesh submission.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshDraw {
    pub entity: EntityId,
    pub name: String,
    pub mesh_path: String,
    pub material_path: String,
    /// Model matrix from the entity's [`Transform`], or identity if it has none.
    pub model: Mat4,
}

/// Receiver of draw calls.
pub trait RenderBackend {
    /// Start a frame by clearing colour and depth.
    fn clear(&mut self, color: [f32; 4]);

    fn draw_mesh(&mut self, draw: &MeshDraw);

    /// Finish the frame.
    fn present(&mut self);
}

/// Backend that reports draws through `tracing` instead of drawing.
#[derive(Debug, Default)]
pub struct LogBackend {
    frames: u64,
    draws_this_frame: usize,
}

impl LogBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames presented so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderBackend for LogBackend {
    fn clear(&mut self, _color: [f32; 4]) {
        self.draws_this_frame = 0;
    }

    fn draw_mesh(&mut self, draw: &MeshDraw) {
        self.draws_this_frame += 1;
        info!(
            entity = draw.entity.get(),
            name = %draw.name,
            mesh = %draw.mesh_path,
            material = %draw.material_path,
            "rendering mesh"
        );
    }

    fn present(&mut self) {
        self.frames += 1;
        debug!(frame = self.frames, draws = self.draws_this_frame, "frame presented");
    }
}

/// Backend that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl RenderBackend for NullBackend {
    fn clear(&mut self, _color: [f32; 4]) {}

    fn draw_mesh(&mut self, _draw: &MeshDraw) {}

    fn present(&mut self) {}
}

/// Submits every drawable entity to a backend, in world order.
#[derive(Debug)]
pub struct RenderSystem<B> {
    backend: B,
    clear_color: [f32; 4],
}

impl<B: RenderBackend> RenderSystem<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            clear_color: CLEAR_COLOR,
        }
    }

    #[must_use]
    pub fn with_clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Clear the frame with the configured colour.
    pub fn clear(&mut self) {
        self.backend.clear(self.clear_color);
    }

    pub fn present(&mut self) {
        self.backend.present();
    }

    /// Build the draw list for `world` without submitting it.
    #[must_use]
    pub fn collect_draws(world: &World) -> Vec<MeshDraw> {
        world
            .query::<MeshRenderer>()
            .map(|(entity, renderer)| MeshDraw {
                entity: entity.id(),
                name: entity.name().to_string(),
                mesh_path: renderer.mesh_path.clone(),
                material_path: renderer.material_path.clone(),
                model: entity
                    .get_component::<Transform>()
                    .map_or(Mat4::IDENTITY, Transform::to_matrix),
            })
            .collect()
    }

    /// Submit every drawable entity. Returns the number of draws.
    pub fn draw(&mut self, world: &World) -> usize {
        let draws = Self::collect_draws(world);
        for draw in &draws {
            self.backend.draw_mesh(draw);
        }
        draws.len()
    }
}

impl<B: RenderBackend> System for RenderSystem<B> {
    fn name(&self) -> &str {
        "render"
    }

    fn run(&mut self, world: &mut World, _ctx: &SystemContext) {
        self.draw(world);
    }
}

#[cfg(test)]
mod tests {
    use engine_defaults::Camera;
    use engine_math::Vec3;

    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        clears: Vec<[f32; 4]>,
        draws: Vec<MeshDraw>,
        presents: usize,
    }

    impl RenderBackend for Recorder {
        fn clear(&mut self, color: [f32; 4]) {
            self.clears.push(color);
        }

        fn draw_mesh(&mut self, draw: &MeshDraw) {
            self.draws.push(draw.clone());
        }

        fn present(&mut self) {
            self.presents += 1;
        }
    }

    fn scene() -> World {
        let mut world = World::new();
        world
            .create_entity("rock")
            .add_component(MeshRenderer::new("rock.obj").with_material("stone.mat"));
        world.create_entity("camera").add_component(Camera::default());
        world
            .create_entity("player")
            .add_component(Transform::from_position(Vec3::new(0.0, 1.0, 0.0)))
            .add_component(MeshRenderer::new("m.obj"));
        world
    }

    #[test]
    fn test_draws_only_mesh_entities_in_order() {
        let world = scene();
        let mut renderer = RenderSystem::new(Recorder::default());
        assert_eq!(renderer.draw(&world), 2);

        let names: Vec<_> = renderer.backend().draws.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["rock", "player"]);
        assert_eq!(renderer.backend().draws[0].material_path, "stone.mat");
    }

    #[test]
    fn test_model_matrix_follows_transform() {
        let draws = RenderSystem::<NullBackend>::collect_draws(&scene());
        assert_eq!(draws[0].model, Mat4::IDENTITY);
        assert_eq!(
            draws[1].model,
            Transform::from_position(Vec3::new(0.0, 1.0, 0.0)).to_matrix()
        );
    }

    #[test]
    fn test_clear_and_present() {
        let mut renderer =
            RenderSystem::new(Recorder::default()).with_clear_color([0.0, 0.0, 0.0, 1.0]);
        renderer.clear();
        renderer.present();
        assert_eq!(renderer.backend().clears, vec![[0.0, 0.0, 0.0, 1.0]]);
        assert_eq!(renderer.backend().presents, 1);
    }

    #[test]
    fn test_default_clear_color() {
        let mut renderer = RenderSystem::new(Recorder::default());
        renderer.clear();
        assert_eq!(renderer.backend_mut().clears, vec![CLEAR_COLOR]);
    }

    #[test]
    fn test_log_backend_counts_frames() {
        let mut world = scene();
        let mut renderer = RenderSystem::new(LogBackend::new());
        for frame in 1..=3 {
            renderer.clear();
            renderer.run(&mut world, &SystemContext::new(frame, 0.1));
            renderer.present();
        }
        assert_eq!(renderer.backend().frames(), 3);
    }
}
