//! Physics and rendering running together over one world.

use engine_component::World;
use engine_defaults::{Camera, MeshRenderer, Transform};
use engine_math::Vec3;
use engine_system::{
    InputEvent, InputQueue, KeyState, MeshDraw, PhysicsSystem, RenderBackend, RenderSystem,
    System, SystemContext,
};

#[derive(Debug, Default)]
struct Recorder {
    frames: Vec<Vec<MeshDraw>>,
}

impl RenderBackend for Recorder {
    fn clear(&mut self, _color: [f32; 4]) {
        self.frames.push(Vec::new());
    }

    fn draw_mesh(&mut self, draw: &MeshDraw) {
        if let Some(frame) = self.frames.last_mut() {
            frame.push(draw.clone());
        }
    }

    fn present(&mut self) {}
}

#[test]
fn player_falls_and_is_drawn_where_it_is() {
    let mut world = World::new();
    world
        .create_entity("Player")
        .add_component(Transform::default())
        .add_component(MeshRenderer::new("m.obj"));
    world.create_entity("Camera").add_component(Camera::default());

    let mut physics = PhysicsSystem::default();
    let mut renderer = RenderSystem::new(Recorder::default());

    for frame in 1..=60 {
        let ctx = SystemContext::at_rate(frame, 60.0);
        renderer.clear();
        physics.run(&mut world, &ctx);
        renderer.run(&mut world, &ctx);
        renderer.present();
    }

    let y = world
        .find("Player")
        .and_then(|e| e.get_component::<Transform>())
        .map(|t| t.position.y)
        .unwrap();
    assert!((y - -9.8).abs() < 1e-3, "y = {y}");

    let frames = &renderer.backend().frames;
    assert_eq!(frames.len(), 60);
    assert!(frames.iter().all(|f| f.len() == 1 && f[0].name == "Player"));

    let last = frames[59][0].model.w_axis.truncate();
    assert!((last - Vec3::new(0.0, y, 0.0)).length() < 1e-6);
}

#[test]
fn systems_are_usable_as_trait_objects() {
    let mut world = World::new();
    world.create_entity("Player").add_component(Transform::default());

    let mut systems: Vec<Box<dyn System>> = vec![
        Box::new(PhysicsSystem::new(1.0)),
        Box::new(RenderSystem::new(Recorder::default())),
    ];
    let names: Vec<_> = systems.iter().map(|s| s.name().to_string()).collect();
    assert_eq!(names, vec!["physics", "render"]);

    for system in &mut systems {
        system.run(&mut world, &SystemContext::new(1, 1.0));
    }
    assert_eq!(
        world.entities()[0].get_component::<Transform>().map(|t| t.position.y),
        Some(-1.0)
    );
}

#[test]
fn input_reaches_key_state() {
    let mut queue = InputQueue::new();
    queue.extend([InputEvent::press("W"), InputEvent::press("D")]);
    let mut keys = KeyState::new();
    queue.dispatch(&mut keys);
    assert!(keys.is_held("W") && keys.is_held("D"));
}
