//! # engine_system
//!
//! Systems are the per-frame passes that walk a [`World`] and read or write
//! the components they care about. They hold no world state of their own; the
//! world is always passed in explicitly.
//!
//! This crate provides:
//!
//! - [`System`] trait and [`SystemContext`]: the per-frame calling convention.
//! - [`PhysicsSystem`]: constant gravity on every [`Transform`](engine_defaults::Transform).
//! - [`RenderSystem`]: submits every [`MeshRenderer`](engine_defaults::MeshRenderer)
//!   to a [`RenderBackend`].
//! - [`InputQueue`] / [`EventHandler`]: key press and release delivery.

pub mod context;
pub mod input;
pub mod physics;
pub mod render;

use engine_component::World;

pub use context::SystemContext;
pub use input::{EventHandler, InputEvent, InputQueue, KeyState, LogHandler};
pub use physics::{GRAVITY, PhysicsSystem};
pub use render::{CLEAR_COLOR, LogBackend, MeshDraw, NullBackend, RenderBackend, RenderSystem};

/// A pass over the world, run once per frame.
pub trait System {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Run the pass.
    fn run(&mut self, world: &mut World, ctx: &SystemContext);
}
