//! Fixed-timestep frame loop.
//!
//! Each frame runs, in order:
//!
//! 1. Poll the surface and dispatch input events.
//! 2. Clear the frame.
//! 3. Physics.
//! 4. Render every mesh.
//! 5. Present and swap buffers.
//!
//! The physics time step is always `1 / tick_rate`, independent of how long
//! a frame actually took.

use std::time::Instant;

use anyhow::Result;
use engine_component::World;
use engine_system::{
    EventHandler, InputEvent, InputQueue, KeyState, LogHandler, PhysicsSystem, RenderBackend,
    RenderSystem, System, SystemContext,
};
use tracing::{debug, info, warn};

use crate::config::{FrameConfig, FrameTiming};
use crate::surface::Surface;

/// Key that ends the loop when held.
pub const QUIT_KEY: &str = "Escape";

/// The frame loop state.
#[derive(Debug)]
pub struct FrameLoop<S, B> {
    /// Frames completed so far.
    frame: u64,
    config: FrameConfig,
    timing: FrameTiming,
    world: World,
    physics: PhysicsSystem,
    renderer: RenderSystem<B>,
    input: InputQueue,
    keys: KeyState,
    surface: S,
}

impl<S: Surface, B: RenderBackend> FrameLoop<S, B> {
    /// # Errors
    ///
    /// Fails if `config` does not yield usable timing, see
    /// [`FrameConfig::timing`].
    pub fn new(config: FrameConfig, world: World, surface: S, backend: B) -> Result<Self> {
        let timing = config.timing()?;
        let physics = PhysicsSystem::new(config.gravity);
        Ok(Self {
            frame: 0,
            config,
            timing,
            world,
            physics,
            renderer: RenderSystem::new(backend),
            input: InputQueue::new(),
            keys: KeyState::new(),
            surface,
        })
    }

    /// Returns the number of frames completed.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[must_use]
    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    #[cfg(test)]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn renderer(&self) -> &RenderSystem<B> {
        &self.renderer
    }

    /// Give the world back, ending the loop's ownership of it.
    #[must_use]
    pub fn into_world(self) -> World {
        self.world
    }

    /// Run one frame.
    pub fn tick(&mut self) {
        self.frame += 1;
        let ctx = SystemContext::new(self.frame, self.timing.dt);

        self.input.extend(self.surface.poll_events());
        let keys = &mut self.keys;
        self.input.dispatch(&mut |event: &InputEvent| {
            LogHandler.handle(event);
            keys.handle(event);
        });

        self.renderer.clear();
        self.physics.run(&mut self.world, &ctx);
        self.renderer.run(&mut self.world, &ctx);
        self.renderer.present();
        self.surface.swap_buffers();

        debug!(frame = self.frame, dt = ctx.dt, entities = self.world.len(), "frame complete");
    }

    fn should_stop(&self, frames_run: u64) -> bool {
        if self.surface.should_close() {
            info!(frame = self.frame, "surface closed");
            return true;
        }
        if self.keys.is_held(QUIT_KEY) {
            info!(frame = self.frame, key = QUIT_KEY, "quit requested");
            return true;
        }
        self.config.max_frames > 0 && frames_run >= self.config.max_frames
    }

    /// Run frames until the surface closes, the quit key is held, or the
    /// configured frame limit is reached. Returns the number of frames run.
    pub fn run(&mut self) -> u64 {
        let frame_duration = self.timing.budget;
        let mut frames_run = 0u64;

        info!(
            tick_rate = self.config.tick_rate,
            max_frames = self.config.max_frames,
            entities = self.world.len(),
            "starting frame loop"
        );

        while !self.should_stop(frames_run) {
            let start = Instant::now();
            self.tick();
            frames_run += 1;

            let elapsed = start.elapsed();
            if elapsed < frame_duration {
                std::thread::sleep(frame_duration - elapsed);
            } else {
                warn!(
                    frame = self.frame,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = frame_duration.as_millis() as u64,
                    "frame exceeded time budget"
                );
            }
        }

        info!(frames = frames_run, "frame loop complete");
        frames_run
    }
}
