//! # engine_app
//!
//! Runs the engine's frame loop on a headless surface.
//!
//! ## Startup Sequence
//!
//! 1. Parse flags (each also readable from an `ENGINE_*` variable).
//! 2. Build the world: load `--scene` if given, otherwise spawn the demo
//!    player (transform + mesh).
//! 3. Run the frame loop until the surface closes or `--max-frames` is hit.
//! 4. Save the world to `--save` if given.

mod config;
mod frame;
mod surface;

use anyhow::{Context, Result};
use clap::Parser;
use engine_component::World;
use engine_defaults::{MeshRenderer, Transform, standard_registry};
use engine_system::LogBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Args;
use frame::FrameLoop;
use surface::HeadlessSurface;

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("engine_app=info".parse()?)
                .add_directive("engine_system=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = args.frame_config()?;

    let world = match &args.scene {
        Some(path) => {
            let mut world = World::new();
            engine_scene::load_world(path, &standard_registry(), &mut world)
                .with_context(|| format!("loading scene {}", path.display()))?;
            world
        }
        None => demo_world(),
    };

    let surface = HeadlessSurface::new(args.width, args.height, args.title.clone())
        .close_after(config.max_frames);
    let (width, height) = surface.size();
    info!(width, height, title = surface.title(), "headless surface ready");

    let mut frames = FrameLoop::new(config, world, surface, LogBackend::new())?;
    frames.run();
    info!(
        frames = frames.frame(),
        entities = frames.world().len(),
        presented = frames.renderer().backend().frames(),
        keys_held = frames.keys().held_count(),
        "frame loop finished"
    );

    let world = frames.into_world();
    if let Some(path) = &args.save {
        engine_scene::save_world(&world, path)
            .with_context(|| format!("saving scene {}", path.display()))?;
    }

    info!("engine shut down");
    Ok(())
}

/// A single falling, drawable player.
fn demo_world() -> World {
    let mut world = World::new();
    world
        .create_entity("Player")
        .add_component(Transform::default())
        .add_component(MeshRenderer::new("assets/player.obj"));
    world
}
