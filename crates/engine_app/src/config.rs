//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use engine_system::GRAVITY;

#[derive(Debug, Parser)]
#[command(name = "engine_app", about = "Headless frame loop over an entity/component world")]
pub struct Args {
    /// Frames per second; also fixes the physics time step at 1 / rate.
    #[arg(long, env = "ENGINE_TICK_RATE", default_value_t = 60.0)]
    pub tick_rate: f64,

    /// Stop after this many frames (0 = run until the surface closes).
    #[arg(long, env = "ENGINE_MAX_FRAMES", default_value_t = 0)]
    pub max_frames: u64,

    /// Downward acceleration applied to every transform.
    #[arg(long, env = "ENGINE_GRAVITY", default_value_t = GRAVITY)]
    pub gravity: f32,

    /// JSON scene to load instead of the built-in demo scene.
    #[arg(long, env = "ENGINE_SCENE")]
    pub scene: Option<PathBuf>,

    /// Write the world to this JSON scene file after the loop ends.
    #[arg(long)]
    pub save: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    #[arg(long, default_value = "Game Engine")]
    pub title: String,
}

impl Args {
    /// Extract and validate the frame loop settings.
    ///
    /// # Errors
    ///
    /// See [`FrameConfig::timing`].
    pub fn frame_config(&self) -> Result<FrameConfig> {
        let config = FrameConfig {
            tick_rate: self.tick_rate,
            max_frames: self.max_frames,
            gravity: self.gravity,
        };
        config.timing()?;
        Ok(config)
    }
}

/// Configuration for the frame loop.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConfig {
    /// Target frames per second.
    pub tick_rate: f64,
    /// Maximum number of frames to run (0 = unlimited).
    pub max_frames: u64,
    /// Gravity handed to the physics system.
    pub gravity: f32,
}

impl FrameConfig {
    /// Derive the per-frame wall-clock budget and physics step.
    ///
    /// # Errors
    ///
    /// Fails if the tick rate is not a positive finite number, if its period
    /// does not fit a [`Duration`], if the period rounds to zero as an `f32`
    /// time step, or if gravity is not finite.
    pub fn timing(&self) -> Result<FrameTiming> {
        ensure!(
            self.tick_rate.is_finite() && self.tick_rate > 0.0,
            "tick rate must be a positive number, got {}",
            self.tick_rate
        );
        ensure!(
            self.gravity.is_finite(),
            "gravity must be a finite number, got {}",
            self.gravity
        );
        let period = 1.0 / self.tick_rate;
        let budget = Duration::try_from_secs_f64(period)
            .with_context(|| format!("tick rate {} is too low", self.tick_rate))?;
        let dt = period as f32;
        ensure!(
            dt.is_normal(),
            "tick rate {} is too high for a usable time step",
            self.tick_rate
        );
        Ok(FrameTiming { budget, dt })
    }
}

/// Validated timing derived from a [`FrameConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Wall-clock time one frame may take.
    pub budget: Duration,
    /// Physics time step in seconds, always `1 / tick_rate`.
    pub dt: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            max_frames: 0,
            gravity: GRAVITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let args = Args::try_parse_from([
            "engine_app",
            "--tick-rate",
            "30",
            "--max-frames",
            "5",
            "--gravity",
            "1.5",
            "--save",
            "out.json",
        ])
        .unwrap();
        let config = args.frame_config().unwrap();
        assert_eq!(config.tick_rate, 30.0);
        assert_eq!(config.max_frames, 5);
        assert_eq!(config.gravity, 1.5);
        assert_eq!(args.save, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_window_defaults() {
        let args = Args::try_parse_from(["engine_app"]).unwrap();
        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.title, "Game Engine");
    }

    #[test]
    fn test_rejects_non_positive_tick_rate() {
        let args = Args::try_parse_from(["engine_app", "--tick-rate", "0"]).unwrap();
        assert!(args.frame_config().is_err());
    }

    #[test]
    fn test_rejects_tick_rate_with_unrepresentable_period() {
        for rate in ["1e-30", "1e300", "NaN", "inf"] {
            let args = Args::try_parse_from(["engine_app", "--tick-rate", rate]).unwrap();
            assert!(args.frame_config().is_err(), "tick rate {rate} accepted");
        }
    }

    #[test]
    fn test_rejects_non_finite_gravity() {
        for gravity in ["NaN", "inf", "-inf"] {
            let args = Args::try_parse_from(["engine_app", "--gravity", gravity]).unwrap();
            assert!(args.frame_config().is_err(), "gravity {gravity} accepted");
        }
    }

    #[test]
    fn test_default_timing() {
        let timing = FrameConfig::default().timing().unwrap();
        assert_eq!(timing.budget, Duration::from_secs_f64(1.0 / 60.0));
        assert!((timing.dt - 1.0 / 60.0).abs() < f32::EPSILON);
    }
}
