//! Perspective camera component.

use engine_component::Component;
use engine_math::Mat4;
use serde::{Deserialize, Serialize};

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Camera {
    pub const DEFAULT_FOV: f32 = 45.0;
    pub const DEFAULT_NEAR: f32 = 0.1;
    pub const DEFAULT_FAR: f32 = 100.0;

    /// Right-handed, OpenGL-style (`-1..1` depth) projection matrix.
    #[must_use]
    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov.to_radians(),
            aspect_ratio,
            self.near_plane,
            self.far_plane,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: Self::DEFAULT_FOV,
            near_plane: Self::DEFAULT_NEAR,
            far_plane: Self::DEFAULT_FAR,
        }
    }
}

impl Component for Camera {
    fn type_name() -> &'static str {
        "Camera"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cam = Camera::default();
        assert_eq!(cam.fov, 45.0);
        assert_eq!(cam.near_plane, 0.1);
        assert_eq!(cam.far_plane, 100.0);
    }

    #[test]
    fn test_projection_is_finite() {
        let m = Camera::default().projection(800.0 / 600.0);
        assert!(m.is_finite());
        assert_ne!(m, Mat4::IDENTITY);
    }
}
