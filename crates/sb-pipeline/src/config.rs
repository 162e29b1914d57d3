//! Pipeline configuration structures
//!
//! Tunable policy around the solvers, serializable so an application can
//! load it alongside its other settings.

use serde::{Deserialize, Serialize};

use sb_core::constants::DEFAULT_NEAR_PLANE_Z;

/// Bounds computation configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundsConfig {
    /// Camera-space z of the near plane used for conservative rectangle
    /// handling (negative). Spheres whose near-most point passes this plane
    /// take the near-clip path of the rectangle solver.
    pub near_plane_z: f32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            near_plane_z: DEFAULT_NEAR_PLANE_Z,
        }
    }
}

/// Camera default configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane distance.
    pub near_plane: f32,
    /// Far clipping plane distance.
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 81.0,
            near_plane: 0.01,
            far_plane: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_config_roundtrip() {
        let config = BoundsConfig {
            near_plane_z: -0.05,
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: BoundsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_camera_config_defaults_make_a_valid_lens() {
        let config = CameraConfig::default();
        let lens = crate::camera::PerspectiveLens::from_config(&config, 16.0 / 9.0);
        assert!(lens.is_ok());
    }
}
