//! Camera and lens, producing the per-frame matrices the solvers consume

use glam::{Mat4, Quat, Vec3};

use crate::config::CameraConfig;

/// Errors from lens parameter validation.
///
/// Validation happens here, around the numeric kernels; the kernels
/// themselves never check inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LensError {
    /// Vertical field of view outside (0, pi).
    #[error("field of view must be in (0, pi), got {0}")]
    InvalidFov(f32),
    /// Aspect ratio not strictly positive.
    #[error("aspect ratio must be positive, got {0}")]
    InvalidAspectRatio(f32),
    /// Near plane not strictly positive, or far plane not beyond it.
    #[error("frustum planes must satisfy 0 < near < far, got near {near}, far {far}")]
    InvalidFrustum {
        /// Requested near plane distance.
        near: f32,
        /// Requested far plane distance.
        far: f32,
    },
}

/// Perspective lens parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveLens {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane distance (positive).
    pub near: f32,
    /// Far clipping plane distance (beyond near).
    pub far: f32,
}

impl PerspectiveLens {
    /// Creates a lens, validating the parameters.
    pub fn new(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Result<Self, LensError> {
        if !(fov_y > 0.0 && fov_y < std::f32::consts::PI) {
            return Err(LensError::InvalidFov(fov_y));
        }
        if !(aspect_ratio > 0.0) {
            return Err(LensError::InvalidAspectRatio(aspect_ratio));
        }
        if !(near > 0.0 && far > near) {
            return Err(LensError::InvalidFrustum { near, far });
        }

        Ok(Self {
            fov_y,
            aspect_ratio,
            near,
            far,
        })
    }

    /// Creates a lens from a camera configuration.
    pub fn from_config(config: &CameraConfig, aspect_ratio: f32) -> Result<Self, LensError> {
        Self::new(
            config.fov_degrees.to_radians(),
            aspect_ratio,
            config.near_plane,
            config.far_plane,
        )
    }

    /// Returns the camera-to-clip projection matrix.
    pub fn camera_to_clip(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far)
    }

    /// Updates the aspect ratio (typically on viewport resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

/// Per-frame camera matrices, read-only input to the bounds dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// World-to-camera affine transform.
    pub world_to_camera: Mat4,
    /// Perspective projection matrix.
    pub camera_to_clip: Mat4,
    /// Camera-space z of the near plane (negative; the camera looks down
    /// the negative-z axis).
    pub near_plane_z: f32,
}

/// A positioned, oriented camera with a perspective lens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera orientation in world space.
    pub orientation: Quat,
    /// Lens generating the projection.
    pub lens: PerspectiveLens,
}

impl Camera {
    /// Creates a camera at the given pose.
    pub fn new(position: Vec3, orientation: Quat, lens: PerspectiveLens) -> Self {
        Self {
            position,
            orientation,
            lens,
        }
    }

    /// Returns the world-to-camera transform.
    pub fn world_to_camera(&self) -> Mat4 {
        let rotation = Mat4::from_quat(self.orientation);
        let translation = Mat4::from_translation(self.position);

        (translation * rotation).inverse()
    }

    /// Assembles the per-frame matrices for the bounds dispatch.
    ///
    /// Recomputed once per frame by the caller; the solvers treat the
    /// result as read-only.
    pub fn frame(&self) -> CameraFrame {
        CameraFrame {
            world_to_camera: self.world_to_camera(),
            camera_to_clip: self.lens.camera_to_clip(),
            near_plane_z: -self.lens.near,
        }
    }
}
