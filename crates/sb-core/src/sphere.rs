//! Sphere input types (world space and camera space)

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// A sphere in world space.
///
/// Layout matches a GPU storage-buffer element (16 bytes, no padding), so a
/// caller may upload sphere arrays unchanged.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Sphere {
    /// Center of the sphere in world space.
    pub center: Vec3,
    /// Radius of the sphere (non-negative).
    pub radius: f32,
}

impl Sphere {
    /// Creates a new sphere from center and radius.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// A sphere transformed into camera space (camera at the origin, looking
/// down the negative-z axis).
///
/// This is the input to all three bound solvers. The transform is assumed
/// rigid, so the radius carries over unchanged.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraSpaceSphere {
    /// Center of the sphere in camera space.
    pub center: Vec3,
    /// Radius of the sphere (non-negative).
    pub radius: f32,
}

impl CameraSpaceSphere {
    /// Creates a camera-space sphere directly from center and radius.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Transforms a world-space sphere into camera space.
    pub fn from_world(world_to_camera: &Mat4, sphere: &Sphere) -> Self {
        Self {
            center: world_to_camera.transform_point3(sphere.center),
            radius: sphere.radius,
        }
    }

    /// Returns true if the sphere's near-most point lies past the near plane
    /// along the view direction.
    ///
    /// This is the per-sphere test that decides the `clips_near` flag for
    /// the rectangle solver. Passing `false` for a sphere that does clip the
    /// plane yields a malformed rectangle; that fast path is the caller's
    /// tradeoff to make.
    pub fn clips_near(&self, near_plane_z: f32) -> bool {
        self.center.z + self.radius >= near_plane_z
    }
}
