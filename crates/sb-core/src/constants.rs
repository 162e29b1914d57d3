//! Global constants for sb-core

/// Lateral nudge applied when a sphere center sits exactly on the camera's
/// forward axis, to avoid a 0/0 in the silhouette division.
///
/// This guards the exact-zero case only; values merely close to zero are
/// left alone and may lose precision.
pub const SINGULARITY_NUDGE: f32 = 0.00001;

/// Default camera-space z of the near clipping plane (negative, since the
/// camera looks down the negative-z axis).
pub const DEFAULT_NEAR_PLANE_Z: f32 = -0.01;

/// Number of spheres processed per batch group.
pub const BATCH_GROUP_SIZE: usize = 256;
