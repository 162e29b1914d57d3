//! Per-frame batch dispatch feeding spheres through the bound solvers
//!
//! Each sphere's bounds depend only on that sphere and the camera frame, so
//! the dispatch is embarrassingly parallel; this driver runs a sequential
//! loop in fixed-size groups, which yields results identical to any
//! parallel schedule.

use bytemuck::Zeroable;

use sb_core::constants::BATCH_GROUP_SIZE;
use sb_core::{
    CameraSpaceSphere, Circle, LineSegment, Rectangle, Sphere, compute_circle, compute_long_axis,
    compute_rectangle,
};

use crate::camera::CameraFrame;

/// Parallel output arrays, indexed identically to the input sphere slice.
#[derive(Debug, Clone, Default)]
pub struct SphereBoundsOutput {
    /// Bounding rectangle per sphere.
    pub rectangles: Vec<Rectangle>,
    /// Occluder circle per sphere.
    pub circles: Vec<Circle>,
    /// Long-axis segment per sphere.
    pub long_axes: Vec<LineSegment>,
}

impl SphereBoundsOutput {
    /// Creates an empty output set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resizes all three arrays to exactly `len` slots, zero-filling new
    /// entries.
    pub fn resize(&mut self, len: usize) {
        self.rectangles.resize(len, Rectangle::zeroed());
        self.circles.resize(len, Circle::zeroed());
        self.long_axes.resize(len, LineSegment::zeroed());
    }

    /// Number of output slots.
    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    /// Returns true if no slots are allocated.
    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }
}

/// Computes all three bounds for the sphere at `index` and writes them into
/// the matching output slots.
///
/// An index beyond the sphere count is a silent no-op, mirroring the guard a
/// GPU dispatch needs when its group count rounds up past the sphere count.
pub fn compute_sphere_bounds(
    frame: &CameraFrame,
    spheres: &[Sphere],
    index: usize,
    output: &mut SphereBoundsOutput,
) {
    if index >= spheres.len() || index >= output.len() {
        return;
    }
    let sphere = &spheres[index];

    let cs_sphere = CameraSpaceSphere::from_world(&frame.world_to_camera, sphere);
    let clips_near = cs_sphere.clips_near(frame.near_plane_z);

    output.rectangles[index] = compute_rectangle(
        cs_sphere,
        &frame.camera_to_clip,
        frame.near_plane_z,
        clips_near,
    );
    output.circles[index] = compute_circle(cs_sphere, &frame.camera_to_clip);
    output.long_axes[index] = compute_long_axis(cs_sphere, &frame.camera_to_clip);
}

/// Computes bounds for every sphere in the batch.
///
/// Output arrays are resized to match the sphere count exactly. Spheres are
/// processed in groups of [`BATCH_GROUP_SIZE`]; per-sphere results are
/// independent, so the grouping affects throughput only, never results.
pub fn compute_bounds(frame: &CameraFrame, spheres: &[Sphere], output: &mut SphereBoundsOutput) {
    output.resize(spheres.len());

    let groups = spheres.len().div_ceil(BATCH_GROUP_SIZE);
    tracing::debug!(
        "computing bounds for {} spheres in {} groups",
        spheres.len(),
        groups
    );

    for group in 0..groups {
        let start = group * BATCH_GROUP_SIZE;
        let end = (start + BATCH_GROUP_SIZE).min(spheres.len());

        for index in start..end {
            compute_sphere_bounds(frame, spheres, index, output);
        }
    }
}
