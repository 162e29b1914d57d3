//! Axis-aligned bounding rectangle of a perspective-projected sphere.
//!
//! Closed-form tangent-line construction after Mara & McGuire, "2D
//! Polyhedral Bounds of a Clipped, Perspective-Projected 3D Sphere" (JCGT
//! 2013). A sphere is rotationally symmetric, so the 2D problem splits into
//! two independent 1D problems: the X bound depends only on the center's
//! (x, z) and the X projection scale, and the Y bound is the same formula
//! over (y, z).

use glam::{Mat4, Vec2};

use crate::bounds::Rectangle;
use crate::sphere::CameraSpaceSphere;

/// Computes the bounding interval of a projected sphere along one axis.
///
/// `c` is the sphere center's coordinate along the axis, `z` its camera-space
/// depth (negative in front of the camera), and `projection_scale` the
/// matching diagonal entry of the projection matrix. Returns `(low, high)`
/// in clip/NDC units.
///
/// The two tangent lines from the camera to the sphere's silhouette circle
/// are built as numerator/divisor pairs with a common factor of
/// `t / (c² + z²)` cancelled out; the division is deferred to the end and
/// fused into a single divide shared by both bounds.
///
/// When `clips_near` is set, a tangent point that lies nearer than the near
/// plane (or a camera inside the sphere) is replaced by the point where the
/// sphere's surface crosses the plane. The caller must only set the flag
/// when the sphere's near-most point has actually passed the plane,
/// otherwise the lateral square root has no real value and NaN propagates.
pub fn solve_axis(
    c: f32,
    z: f32,
    radius: f32,
    near_plane_z: f32,
    projection_scale: f32,
    clips_near: bool,
) -> (f32, f32) {
    let len_sq = c * c + z * z;
    let r_sq = radius * radius;
    let t_sq = len_sq - r_sq;
    let camera_inside = t_sq <= 0.0;
    // Camera-to-tangent-point distance; NaN (and unused) when inside.
    let t = t_sq.sqrt();

    let mut low_num = t * c + radius * z;
    let mut low_div = t * z - radius * c;
    let mut high_num = t * c - radius * z;
    let mut high_div = t * z + radius * c;

    if clips_near {
        // The divisors were computed without the common factor t / len_sq,
        // so rescale the near-plane threshold into the same units before
        // comparing depths.
        let threshold = near_plane_z * len_sq / t;
        let lateral = (r_sq - (near_plane_z - z) * (near_plane_z - z)).sqrt();

        if camera_inside || low_div > threshold {
            low_num = c - lateral;
            low_div = near_plane_z;
        }
        if camera_inside || high_div > threshold {
            high_num = c + lateral;
            high_div = near_plane_z;
        }
    }

    // Two bounds, one division. Exact in infinite precision; kept fused to
    // preserve the edge-case numerical behavior.
    let scale = -projection_scale / (low_div * high_div);
    let a = low_num * scale * high_div;
    let b = high_num * scale * low_div;

    (a.min(b), a.max(b))
}

/// Computes the 2D axis-aligned bounding rectangle of a projected sphere.
///
/// `clips_near` must be decided per sphere by the caller, see
/// [`CameraSpaceSphere::clips_near`]. Passing `false` for a sphere that does
/// cross the near plane produces a malformed rectangle; skipping the flag is
/// an accepted fast-path tradeoff, not an error the solver reports.
pub fn compute_rectangle(
    sphere: CameraSpaceSphere,
    camera_to_clip: &Mat4,
    near_plane_z: f32,
    clips_near: bool,
) -> Rectangle {
    let CameraSpaceSphere { center, radius } = sphere;

    let (min_x, max_x) = solve_axis(
        center.x,
        center.z,
        radius,
        near_plane_z,
        camera_to_clip.x_axis.x,
        clips_near,
    );
    let (min_y, max_y) = solve_axis(
        center.y,
        center.z,
        radius,
        near_plane_z,
        camera_to_clip.y_axis.y,
        clips_near,
    );

    Rectangle::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
}
