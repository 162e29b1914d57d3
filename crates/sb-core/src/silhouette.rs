//! Occluder circle and long axis of a perspective-projected sphere.
//!
//! Both solvers follow Quilez's projected-sphere construction: under
//! perspective, a sphere's silhouette is an ellipse whose major axis points
//! radially away from the screen center. The circle circumscribes that
//! ellipse (its radius equals the semi-major axis), and the long axis is the
//! major-axis segment itself, so the pair brackets the silhouette for
//! occlusion tests.
//!
//! Neither solver is near-plane aware; results are only meaningful for
//! spheres fully in front of the camera. Outputs are expressed relative to
//! the X-axis projection scale, with the aspect-ratio rescale of the
//! vertical extent left to the consumer.

use glam::{Mat4, Vec2};

use crate::bounds::{Circle, LineSegment};
use crate::constants::SINGULARITY_NUDGE;
use crate::sphere::CameraSpaceSphere;

/// Intermediate scalars shared by the circle and long-axis solvers.
///
/// Factored out so the two kernels cannot drift; each remains independently
/// dispatchable and observable behavior is unchanged from inlined copies.
struct Silhouette {
    /// Sphere center with the on-axis singularity nudge applied.
    lateral: Vec2,
    /// Camera-space depth of the sphere center.
    z: f32,
    /// radius² − z²; squared, this is the silhouette division's divisor.
    k: f32,
    /// Squared semi-major axis per unit of squared lateral offset.
    factor: f32,
}

impl Silhouette {
    fn new(sphere: CameraSpaceSphere) -> Self {
        let CameraSpaceSphere { center, radius } = sphere;

        let mut x = center.x;
        // A center exactly on the forward axis makes the factor a 0/0. The
        // fixed nudge sidesteps the exact case only; nearby values are not
        // specially handled.
        if x == 0.0 && center.y == 0.0 {
            x += SINGULARITY_NUDGE;
        }
        let lateral = Vec2::new(x, center.y);

        let r_sq = radius * radius;
        let l_sq = lateral.length_squared();
        let z_sq = center.z * center.z;
        let k = r_sq - z_sq;
        let factor = -r_sq * (r_sq - l_sq - z_sq) / (l_sq * k * k);

        Silhouette {
            lateral,
            z: center.z,
            k,
            factor,
        }
    }

    /// Projected center of the silhouette ellipse, using both projection
    /// scales.
    fn origin(&self, camera_to_clip: &Mat4) -> Vec2 {
        let scaled = Vec2::new(
            camera_to_clip.x_axis.x * self.lateral.x,
            camera_to_clip.y_axis.y * self.lateral.y,
        );

        self.z * scaled / self.k
    }

    /// Semi-major axis vector, scaled by the X projection scale only.
    fn half_axis(&self, camera_to_clip: &Mat4) -> Vec2 {
        self.factor.sqrt() * camera_to_clip.x_axis.x * self.lateral
    }
}

/// Computes the bounding circle of a projected sphere's silhouette.
pub fn compute_circle(sphere: CameraSpaceSphere, camera_to_clip: &Mat4) -> Circle {
    let silhouette = Silhouette::new(sphere);

    let scaled = camera_to_clip.x_axis.x * silhouette.lateral;
    let radius = (silhouette.factor * scaled.length_squared()).sqrt();

    Circle {
        origin: silhouette.origin(camera_to_clip),
        radius,
    }
}

/// Computes the major-axis segment of a projected sphere's silhouette.
pub fn compute_long_axis(sphere: CameraSpaceSphere, camera_to_clip: &Mat4) -> LineSegment {
    let silhouette = Silhouette::new(sphere);

    let origin = silhouette.origin(camera_to_clip);
    let half_axis = silhouette.half_axis(camera_to_clip);

    LineSegment {
        start: origin - half_axis,
        end: origin + half_axis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::solve_axis;
    use approx::assert_relative_eq;
    use glam::Vec3;

    #[test]
    fn test_on_axis_sphere_is_finite_and_centered() {
        let sphere = CameraSpaceSphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0);

        let circle = compute_circle(sphere, &Mat4::IDENTITY);
        assert!(circle.origin.is_finite());
        assert!(circle.radius.is_finite());
        assert_relative_eq!(circle.origin.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(circle.origin.y, 0.0, epsilon = 1e-4);

        // tan of the silhouette half-angle: r / sqrt(d^2 - r^2).
        assert_relative_eq!(circle.radius, 1.0 / 24.0_f32.sqrt(), max_relative = 1e-4);

        let axis = compute_long_axis(sphere, &Mat4::IDENTITY);
        assert!(axis.start.is_finite());
        assert!(axis.end.is_finite());
        assert_relative_eq!((axis.end - axis.start).length(), 2.0 * circle.radius, max_relative = 1e-4);
    }

    #[test]
    fn test_circle_sits_on_the_projected_center_side() {
        let sphere = CameraSpaceSphere::new(Vec3::new(3.0, 0.0, -10.0), 1.0);
        let circle = compute_circle(sphere, &Mat4::IDENTITY);

        // The sphere center projects to +0.3; the silhouette ellipse center
        // lands slightly outward of it.
        assert!(circle.origin.x > 0.29);
        assert!(circle.origin.y.abs() < 1e-6);
        assert_relative_eq!(circle.origin.x, 30.0 / 99.0, max_relative = 1e-5);
    }

    #[test]
    fn test_circle_radius_matches_rectangle_radial_extent() {
        // With the center offset purely along x, the silhouette major axis
        // is horizontal, so the circle radius must equal half the exact
        // rectangle's width.
        let sphere = CameraSpaceSphere::new(Vec3::new(3.0, 0.0, -10.0), 1.0);
        let circle = compute_circle(sphere, &Mat4::IDENTITY);

        let (low, high) = solve_axis(3.0, -10.0, 1.0, -0.01, 1.0, false);
        assert_relative_eq!(circle.radius, (high - low) * 0.5, max_relative = 1e-4);
    }

    #[test]
    fn test_long_axis_endpoints_are_the_silhouette_extremes() {
        // Same configuration: the major-axis endpoints are the radial
        // extremes of the silhouette, which along x are exactly the
        // rectangle's bounds.
        let sphere = CameraSpaceSphere::new(Vec3::new(3.0, 0.0, -10.0), 1.0);
        let axis = compute_long_axis(sphere, &Mat4::IDENTITY);

        let (low, high) = solve_axis(3.0, -10.0, 1.0, -0.01, 1.0, false);
        let (near_end, far_end) = if axis.start.x <= axis.end.x {
            (axis.start, axis.end)
        } else {
            (axis.end, axis.start)
        };
        assert_relative_eq!(near_end.x, low, max_relative = 1e-4);
        assert_relative_eq!(far_end.x, high, max_relative = 1e-4);
        assert_relative_eq!(near_end.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_long_axis_points_radially() {
        let sphere = CameraSpaceSphere::new(Vec3::new(2.0, 2.0, -12.0), 1.0);
        let axis = compute_long_axis(sphere, &Mat4::IDENTITY);

        let direction = (axis.end - axis.start).normalize();
        let radial = Vec2::new(2.0, 2.0).normalize();
        assert_relative_eq!(direction.x.abs(), radial.x, max_relative = 1e-4);
        assert_relative_eq!(direction.y.abs(), radial.y, max_relative = 1e-4);
    }

    #[test]
    fn test_circle_radius_uses_the_x_scale_only() {
        // Anisotropic projection: the radius must follow m00 alone, leaving
        // the vertical rescale to the consumer.
        let sphere = CameraSpaceSphere::new(Vec3::new(1.0, 2.0, -10.0), 1.0);
        let anisotropic = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 2.0, 0.01, 100.0);
        let uniform = Mat4::IDENTITY;

        let scaled = compute_circle(sphere, &anisotropic);
        let unscaled = compute_circle(sphere, &uniform);

        // m00 = 0.5 for fov_y = pi/2 at aspect 2.
        assert_relative_eq!(scaled.radius, 0.5 * unscaled.radius, max_relative = 1e-5);
    }
}
