//! Projective sphere bounds
//!
//! Analytic 2D bounding primitives for perspective-projected spheres:
//!
//! - [`rect::compute_rectangle`] - exact axis-aligned bounding rectangle,
//!   with conservative handling of spheres straddling the near plane
//!   (Mara & McGuire 2013)
//! - [`silhouette::compute_circle`] - bounding circle of the projected
//!   silhouette (Quilez)
//! - [`silhouette::compute_long_axis`] - major-axis segment of the
//!   projected silhouette
//!
//! All three solvers are stateless pure functions over a camera-space
//! sphere and a perspective projection matrix; they share no state and may
//! run in any order, including in parallel across spheres. Invalid inputs
//! produce NaN rather than an error, matching their role as hot per-frame
//! numeric kernels. Batch dispatch and camera frame production live in the
//! `sb-pipeline` crate.

pub mod bounds;
pub mod constants;
pub mod rect;
pub mod silhouette;
pub mod sphere;

// Re-exports for convenience
pub use bounds::{Circle, LineSegment, Rectangle};
pub use rect::{compute_rectangle, solve_axis};
pub use silhouette::{compute_circle, compute_long_axis};
pub use sphere::{CameraSpaceSphere, Sphere};
