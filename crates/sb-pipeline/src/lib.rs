//! Sphere bounds pipeline
//!
//! Everything around the `sb-core` solvers: camera frame production, tunable
//! configuration, and the per-frame batch dispatch that transforms
//! world-space spheres into camera space, decides the near-clip flag per
//! sphere, and writes rectangle/circle/long-axis results into parallel
//! output arrays.
//!
//! # Module Structure
//!
//! ```text
//! sb-pipeline/
//! ├── camera.rs   # PerspectiveLens, Camera, CameraFrame
//! ├── config.rs   # BoundsConfig, CameraConfig
//! └── batch.rs    # SphereBoundsOutput, batch dispatch
//! ```

pub mod batch;
pub mod camera;
pub mod config;

// Re-exports for convenience
pub use batch::{SphereBoundsOutput, compute_bounds, compute_sphere_bounds};
pub use camera::{Camera, CameraFrame, LensError, PerspectiveLens};
pub use config::{BoundsConfig, CameraConfig};
