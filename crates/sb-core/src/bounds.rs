//! Output primitives for projected sphere bounds

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Axis-aligned bounding rectangle of a projected sphere, in clip/NDC units.
///
/// `min <= max` componentwise whenever the input sphere was well formed and
/// did not entirely surround the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Rectangle {
    /// Minimum corner.
    pub min: Vec2,
    /// Maximum corner.
    pub max: Vec2,
}

impl Rectangle {
    /// Creates a rectangle from min and max corners.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Returns the width of the rectangle.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Returns the height of the rectangle.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns the center of the rectangle.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Bounding circle approximating a projected sphere silhouette.
///
/// Expressed in clip units relative to the X-axis projection scale: the
/// vertical extent must be rescaled by the viewport aspect ratio before
/// display, which is deliberately left to the consumer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Circle {
    /// Center of the circle.
    pub origin: Vec2,
    /// Radius of the circle (non-negative for well-formed inputs).
    pub radius: f32,
}

/// Major axis of a projected sphere silhouette, in the same clip-space
/// convention as [`Circle`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineSegment {
    /// First extremal point of the silhouette's major axis.
    pub start: Vec2,
    /// Second extremal point of the silhouette's major axis.
    pub end: Vec2,
}
