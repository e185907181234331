//! Ray count clamping and the distance between neighbouring probes.

use bevy::prelude::*;

use crate::bounds::Bounds2d;

/// Smallest number of rays a fan may have. One ray per corner.
pub const MIN_RAY_COUNT: u32 = 2;

/// Clamp a ray count to at least [`MIN_RAY_COUNT`]. There is no upper bound.
pub fn clamp_ray_count(count: u32) -> u32 {
    count.max(MIN_RAY_COUNT)
}

/// Distance between consecutive parallel probe rays.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Default)]
pub struct RaySpacing {
    /// Vertical gap between the horizontal (wall) rays.
    pub horizontal: f32,
    /// Horizontal gap between the vertical (ground/ceiling) rays.
    pub vertical: f32,
}

impl RaySpacing {
    /// Spread the rays evenly across the inset bounds.
    ///
    /// Both counts are clamped first, so the divisor is never zero.
    pub fn compute(bounds: &Bounds2d, horizontal_count: u32, vertical_count: u32) -> Self {
        let horizontal_count = clamp_ray_count(horizontal_count);
        let vertical_count = clamp_ray_count(vertical_count);

        Self {
            horizontal: bounds.height() / (horizontal_count - 1) as f32,
            vertical: bounds.width() / (vertical_count - 1) as f32,
        }
    }
}
