//! Corner points that probe fans start from.

use bevy::prelude::*;

use crate::bounds::Bounds2d;

/// The four corners of the inset sensor box.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Default)]
pub struct RaycastOrigins {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

impl RaycastOrigins {
    /// Derive the corners from (already inset) bounds.
    pub fn from_bounds(bounds: &Bounds2d) -> Self {
        Self {
            top_left: Vec2::new(bounds.min.x, bounds.max.y),
            top_right: bounds.max,
            bottom_left: bounds.min,
            bottom_right: Vec2::new(bounds.max.x, bounds.min.y),
        }
    }
}
