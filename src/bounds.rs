//! Axis-aligned bounds and the skin inset applied before casting.
//!
//! Probe rays start slightly inside the physical shape so that a cast
//! never begins on (or behind) the surface it is meant to detect.

use bevy::prelude::*;

/// Default skin width in world units.
pub const SKIN_WIDTH: f32 = 0.015;

/// An axis-aligned 2D bounding box.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds2d {
    /// Bottom-left corner.
    pub min: Vec2,
    /// Top-right corner.
    pub max: Vec2,
}

impl Bounds2d {
    /// Create bounds from two corners. The corners are sorted per axis.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create bounds from a center and half extents.
    pub fn from_center_half_size(center: Vec2, half_size: Vec2) -> Self {
        let half_size = half_size.abs();
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Width and height.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Grow the box by `amount` on every side. Negative values shrink it.
    ///
    /// Shrinking never inverts the box: an axis that would go negative
    /// collapses to its center.
    pub fn expand(&self, amount: f32) -> Self {
        let center = self.center();
        let half = (self.size() * 0.5 + Vec2::splat(amount)).max(Vec2::ZERO);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Shrink the box by twice the skin width on every side.
    ///
    /// The resulting width is `width - 4 * skin`, likewise for height.
    pub fn inset(&self, skin: f32) -> Self {
        self.expand(skin * -2.0)
    }
}
