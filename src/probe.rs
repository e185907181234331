//! Probe ray emission.
//!
//! Builds the fans of short rays cast outward from the inset sensor box:
//! a ground fan along the bottom edge, a wall fan down each side and an
//! optional ceiling fan along the top edge.

use bevy::prelude::*;

use crate::origins::RaycastOrigins;
use crate::spacing::{RaySpacing, clamp_ray_count};

/// Default probe length in world units.
pub const DEFAULT_PROBE_LENGTH: f32 = 2.0;

/// Which edge a probe belongs to.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Ground,
    LeftWall,
    RightWall,
    Ceiling,
}

impl ProbeKind {
    /// Unit direction the probe points in.
    pub fn direction(self) -> Vec2 {
        match self {
            ProbeKind::Ground => Vec2::NEG_Y,
            ProbeKind::LeftWall => Vec2::NEG_X,
            ProbeKind::RightWall => Vec2::X,
            ProbeKind::Ceiling => Vec2::Y,
        }
    }
}

/// A single probe ray.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct ProbeRay {
    pub kind: ProbeKind,
    /// World-space start point.
    pub origin: Vec2,
    /// Unit direction.
    pub direction: Vec2,
    /// Maximum cast distance.
    pub length: f32,
}

impl ProbeRay {
    pub fn new(kind: ProbeKind, origin: Vec2, length: f32) -> Self {
        Self {
            kind,
            origin,
            direction: kind.direction(),
            length,
        }
    }

    /// Direction scaled by length, as passed to line drawing.
    pub fn vector(&self) -> Vec2 {
        self.direction * self.length
    }

    /// Far end of the ray.
    pub fn end(&self) -> Vec2 {
        self.origin + self.vector()
    }
}

/// Parameters for [`probe_rays`].
#[derive(Debug, Clone, Copy)]
pub struct ProbeLayout {
    pub horizontal_count: u32,
    pub vertical_count: u32,
    pub length: f32,
    pub include_ceiling: bool,
}

impl Default for ProbeLayout {
    fn default() -> Self {
        Self {
            horizontal_count: 4,
            vertical_count: 4,
            length: DEFAULT_PROBE_LENGTH,
            include_ceiling: false,
        }
    }
}

/// Emit every probe ray for one frame.
///
/// Ground rays come first, left to right from the bottom-left corner. Wall
/// rays follow, top to bottom, with the right ray of each row before the
/// left one. Ceiling rays, when enabled, come last.
pub fn probe_rays(
    origins: &RaycastOrigins,
    spacing: &RaySpacing,
    layout: &ProbeLayout,
) -> Vec<ProbeRay> {
    let horizontal_count = clamp_ray_count(layout.horizontal_count);
    let vertical_count = clamp_ray_count(layout.vertical_count);

    let mut rays = Vec::with_capacity(
        (vertical_count as usize) * if layout.include_ceiling { 2 } else { 1 }
            + (horizontal_count as usize) * 2,
    );

    for i in 0..vertical_count {
        let offset = Vec2::new(spacing.vertical * i as f32, 0.0);
        rays.push(ProbeRay::new(
            ProbeKind::Ground,
            origins.bottom_left + offset,
            layout.length,
        ));
    }

    for i in 0..horizontal_count {
        let offset = Vec2::new(0.0, spacing.horizontal * i as f32);
        rays.push(ProbeRay::new(
            ProbeKind::RightWall,
            origins.top_right - offset,
            layout.length,
        ));
        rays.push(ProbeRay::new(
            ProbeKind::LeftWall,
            origins.top_left - offset,
            layout.length,
        ));
    }

    if layout.include_ceiling {
        for i in 0..vertical_count {
            let offset = Vec2::new(spacing.vertical * i as f32, 0.0);
            rays.push(ProbeRay::new(
                ProbeKind::Ceiling,
                origins.top_left + offset,
                layout.length,
            ));
        }
    }

    rays
}
