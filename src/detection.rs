//! Detection result structures.
//!
//! These structures hold the results of the probe raycasts used for
//! ground, wall and ceiling detection.

use bevy::prelude::*;

use crate::probe::{ProbeKind, ProbeRay};

/// Information about a probe raycast hit.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Default)]
pub struct ProbeHit {
    /// Distance from the probe origin to the hit point.
    pub distance: f32,
    /// Normal of the surface at hit point.
    pub normal: Vec2,
    /// World position of the hit point.
    pub point: Vec2,
    /// Entity that was hit (if any).
    pub entity: Option<Entity>,
}

impl ProbeHit {
    /// Create a hit result.
    pub fn new(distance: f32, normal: Vec2, point: Vec2, entity: Option<Entity>) -> Self {
        Self {
            distance,
            normal,
            point,
            entity,
        }
    }
}

/// One emitted probe and what it hit.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct ProbeSample {
    pub ray: ProbeRay,
    pub hit: Option<ProbeHit>,
}

/// Per-frame probe results of a sensor.
///
/// Rewritten every tick. Without a casting backend every sample is a miss.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct SensorReadings {
    pub samples: Vec<ProbeSample>,
}

impl SensorReadings {
    /// Replace the samples with misses for the given rays.
    pub fn reset(&mut self, rays: &[ProbeRay]) {
        self.samples.clear();
        self.samples
            .extend(rays.iter().map(|&ray| ProbeSample { ray, hit: None }));
    }

    /// Iterate the samples of one fan.
    pub fn of_kind(&self, kind: ProbeKind) -> impl Iterator<Item = &ProbeSample> {
        self.samples.iter().filter(move |s| s.ray.kind == kind)
    }

    /// Number of probes of `kind` that hit something.
    pub fn hit_count(&self, kind: ProbeKind) -> usize {
        self.of_kind(kind).filter(|s| s.hit.is_some()).count()
    }

    /// Nearest hit of a fan.
    pub fn closest(&self, kind: ProbeKind) -> Option<ProbeHit> {
        self.of_kind(kind)
            .filter_map(|s| s.hit)
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    pub fn is_grounded(&self) -> bool {
        self.hit_count(ProbeKind::Ground) > 0
    }

    pub fn touches_left_wall(&self) -> bool {
        self.hit_count(ProbeKind::LeftWall) > 0
    }

    pub fn touches_right_wall(&self) -> bool {
        self.hit_count(ProbeKind::RightWall) > 0
    }

    pub fn touches_ceiling(&self) -> bool {
        self.hit_count(ProbeKind::Ceiling) > 0
    }
}
