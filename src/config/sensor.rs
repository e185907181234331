//! Configuration for the probe ray sensor.

use bevy::prelude::*;

use crate::bounds::SKIN_WIDTH;
use crate::probe::{DEFAULT_PROBE_LENGTH, ProbeLayout};
use crate::spacing::clamp_ray_count;

/// Configuration for a probe ray sensor.
///
/// Ray counts may be edited freely (for example from an inspector). Values
/// below 2 are clamped back up on the next tick.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct SensorConfig {
    /// Number of rays in each wall fan.
    pub horizontal_ray_count: u32,

    /// Number of rays in the ground (and ceiling) fan.
    pub vertical_ray_count: u32,

    /// Inward margin. The box is shrunk by twice this on every side.
    pub skin_width: f32,

    /// Length of every probe ray.
    pub probe_length: f32,

    /// Also emit an upward fan along the top edge.
    pub cast_ceiling: bool,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            horizontal_ray_count: 4,
            vertical_ray_count: 4,
            skin_width: SKIN_WIDTH,
            probe_length: DEFAULT_PROBE_LENGTH,
            cast_ceiling: false,
        }
    }
}

impl SensorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ray_counts(mut self, horizontal: u32, vertical: u32) -> Self {
        self.horizontal_ray_count = horizontal;
        self.vertical_ray_count = vertical;
        self
    }

    pub fn with_skin_width(mut self, skin_width: f32) -> Self {
        self.skin_width = skin_width;
        self
    }

    pub fn with_probe_length(mut self, length: f32) -> Self {
        self.probe_length = length;
        self
    }

    pub fn with_ceiling(mut self, enabled: bool) -> Self {
        self.cast_ceiling = enabled;
        self
    }

    /// Clamp both ray counts in place. Returns `true` if either changed.
    pub fn clamp_ray_counts(&mut self) -> bool {
        let horizontal = clamp_ray_count(self.horizontal_ray_count);
        let vertical = clamp_ray_count(self.vertical_ray_count);
        let changed =
            horizontal != self.horizontal_ray_count || vertical != self.vertical_ray_count;
        self.horizontal_ray_count = horizontal;
        self.vertical_ray_count = vertical;
        changed
    }

    /// Layout used when emitting probes.
    pub fn layout(&self) -> ProbeLayout {
        ProbeLayout {
            horizontal_count: self.horizontal_ray_count,
            vertical_count: self.vertical_ray_count,
            length: self.probe_length,
            include_ceiling: self.cast_ceiling,
        }
    }
}
