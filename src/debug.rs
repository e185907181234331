//! Gizmo drawing of the probe fans.
//!
//! Add [`RaySensorDebugPlugin`] next to `DefaultPlugins` to see every probe
//! ray the sensors emitted on the last tick. Drawing is purely
//! observational and never feeds back into detection.

use bevy::color::palettes::css::{LIME, RED};
use bevy::prelude::*;

use crate::detection::{ProbeSample, SensorReadings};

/// Colors and toggles for probe drawing.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct SensorGizmoConfig {
    pub enabled: bool,
    /// Color of every probe ray.
    pub ray_color: Color,
    /// Color of the marker drawn where a probe hit something.
    pub hit_color: Color,
    /// Radius of the hit marker. Zero disables the marker.
    pub hit_marker_radius: f32,
}

impl Default for SensorGizmoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ray_color: LIME.into(),
            hit_color: RED.into(),
            hit_marker_radius: 0.1,
        }
    }
}

/// A single line segment to draw for a probe sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeLine {
    pub start: Vec2,
    pub vector: Vec2,
    pub hit_point: Option<Vec2>,
}

impl From<&ProbeSample> for ProbeLine {
    fn from(sample: &ProbeSample) -> Self {
        Self {
            start: sample.ray.origin,
            vector: sample.ray.vector(),
            hit_point: sample.hit.map(|h| h.point),
        }
    }
}

/// Plugin drawing sensor probes with gizmos.
///
/// Requires the gizmo plugin, which `DefaultPlugins` provides.
#[derive(Default)]
pub struct RaySensorDebugPlugin;

impl Plugin for RaySensorDebugPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SensorGizmoConfig>();
        app.init_resource::<SensorGizmoConfig>();
        app.add_systems(
            Update,
            draw_probe_rays.run_if(|config: Res<SensorGizmoConfig>| config.enabled),
        );
    }
}

/// Draw every probe of every sensor.
pub fn draw_probe_rays(
    mut gizmos: Gizmos,
    config: Res<SensorGizmoConfig>,
    q_sensors: Query<&SensorReadings>,
) {
    for readings in &q_sensors {
        for line in readings.samples.iter().map(ProbeLine::from) {
            gizmos.ray_2d(line.start, line.vector, config.ray_color);

            if config.hit_marker_radius <= 0.0 {
                continue;
            }
            if let Some(point) = line.hit_point {
                gizmos.circle_2d(point, config.hit_marker_radius, config.hit_color);
            }
        }
    }
}
