//! Probe ray sensors for 2D platformer characters.
//!
//! A sensor wraps an axis-aligned box, shrinks it by a small skin margin and
//! spreads short probe rays evenly along its edges: a ground fan pointing
//! down, a wall fan pointing out of each side and, optionally, a ceiling fan
//! pointing up. Everything is recomputed once per fixed tick.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use msg_ray_sensor::prelude::*;
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(RaySensorPlugin::<NoOpBackend>::default())
//!     .add_plugins(RaySensorDebugPlugin)
//!     .run();
//! ```

use std::marker::PhantomData;

use bevy::prelude::*;

pub mod backend;
pub mod bounds;
pub mod config;
pub mod debug;
pub mod detection;
pub mod origins;
pub mod probe;
pub mod sensor;
pub mod spacing;

pub mod prelude {
    pub use crate::backend::{NoOpBackend, SensorPhysicsBackend};
    pub use crate::bounds::{Bounds2d, SKIN_WIDTH};
    pub use crate::config::SensorConfig;
    pub use crate::debug::{RaySensorDebugPlugin, SensorGizmoConfig};
    pub use crate::detection::{ProbeHit, ProbeSample, SensorReadings};
    pub use crate::origins::RaycastOrigins;
    pub use crate::probe::{ProbeKind, ProbeLayout, ProbeRay, probe_rays};
    pub use crate::sensor::{RaycastSensor, SensorBounds};
    pub use crate::spacing::{RaySpacing, clamp_ray_count};
    pub use crate::{RaySensorPlugin, RaySensorSet};

    #[cfg(feature = "avian2d")]
    pub use crate::backend::Avian2dBackend;
}

/// Ordering of the sensor systems within `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RaySensorSet {
    /// Read collider bounds from the backend.
    Bounds,
    /// Skin inset and corner origins.
    Origins,
    /// Ray count clamp and spacing.
    Spacing,
    /// Probe ray emission.
    Emission,
    /// Backend ray casts.
    Casting,
}

/// Main plugin for the probe ray sensor.
///
/// Generic over the physics backend that supplies collider bounds and casts
/// the probes.
pub struct RaySensorPlugin<B: backend::SensorPhysicsBackend> {
    _marker: PhantomData<B>,
}

impl<B: backend::SensorPhysicsBackend> Default for RaySensorPlugin<B> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<B: backend::SensorPhysicsBackend> Plugin for RaySensorPlugin<B> {
    fn build(&self, app: &mut App) {
        app.register_type::<sensor::RaycastSensor>()
            .register_type::<sensor::SensorBounds>()
            .register_type::<config::SensorConfig>()
            .register_type::<detection::SensorReadings>();

        app.configure_sets(
            FixedUpdate,
            (
                RaySensorSet::Bounds,
                RaySensorSet::Origins,
                RaySensorSet::Spacing,
                RaySensorSet::Emission,
                RaySensorSet::Casting,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                sensor::sync_sensor_bounds::<B>.in_set(RaySensorSet::Bounds),
                sensor::update_raycast_origins.in_set(RaySensorSet::Origins),
                sensor::calculate_ray_spacing.in_set(RaySensorSet::Spacing),
                sensor::emit_probe_rays.in_set(RaySensorSet::Emission),
            ),
        );

        app.add_plugins(B::plugin());
    }
}
