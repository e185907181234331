use bevy::prelude::*;

use super::SensorPhysicsBackend;
use crate::bounds::Bounds2d;

/// Backend without physics.
///
/// Sensor bounds are authored by hand through
/// [`SensorBounds`](crate::sensor::SensorBounds) and no probes are cast, so
/// only the geometry (and its debug drawing) is produced.
pub struct NoOpBackend;

impl SensorPhysicsBackend for NoOpBackend {
    fn plugin() -> impl Plugin {
        NoOpBackendPlugin
    }

    fn collider_bounds(_world: &World, _entity: Entity) -> Option<Bounds2d> {
        None
    }
}

/// Empty plugin for backends that don't need additional setup.
pub struct NoOpBackendPlugin;

impl Plugin for NoOpBackendPlugin {
    fn build(&self, _app: &mut App) {}
}
