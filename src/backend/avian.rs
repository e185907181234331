//! Avian2D physics backend implementation.
//!
//! This module provides the physics backend for Avian2D (`avian2d`).
//! Enable with the `avian2d` feature.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::backend::SensorPhysicsBackend;
use crate::bounds::Bounds2d;
use crate::detection::{ProbeHit, SensorReadings};
use crate::sensor::RaycastSensor;
use crate::RaySensorSet;

/// Avian2D physics backend for the ray sensor.
///
/// Sensor bounds are computed with [`Collider::aabb`] from the entity's
/// [`Position`] and [`Rotation`] (or its `GlobalTransform` before Avian has
/// synced them), so collider scale is included. Probe rays are cast
/// with [`SpatialQuery`], excluding the sensor's own entity and honouring
/// its [`CollisionLayers`] filters when present.
pub struct Avian2dBackend;

impl SensorPhysicsBackend for Avian2dBackend {
    fn plugin() -> impl Plugin {
        Avian2dBackendPlugin
    }

    fn collider_bounds(world: &World, entity: Entity) -> Option<Bounds2d> {
        let collider = world.get::<Collider>(entity)?;

        // Prefer Avian's Position/Rotation, fall back to the transform
        let position = world
            .get::<Position>(entity)
            .map(|p| p.0)
            .or_else(|| {
                world
                    .get::<GlobalTransform>(entity)
                    .map(|t| t.translation().xy())
            })?;
        let rotation = world.get::<Rotation>(entity).copied().unwrap_or_else(|| {
            world
                .get::<GlobalTransform>(entity)
                .map(|t| {
                    let (_, rotation, _) = t.to_scale_rotation_translation();
                    let (_, _, z) = rotation.to_euler(EulerRot::XYZ);
                    Rotation::radians(z)
                })
                .unwrap_or_default()
        });

        let aabb = collider.aabb(position, rotation);
        Some(Bounds2d::new(aabb.min, aabb.max))
    }
}

/// Plugin that sets up Avian2D-specific systems for the ray sensor.
pub struct Avian2dBackendPlugin;

impl Plugin for Avian2dBackendPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            avian_probe_casting.in_set(RaySensorSet::Casting),
        );
    }
}

/// Cast every emitted probe ray and record the nearest hit.
fn avian_probe_casting(
    spatial_query: SpatialQuery,
    mut q_sensors: Query<
        (Entity, &mut SensorReadings, Option<&CollisionLayers>),
        With<RaycastSensor>,
    >,
) {
    for (entity, mut readings, collision_layers) in &mut q_sensors {
        let filter = if let Some(layers) = collision_layers {
            // Only look for what this sensor is allowed to collide with
            SpatialQueryFilter::from_mask(layers.filters).with_excluded_entities([entity])
        } else {
            SpatialQueryFilter::default().with_excluded_entities([entity])
        };

        for sample in readings.samples.iter_mut() {
            let ray = sample.ray;
            let Ok(direction) = Dir2::new(ray.direction) else {
                continue;
            };

            sample.hit = spatial_query
                .cast_ray(ray.origin, direction, ray.length, true, &filter)
                .map(|hit| {
                    ProbeHit::new(
                        hit.distance,
                        hit.normal,
                        ray.origin + ray.direction * hit.distance,
                        Some(hit.entity),
                    )
                });
        }
    }
}
