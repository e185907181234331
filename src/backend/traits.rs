//! Physics backend abstraction.
//!
//! This module defines the trait that physics backends implement to feed
//! the sensor. A backend supplies the world-space box of the collider the
//! sensor wraps and, through its plugin, casts the emitted probe rays.

use bevy::prelude::*;

use crate::bounds::Bounds2d;

/// Trait for physics backend implementations.
///
/// Implement this trait to integrate a physics engine with the ray sensor.
/// Bounds are read from the `World` once per tick for every entity with a
/// [`RaycastSensor`](crate::sensor::RaycastSensor). Probe casting is done by
/// systems the backend's plugin registers in
/// [`RaySensorSet::Casting`](crate::RaySensorSet::Casting).
pub trait SensorPhysicsBackend: 'static + Send + Sync {
    /// Returns the plugin that sets up this backend.
    fn plugin() -> impl Plugin;

    /// World-space axis-aligned bounds of the entity's collider.
    ///
    /// Returns `None` when the entity has no collider, in which case the
    /// sensor keeps whatever bounds it already had.
    fn collider_bounds(world: &World, entity: Entity) -> Option<Bounds2d>;
}
