//! The sensor component and its per-tick systems.
//!
//! Every tick the sensor box is re-read from the backend, inset by the
//! skin, turned into corner origins and ray spacing, and finally into the
//! list of probe rays. Nothing is cached between ticks.

use bevy::prelude::*;

use crate::backend::SensorPhysicsBackend;
use crate::bounds::Bounds2d;
use crate::config::SensorConfig;
use crate::detection::SensorReadings;
use crate::origins::RaycastOrigins;
use crate::probe::{ProbeRay, probe_rays};
use crate::spacing::RaySpacing;

/// World-space box the sensor wraps, before the skin inset.
///
/// Physics backends overwrite this every tick from the entity's collider.
/// With [`NoOpBackend`](crate::backend::NoOpBackend) it is set by the user.
/// While it is `None` the sensor emits and casts nothing.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Default)]
#[reflect(Component)]
pub struct SensorBounds(pub Option<Bounds2d>);

impl SensorBounds {
    pub fn new(bounds: Bounds2d) -> Self {
        Self(Some(bounds))
    }

    pub fn from_center_half_size(center: Vec2, half_size: Vec2) -> Self {
        Self::new(Bounds2d::from_center_half_size(center, half_size))
    }

    pub fn get(&self) -> Option<Bounds2d> {
        self.0
    }
}

/// Probe ray sensor state, recomputed every tick.
///
/// # Example
///
/// ```rust
/// use bevy::prelude::*;
/// use msg_ray_sensor::prelude::*;
///
/// fn spawn(mut commands: Commands) {
///     commands.spawn((
///         RaycastSensor::default(),
///         SensorConfig::default().with_ray_counts(5, 3),
///         SensorBounds::from_center_half_size(Vec2::ZERO, Vec2::new(0.5, 1.0)),
///     ));
/// }
/// ```
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
#[require(SensorConfig, SensorBounds, SensorReadings)]
pub struct RaycastSensor {
    /// Sensor box after the skin inset.
    pub inset_bounds: Bounds2d,
    pub origins: RaycastOrigins,
    pub spacing: RaySpacing,
    /// Rays emitted this tick.
    pub rays: Vec<ProbeRay>,
}

impl RaycastSensor {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Copy collider bounds from the physics backend into [`SensorBounds`].
///
/// Entities the backend has no bounds for keep what they had, so bounds
/// set by hand survive and a sensor that never had any stays empty.
pub fn sync_sensor_bounds<B: SensorPhysicsBackend>(world: &mut World) {
    let entities: Vec<Entity> = world
        .query_filtered::<Entity, With<RaycastSensor>>()
        .iter(world)
        .collect();

    for entity in entities {
        let Some(bounds) = B::collider_bounds(world, entity) else {
            continue;
        };
        if let Some(mut sensor_bounds) = world.get_mut::<SensorBounds>(entity) {
            sensor_bounds.0 = Some(bounds);
        }
    }
}

/// Inset the sensor box and derive the four corner origins.
pub fn update_raycast_origins(
    mut q_sensors: Query<(&SensorConfig, &SensorBounds, &mut RaycastSensor)>,
) {
    for (config, bounds, mut sensor) in &mut q_sensors {
        let Some(bounds) = bounds.get() else {
            continue;
        };
        let inset = bounds.inset(config.skin_width);
        sensor.inset_bounds = inset;
        sensor.origins = RaycastOrigins::from_bounds(&inset);
    }
}

/// Clamp ray counts and compute the spacing between probes.
pub fn calculate_ray_spacing(
    mut q_sensors: Query<(Entity, &mut SensorConfig, &mut RaycastSensor)>,
) {
    for (entity, mut config, mut sensor) in &mut q_sensors {
        let mut clamped = *config;
        if clamped.clamp_ray_counts() {
            debug!(
                "{entity}: ray counts ({}, {}) clamped to ({}, {})",
                config.horizontal_ray_count,
                config.vertical_ray_count,
                clamped.horizontal_ray_count,
                clamped.vertical_ray_count,
            );
            *config = clamped;
        }

        sensor.spacing = RaySpacing::compute(
            &sensor.inset_bounds,
            config.horizontal_ray_count,
            config.vertical_ray_count,
        );
    }
}

/// Emit this tick's probe rays and reset the readings to misses.
///
/// Casting backends fill in hits afterwards. A sensor without bounds gets
/// no rays and empty readings.
pub fn emit_probe_rays(
    mut q_sensors: Query<(
        &SensorConfig,
        &SensorBounds,
        &mut RaycastSensor,
        &mut SensorReadings,
    )>,
) {
    for (config, bounds, mut sensor, mut readings) in &mut q_sensors {
        if bounds.get().is_none() {
            sensor.rays.clear();
            readings.samples.clear();
            continue;
        }

        let rays = probe_rays(&sensor.origins, &sensor.spacing, &config.layout());
        readings.reset(&rays);
        sensor.rays = rays;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use crate::backend::NoOpBackend;
    use crate::probe::ProbeKind;
    use crate::RaySensorPlugin;

    fn create_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(RaySensorPlugin::<NoOpBackend>::default());
        app.insert_resource(Time::<Fixed>::from_hz(60.0));
        app.insert_resource(TimeUpdateStrategy::ManualDuration(
            std::time::Duration::from_secs_f64(1.0 / 60.0),
        ));
        app.finish();
        app.cleanup();
        app
    }

    fn run_ticks(app: &mut App, ticks: usize) {
        for _ in 0..ticks {
            app.update();
        }
    }

    #[test]
    fn sensor_requires_components() {
        let mut app = create_test_app();
        let entity = app.world_mut().spawn(RaycastSensor::new()).id();

        assert!(app.world().get::<SensorConfig>(entity).is_some());
        assert!(app.world().get::<SensorBounds>(entity).is_some());
        assert!(app.world().get::<SensorReadings>(entity).is_some());
    }

    #[test]
    fn systems_compute_origins_and_rays() {
        let mut app = create_test_app();
        let entity = app
            .world_mut()
            .spawn((
                RaycastSensor::new(),
                SensorBounds::new(Bounds2d::new(Vec2::ZERO, Vec2::splat(2.0))),
            ))
            .id();

        run_ticks(&mut app, 5);

        let sensor = app.world().get::<RaycastSensor>(entity).unwrap();
        assert!((sensor.origins.bottom_left - Vec2::splat(0.03)).length() < 1e-5);
        assert!((sensor.origins.top_right - Vec2::splat(1.97)).length() < 1e-5);
        assert!((sensor.spacing.vertical - 1.94 / 3.0).abs() < 1e-5);
        assert_eq!(sensor.rays.len(), 4 + 2 * 4);

        let readings = app.world().get::<SensorReadings>(entity).unwrap();
        assert_eq!(readings.samples.len(), sensor.rays.len());
        assert!(!readings.is_grounded());
        assert_eq!(readings.of_kind(ProbeKind::Ground).count(), 4);
    }

    #[test]
    fn low_ray_counts_are_clamped_in_config() {
        let mut app = create_test_app();
        let entity = app
            .world_mut()
            .spawn((
                RaycastSensor::new(),
                SensorConfig::new().with_ray_counts(1, 0),
                SensorBounds::new(Bounds2d::new(Vec2::ZERO, Vec2::ONE)),
            ))
            .id();

        run_ticks(&mut app, 5);

        let config = app.world().get::<SensorConfig>(entity).unwrap();
        assert_eq!(config.horizontal_ray_count, 2);
        assert_eq!(config.vertical_ray_count, 2);

        let sensor = app.world().get::<RaycastSensor>(entity).unwrap();
        assert!(sensor.spacing.horizontal.is_finite());
        assert!(sensor.spacing.vertical.is_finite());
    }

    #[test]
    fn moved_bounds_are_picked_up_next_tick() {
        let mut app = create_test_app();
        let entity = app
            .world_mut()
            .spawn((
                RaycastSensor::new(),
                SensorBounds::from_center_half_size(Vec2::ZERO, Vec2::ONE),
            ))
            .id();
        run_ticks(&mut app, 5);

        app.world_mut()
            .get_mut::<SensorBounds>(entity)
            .unwrap()
            .0 = Some(Bounds2d::from_center_half_size(Vec2::new(10.0, 0.0), Vec2::ONE));
        run_ticks(&mut app, 5);

        let sensor = app.world().get::<RaycastSensor>(entity).unwrap();
        assert!((sensor.inset_bounds.center() - Vec2::new(10.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn sensor_without_bounds_emits_nothing() {
        let mut app = create_test_app();
        let entity = app.world_mut().spawn(RaycastSensor::new()).id();

        run_ticks(&mut app, 5);

        let sensor = app.world().get::<RaycastSensor>(entity).unwrap();
        assert!(sensor.rays.is_empty());
        let readings = app.world().get::<SensorReadings>(entity).unwrap();
        assert!(readings.samples.is_empty());
        assert!(!readings.is_grounded());
    }

    #[test]
    fn clearing_bounds_drops_rays() {
        let mut app = create_test_app();
        let entity = app
            .world_mut()
            .spawn((
                RaycastSensor::new(),
                SensorBounds::from_center_half_size(Vec2::ZERO, Vec2::ONE),
            ))
            .id();
        run_ticks(&mut app, 5);
        assert_eq!(app.world().get::<RaycastSensor>(entity).unwrap().rays.len(), 12);

        app.world_mut().get_mut::<SensorBounds>(entity).unwrap().0 = None;
        run_ticks(&mut app, 5);

        assert!(app.world().get::<RaycastSensor>(entity).unwrap().rays.is_empty());
        assert!(app.world().get::<SensorReadings>(entity).unwrap().samples.is_empty());
    }
}
