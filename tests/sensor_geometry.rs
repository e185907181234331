//! End-to-end geometry checks with no physics backend.
//!
//! Bounds are authored by hand and the emitted rays are compared against
//! the expected fans.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use msg_ray_sensor::prelude::*;

const EPS: f32 = 1e-5;

fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(RaySensorPlugin::<NoOpBackend>::default());
    app.insert_resource(Time::<Fixed>::from_hz(60.0));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )));
    app.finish();
    app.cleanup();
    app
}

fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

fn spawn_sensor(app: &mut App, bounds: Bounds2d, config: SensorConfig) -> Entity {
    app.world_mut()
        .spawn((RaycastSensor::new(), SensorBounds::new(bounds), config))
        .id()
}

#[test]
fn two_unit_box_fans() {
    let mut app = create_test_app();
    let entity = spawn_sensor(
        &mut app,
        Bounds2d::new(Vec2::ZERO, Vec2::splat(2.0)),
        SensorConfig::default(),
    );

    run_ticks(&mut app, 5);

    let sensor = app.world().get::<RaycastSensor>(entity).unwrap();
    let inset = sensor.inset_bounds;
    assert!((inset.width() - (2.0 - 4.0 * SKIN_WIDTH)).abs() < EPS);
    assert!((inset.height() - (2.0 - 4.0 * SKIN_WIDTH)).abs() < EPS);

    let spacing = sensor.spacing.vertical;
    assert_eq!(spacing, inset.width() / 3.0);

    let ground: Vec<_> = sensor
        .rays
        .iter()
        .filter(|r| r.kind == ProbeKind::Ground)
        .collect();
    assert_eq!(ground.len(), 4);
    for (i, ray) in ground.iter().enumerate() {
        let offset = ray.origin - sensor.origins.bottom_left;
        assert!((offset.x - i as f32 * spacing).abs() < EPS);
        assert_eq!(ray.vector(), Vec2::new(0.0, -2.0));
    }
}

#[test]
fn many_rays_are_not_capped() {
    let mut app = create_test_app();
    let entity = spawn_sensor(
        &mut app,
        Bounds2d::new(Vec2::ZERO, Vec2::new(10.0, 4.0)),
        SensorConfig::default().with_ray_counts(9, 33),
    );

    run_ticks(&mut app, 5);

    let sensor = app.world().get::<RaycastSensor>(entity).unwrap();
    assert_eq!(sensor.rays.len(), 33 + 2 * 9);
    assert_eq!(sensor.spacing.horizontal, sensor.inset_bounds.height() / 8.0);
    assert_eq!(sensor.spacing.vertical, sensor.inset_bounds.width() / 32.0);
}

#[test]
fn editing_config_changes_next_tick() {
    let mut app = create_test_app();
    let entity = spawn_sensor(
        &mut app,
        Bounds2d::new(Vec2::ZERO, Vec2::splat(2.0)),
        SensorConfig::default(),
    );
    run_ticks(&mut app, 5);

    {
        let mut config = app.world_mut().get_mut::<SensorConfig>(entity).unwrap();
        config.vertical_ray_count = 1;
        config.cast_ceiling = true;
    }
    run_ticks(&mut app, 5);

    let config = app.world().get::<SensorConfig>(entity).unwrap();
    assert_eq!(config.vertical_ray_count, 2);

    let readings = app.world().get::<SensorReadings>(entity).unwrap();
    assert_eq!(readings.of_kind(ProbeKind::Ground).count(), 2);
    assert_eq!(readings.of_kind(ProbeKind::Ceiling).count(), 2);
    assert!(!readings.touches_ceiling());
}

#[test]
fn custom_skin_width() {
    let mut app = create_test_app();
    let entity = spawn_sensor(
        &mut app,
        Bounds2d::new(Vec2::ZERO, Vec2::splat(2.0)),
        SensorConfig::default().with_skin_width(0.25),
    );
    run_ticks(&mut app, 5);

    let sensor = app.world().get::<RaycastSensor>(entity).unwrap();
    assert!((sensor.origins.bottom_left - Vec2::splat(0.5)).length() < EPS);
    assert!((sensor.origins.top_right - Vec2::splat(1.5)).length() < EPS);
}
