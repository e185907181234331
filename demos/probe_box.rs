//! Probe Box Demo
//!
//! A sensor box drifting around a small room with a floor, two walls and a
//! low ceiling. Probe fans are drawn in green and turn into red hit markers
//! where they touch geometry.
//!
//! ## Running
//! ```bash
//! cargo run --example probe_box
//! ```

use avian2d::prelude::*;
use bevy::prelude::*;
use msg_ray_sensor::prelude::*;

// ==================== Constants ====================

const ROOM_WIDTH: f32 = 12.0;
const ROOM_HEIGHT: f32 = 6.0;
const WALL_THICKNESS: f32 = 0.5;

const SENSOR_SIZE: Vec2 = Vec2::new(1.0, 1.5);

// ==================== Main ====================

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Probe Box - Ray Sensor Demo".into(),
                resolution: (1280, 720).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins(PhysicsDebugPlugin::default())
        .add_plugins(RaySensorPlugin::<Avian2dBackend>::default())
        .add_plugins(RaySensorDebugPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, (drift_sensor, report_contacts))
        .run();
}

#[derive(Component)]
struct Drifter;

/// Contact flags logged when they change.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Eq)]
struct Contacts {
    grounded: bool,
    left: bool,
    right: bool,
    ceiling: bool,
}

impl Contacts {
    fn from_readings(readings: &SensorReadings) -> Self {
        Self {
            grounded: readings.is_grounded(),
            left: readings.touches_left_wall(),
            right: readings.touches_right_wall(),
            ceiling: readings.touches_ceiling(),
        }
    }
}

// ==================== Setup ====================

fn setup(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 0.015,
            ..OrthographicProjection::default_2d()
        }),
    ));

    let half_w = ROOM_WIDTH / 2.0;
    let half_h = ROOM_HEIGHT / 2.0;

    // Floor, ceiling, walls
    spawn_static_box(
        &mut commands,
        Vec2::new(0.0, -half_h),
        Vec2::new(ROOM_WIDTH, WALL_THICKNESS),
    );
    spawn_static_box(
        &mut commands,
        Vec2::new(0.0, half_h),
        Vec2::new(ROOM_WIDTH, WALL_THICKNESS),
    );
    spawn_static_box(
        &mut commands,
        Vec2::new(-half_w, 0.0),
        Vec2::new(WALL_THICKNESS, ROOM_HEIGHT),
    );
    spawn_static_box(
        &mut commands,
        Vec2::new(half_w, 0.0),
        Vec2::new(WALL_THICKNESS, ROOM_HEIGHT),
    );

    // A step on the floor
    spawn_static_box(
        &mut commands,
        Vec2::new(2.0, -half_h + 0.5),
        Vec2::new(2.0, 1.0),
    );

    commands.spawn((
        Drifter,
        Contacts::default(),
        Transform::default(),
        RigidBody::Kinematic,
        Collider::rectangle(SENSOR_SIZE.x, SENSOR_SIZE.y),
        RaycastSensor::new(),
        SensorConfig::default().with_ray_counts(5, 4).with_ceiling(true),
    ));
}

fn spawn_static_box(commands: &mut Commands, position: Vec2, size: Vec2) {
    commands.spawn((
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
    ));
}

// ==================== Systems ====================

fn drift_sensor(time: Res<Time>, mut q: Query<&mut Transform, With<Drifter>>) {
    let t = time.elapsed_secs();
    for mut transform in &mut q {
        transform.translation.x = (t * 0.4).sin() * (ROOM_WIDTH / 2.0 - 0.5);
        transform.translation.y = (t * 0.9).sin() * (ROOM_HEIGHT / 2.0 - 1.0);
    }
}

fn report_contacts(mut q: Query<(Entity, &SensorReadings, &mut Contacts)>) {
    for (entity, readings, mut contacts) in &mut q {
        let current = Contacts::from_readings(readings);
        if current == *contacts {
            continue;
        }
        info!(
            "{entity}: grounded={} left={} right={} ceiling={}",
            current.grounded, current.left, current.right, current.ceiling,
        );
        *contacts = current;
    }
}
