mod noop;
mod traits;

#[cfg(feature = "avian2d")]
pub mod avian;

pub use noop::{NoOpBackend, NoOpBackendPlugin};
pub use traits::SensorPhysicsBackend;

#[cfg(feature = "avian2d")]
pub use avian::Avian2dBackend;
