mod sensor;

pub use sensor::SensorConfig;
