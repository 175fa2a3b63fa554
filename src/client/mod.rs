mod sensor;

pub use sensor::SensorClient;
