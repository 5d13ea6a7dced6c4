//! Simulated range sensor.
//!
//! - [`Obstacle`]: ray-distance capability implemented by simulation shapes
//! - [`RangeSensor`]: fan of noisy beams published as atomic [`ScanSnapshot`]s
//! - [`NoiseGenerator`]: seedable uniform noise

mod noise;
mod obstacle;
mod range_sensor;
mod snapshot;

pub use noise::NoiseGenerator;
pub use obstacle::{CircleObstacle, Obstacle, SegmentObstacle};
pub use range_sensor::{RangeSensor, RangeSensorConfig};
pub use snapshot::ScanSnapshot;
