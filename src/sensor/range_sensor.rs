//! Rotating-beam range sensor simulation.
//!
//! The sensor casts a fan of `beam_count` rays against the obstacle set on
//! every simulation tick and publishes the result as one [`ScanSnapshot`].
//!
//! # Thread Model
//!
//! ```text
//! ┌──────────────────┐  update()   ┌───────────────────┐  read_snapshot()  ┌──────────────┐
//! │ Simulation tick  │────────────▶│ Mutex<ScanSnapshot>│◀─────────────────│ Reader(s)    │
//! │ (sole writer)    │  swap under │  distances/angles  │  clone under lock │ (extraction) │
//! └──────────────────┘    lock     └───────────────────┘                   └──────────────┘
//! ```
//!
//! Ray casting happens outside the lock; the critical section is a buffer
//! swap on write and a clone on read, so readers never see a torn scan.

use std::time::Instant;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoadError;
use crate::config::defaults;
use crate::core::{Point2D, Scalar, is_valid_distance};
use crate::error::Result;

use super::noise::NoiseGenerator;
use super::obstacle::Obstacle;
use super::snapshot::ScanSnapshot;

/// Configuration for the simulated range sensor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RangeSensorConfig {
    /// Number of beams in the fan.
    /// Default: 181
    #[serde(default = "defaults::beam_count")]
    pub beam_count: usize,

    /// Angle of the first beam relative to the sensor heading (radians).
    /// Default: -π/2
    #[serde(default = "defaults::min_theta")]
    pub min_theta: f64,

    /// Angle of the last beam relative to the sensor heading (radians).
    /// Default: π/2
    #[serde(default = "defaults::max_theta")]
    pub max_theta: f64,

    /// Maximum sensing range. Hits beyond it are reported as invalid.
    /// Default: 500
    #[serde(default = "defaults::max_range")]
    pub max_range: f64,

    /// Uniform distance noise limit, applied to valid beams only.
    /// Default: 5
    #[serde(default = "defaults::distance_error_limit")]
    pub distance_error_limit: f64,

    /// Uniform angle noise limit as a fraction of the angular resolution.
    /// Default: 0.05
    #[serde(default = "defaults::angle_error_limit")]
    pub angle_error_limit: f64,

    /// Random seed for the noise source (0 = entropy).
    /// Default: 0
    #[serde(default)]
    pub seed: u64,
}

impl Default for RangeSensorConfig {
    fn default() -> Self {
        Self {
            beam_count: defaults::beam_count(),
            min_theta: defaults::min_theta(),
            max_theta: defaults::max_theta(),
            max_range: defaults::max_range(),
            distance_error_limit: defaults::distance_error_limit(),
            angle_error_limit: defaults::angle_error_limit(),
            seed: 0,
        }
    }
}

impl RangeSensorConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for beam count.
    pub fn with_beam_count(mut self, count: usize) -> Self {
        self.beam_count = count;
        self
    }

    /// Builder-style setter for the field of view.
    pub fn with_field_of_view(mut self, min_theta: f64, max_theta: f64) -> Self {
        self.min_theta = min_theta;
        self.max_theta = max_theta;
        self
    }

    /// Builder-style setter for maximum range.
    pub fn with_max_range(mut self, range: f64) -> Self {
        self.max_range = range;
        self
    }

    /// Builder-style setter for both noise limits.
    pub fn with_noise(mut self, distance_error_limit: f64, angle_error_limit: f64) -> Self {
        self.distance_error_limit = distance_error_limit;
        self.angle_error_limit = angle_error_limit;
        self
    }

    /// Disable all noise (deterministic ray casting).
    pub fn noiseless(self) -> Self {
        self.with_noise(0.0, 0.0)
    }

    /// Builder-style setter for random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Angle covered by one beam.
    #[inline]
    pub fn angular_resolution(&self) -> f64 {
        (self.max_theta - self.min_theta) / self.beam_count as f64
    }

    /// Beam angle relative to the sensor heading, before noise.
    #[inline]
    pub fn nominal_angle(&self, beam: usize) -> f64 {
        let fraction = if self.beam_count > 1 {
            beam as f64 / (self.beam_count - 1) as f64
        } else {
            0.0
        };
        self.min_theta + (self.max_theta - self.min_theta) * fraction
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigLoadError> {
        if self.beam_count < 2 {
            return Err(ConfigLoadError::Validation(format!(
                "sensor.beam_count must be at least 2, got {}",
                self.beam_count
            )));
        }
        if !(self.min_theta < self.max_theta) {
            return Err(ConfigLoadError::Validation(format!(
                "sensor.min_theta ({}) must be below sensor.max_theta ({})",
                self.min_theta, self.max_theta
            )));
        }
        if !(self.max_range > 0.0 && self.max_range.is_finite()) {
            return Err(ConfigLoadError::Validation(format!(
                "sensor.max_range must be positive and finite, got {}",
                self.max_range
            )));
        }
        let finite_non_negative = |v: f64| v >= 0.0 && v.is_finite();
        if !finite_non_negative(self.distance_error_limit)
            || !finite_non_negative(self.angle_error_limit)
        {
            return Err(ConfigLoadError::Validation(format!(
                "sensor noise limits must be non-negative and finite, got distance {} and angle {}",
                self.distance_error_limit, self.angle_error_limit
            )));
        }
        Ok(())
    }
}

/// Simulated range sensor shared between a writer tick and any number of readers.
///
/// Share it as `Arc<RangeSensor<T>>`; both [`update`](Self::update) and
/// [`read_snapshot`](Self::read_snapshot) take `&self`.
pub struct RangeSensor<T> {
    config: RangeSensorConfig,
    noise: Mutex<NoiseGenerator>,
    state: Mutex<ScanSnapshot<T>>,
}

impl<T: Scalar> RangeSensor<T> {
    /// Create a sensor with every beam invalid.
    pub fn new(config: RangeSensorConfig) -> Self {
        let angles = (0..config.beam_count)
            .map(|i| T::from_f64(config.nominal_angle(i)))
            .collect();
        let initial = ScanSnapshot {
            distances: vec![T::invalid(); config.beam_count],
            angles,
            captured_at: Instant::now(),
            sequence: 0,
        };
        Self {
            noise: Mutex::new(NoiseGenerator::new(config.seed)),
            config,
            state: Mutex::new(initial),
        }
    }

    /// Create a sensor after checking `config`.
    pub fn try_new(config: RangeSensorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Sensor configuration.
    pub fn config(&self) -> &RangeSensorConfig {
        &self.config
    }

    /// Re-measure every beam from `position` facing `orientation` and publish.
    ///
    /// For each beam the nominal angle is offset by the orientation and a
    /// uniform angular error; the nearest hit within `max_range` across all
    /// obstacles becomes the distance, plus uniform distance noise. Beams
    /// without a hit publish [`Scalar::invalid`].
    pub fn update<O: Obstacle<T>>(&self, position: Point2D<T>, orientation: T, obstacles: &[O]) {
        let count = self.config.beam_count;
        let max_range = T::from_f64(self.config.max_range);
        let angle_limit = self.config.angle_error_limit * self.config.angular_resolution();

        let mut distances = Vec::with_capacity(count);
        let mut angles = Vec::with_capacity(count);

        {
            let mut noise = self.noise.lock();
            for beam in 0..count {
                let angle_error = noise.symmetric_uniform(angle_limit);
                let theta = T::from_f64(self.config.nominal_angle(beam) + angle_error) + orientation;
                let direction = Point2D::from_polar(theta, T::ONE);

                let mut distance = obstacles
                    .iter()
                    .filter_map(|o| o.ray_distance(position, direction))
                    .filter(|&d| d >= T::ZERO && d <= max_range)
                    .fold(T::invalid(), T::min);

                if is_valid_distance(distance) {
                    let error = T::from_f64(noise.symmetric_uniform(self.config.distance_error_limit));
                    distance = (distance + error).max(T::ZERO);
                }

                distances.push(distance);
                angles.push(theta);
            }
        }

        let valid = distances.iter().filter(|&&d| is_valid_distance(d)).count();

        let sequence = {
            let mut state = self.state.lock();
            state.distances = distances;
            state.angles = angles;
            state.captured_at = Instant::now();
            state.sequence += 1;
            state.sequence
        };

        log::trace!(
            "Range scan #{} published: {}/{} valid beams",
            sequence,
            valid,
            count
        );
    }

    /// Copy of the most recently published scan.
    pub fn read_snapshot(&self) -> ScanSnapshot<T> {
        self.state.lock().clone()
    }
}

impl<T: Scalar> Default for RangeSensor<T> {
    fn default() -> Self {
        Self::new(RangeSensorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sensor::{CircleObstacle, SegmentObstacle};
    use approx::assert_relative_eq;

    #[test]
    fn test_config_default() {
        let config = RangeSensorConfig::default();
        assert_eq!(config.beam_count, 181);
        assert_eq!(config.max_range, 500.0);
        assert_relative_eq!(config.nominal_angle(0), -std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(config.nominal_angle(90), 0.0, epsilon = 1e-12);
        assert_relative_eq!(config.nominal_angle(180), std::f64::consts::FRAC_PI_2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_initial_snapshot_all_invalid() {
        let sensor = RangeSensor::<f64>::default();
        let snapshot = sensor.read_snapshot();
        assert_eq!(snapshot.len(), 181);
        assert_eq!(snapshot.angles.len(), 181);
        assert_eq!(snapshot.valid_count(), 0);
        assert_eq!(snapshot.sequence, 0);
    }

    #[test]
    fn test_open_space_all_invalid() {
        let sensor = RangeSensor::<f64>::new(RangeSensorConfig::default().with_seed(3));
        let none: [SegmentObstacle<f64>; 0] = [];
        sensor.update(Point2D::zero(), 0.0, &none);
        let snapshot = sensor.read_snapshot();
        assert_eq!(snapshot.valid_count(), 0);
        assert_eq!(snapshot.sequence, 1);
    }

    #[test]
    fn test_noiseless_wall() {
        let sensor = RangeSensor::<f64>::new(RangeSensorConfig::default().noiseless());
        let wall = SegmentObstacle::new(Point2D::new(100.0, -1000.0), Point2D::new(100.0, 1000.0));
        sensor.update(Point2D::zero(), 0.0, &[wall]);

        let snapshot = sensor.read_snapshot();
        // Straight ahead is the middle beam
        assert_relative_eq!(snapshot.distances[90], 100.0, epsilon = 1e-9);
        for (d, theta) in snapshot.distances.iter().zip(&snapshot.angles) {
            if is_valid_distance(*d) {
                assert_relative_eq!(*d * theta.cos(), 100.0, epsilon = 1e-6);
            }
        }
        // Beams nearly parallel to the wall exceed max range
        assert!(!is_valid_distance(snapshot.distances[0]));
        assert!(!is_valid_distance(snapshot.distances[180]));
    }

    #[test]
    fn test_nearest_obstacle_wins() {
        let sensor = RangeSensor::<f64>::new(RangeSensorConfig::default().noiseless());
        let obstacles: Vec<Box<dyn Obstacle<f64>>> = vec![
            Box::new(SegmentObstacle::new(Point2D::new(200.0, -50.0), Point2D::new(200.0, 50.0))),
            Box::new(CircleObstacle::new(Point2D::new(50.0, 0.0), 10.0)),
        ];
        sensor.update(Point2D::zero(), 0.0, &obstacles);
        assert_relative_eq!(sensor.read_snapshot().distances[90], 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_orientation_offsets_angles() {
        let sensor = RangeSensor::<f64>::new(RangeSensorConfig::default().noiseless());
        let wall = SegmentObstacle::new(Point2D::new(-100.0, 100.0), Point2D::new(100.0, 100.0));
        sensor.update(Point2D::zero(), std::f64::consts::FRAC_PI_2, &[wall]);

        let snapshot = sensor.read_snapshot();
        assert_relative_eq!(snapshot.angles[90], std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(snapshot.distances[90], 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_noise_within_limits() {
        let config = RangeSensorConfig::default().with_seed(11);
        let resolution = config.angular_resolution();
        let sensor = RangeSensor::<f64>::new(config.clone());
        let room = CircleObstacle::new(Point2D::zero(), 100.0);
        sensor.update(Point2D::zero(), 0.0, &[room]);

        let snapshot = sensor.read_snapshot();
        assert_eq!(snapshot.valid_count(), 181);
        for (i, (&d, &theta)) in snapshot.distances.iter().zip(&snapshot.angles).enumerate() {
            assert!((d - 100.0).abs() <= config.distance_error_limit + 1e-9);
            let nominal = config.nominal_angle(i);
            assert!((theta - nominal).abs() <= config.angle_error_limit * resolution + 1e-12);
        }
    }

    #[test]
    fn test_seeded_sensors_repeat() {
        let config = RangeSensorConfig::default().with_seed(5);
        let a = RangeSensor::<f32>::new(config.clone());
        let b = RangeSensor::<f32>::new(config);
        let room = CircleObstacle::new(Point2D::new(0.0f32, 0.0), 50.0);
        a.update(Point2D::zero(), 0.3, &[room]);
        b.update(Point2D::zero(), 0.3, &[room]);
        assert_eq!(a.read_snapshot().distances, b.read_snapshot().distances);
        assert_eq!(a.read_snapshot().angles, b.read_snapshot().angles);
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        let sensor = RangeSensor::<f64>::new(RangeSensorConfig::default().with_max_range(50.0).noiseless());
        let pillar = CircleObstacle::new(Point2D::new(80.0, 0.0), 5.0);
        sensor.update(Point2D::zero(), 0.0, &[pillar]);
        assert_eq!(sensor.read_snapshot().valid_count(), 0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(RangeSensorConfig::default().with_beam_count(1).validate().is_err());
        assert!(RangeSensorConfig::default().with_field_of_view(1.0, -1.0).validate().is_err());
        assert!(RangeSensorConfig::default().with_max_range(0.0).validate().is_err());
        assert!(RangeSensorConfig::default().with_noise(-1.0, 0.0).validate().is_err());
        assert!(RangeSensorConfig::default().with_noise(f64::INFINITY, 0.0).validate().is_err());
        assert!(RangeSensorConfig::default().with_noise(0.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let err = RangeSensor::<f64>::try_new(RangeSensorConfig::default().with_beam_count(0))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Config(ConfigLoadError::Validation(_))));
        assert!(RangeSensor::<f64>::try_new(RangeSensorConfig::default()).is_ok());
    }

    #[test]
    fn test_infinite_noise_limits_do_not_panic() {
        // Bypasses validation; update still has no failure path
        let config = RangeSensorConfig::default()
            .with_noise(f64::INFINITY, f64::INFINITY)
            .with_seed(9);
        let sensor = RangeSensor::<f64>::new(config.clone());
        let room = CircleObstacle::new(Point2D::zero(), 100.0);
        sensor.update(Point2D::zero(), 0.0, &[room]);

        let snapshot = sensor.read_snapshot();
        assert_eq!(snapshot.valid_count(), 181);
        for (i, (&d, &theta)) in snapshot.distances.iter().zip(&snapshot.angles).enumerate() {
            assert_relative_eq!(d, 100.0, epsilon = 1e-9);
            assert_eq!(theta, config.nominal_angle(i));
        }
    }
}
