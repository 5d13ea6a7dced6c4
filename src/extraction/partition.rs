//! Scan partitioning and loose-end landmarks.
//!
//! A scan is walked beam by beam. A jump in range larger than the
//! discontinuity threshold between neighbouring beams marks an object edge:
//! the scan is split there, and the point on the nearer surface at the jump
//! is reported as a loose-end landmark.
//!
//! Invalid beams (no hit) contribute no point, but take part in the jump
//! tests as if they had measured `max_range`. A run of valid beams bordered
//! by open space is therefore split off, and its edge points become
//! landmarks unless they already read within `lower_landmark_margin` of the
//! range limit.

use serde::{Deserialize, Serialize};

use crate::config::ConfigLoadError;
use crate::config::defaults;
use crate::core::{Point2D, Scalar, is_valid_distance};
use crate::features::Landmark;

/// Configuration for discontinuity detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Range jump between neighbouring beams that starts a new partition.
    /// Default: 60
    #[serde(default = "defaults::discontinuity_threshold")]
    pub discontinuity_threshold: f64,

    /// Minimum gap between a valid reading and `max_range` for the edge
    /// into (or out of) an invalid beam to count as a loose end.
    /// Default: 1
    #[serde(default = "defaults::lower_landmark_margin")]
    pub lower_landmark_margin: f64,

    /// Distance that invalid beams stand in for. Should match the sensor's
    /// `max_range`.
    /// Default: 500
    #[serde(default = "defaults::max_range")]
    pub max_range: f64,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            discontinuity_threshold: defaults::discontinuity_threshold(),
            lower_landmark_margin: defaults::lower_landmark_margin(),
            max_range: defaults::max_range(),
        }
    }
}

impl PartitionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the discontinuity threshold.
    pub fn with_discontinuity_threshold(mut self, threshold: f64) -> Self {
        self.discontinuity_threshold = threshold;
        self
    }

    /// Builder-style setter for the lower landmark margin.
    pub fn with_lower_landmark_margin(mut self, margin: f64) -> Self {
        self.lower_landmark_margin = margin;
        self
    }

    /// Builder-style setter for the range invalid beams stand in for.
    pub fn with_max_range(mut self, max_range: f64) -> Self {
        self.max_range = max_range;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if !(self.discontinuity_threshold >= 0.0) || !(self.lower_landmark_margin >= 0.0) {
            return Err(ConfigLoadError::Validation(
                "extraction.partition values must be non-negative".to_string(),
            ));
        }
        if !(self.max_range > 0.0 && self.max_range.is_finite()) {
            return Err(ConfigLoadError::Validation(format!(
                "extraction.partition.max_range must be positive and finite, got {}",
                self.max_range
            )));
        }
        Ok(())
    }
}

/// Distance used in jump tests: the reading itself, or `max_range` for an
/// invalid beam.
#[inline]
fn jump_distance<T: Scalar>(distance: T, max_range: T) -> T {
    if is_valid_distance(distance) {
        distance
    } else {
        max_range
    }
}

/// Split an ordered scan into runs without range discontinuities.
///
/// Concatenating the returned partitions reproduces the valid points of the
/// scan in order. Empty runs (only invalid beams) are dropped.
pub fn partition<T: Scalar>(
    points: &[Point2D<T>],
    distances: &[T],
    config: &PartitionConfig,
) -> Vec<Vec<Point2D<T>>> {
    let n = points.len().min(distances.len());
    let threshold = T::from_f64(config.discontinuity_threshold);
    let max_range = T::from_f64(config.max_range);

    let mut partitions = Vec::new();
    let mut current = Vec::new();

    for i in 0..n {
        if i > 0 && !current.is_empty() {
            let prev = jump_distance(distances[i - 1], max_range);
            let cur = jump_distance(distances[i], max_range);
            if (cur - prev).abs() > threshold {
                partitions.push(std::mem::take(&mut current));
            }
        }
        if is_valid_distance(distances[i]) {
            current.push(points[i]);
        }
    }

    if !current.is_empty() {
        partitions.push(current);
    }

    partitions
}

/// Occlusion-edge landmarks at every range discontinuity.
///
/// For each neighbouring pair `(i - 1, i)`, with invalid beams read as
/// `max_range`:
/// - range rises by more than the threshold, or beam `i` is invalid and
///   the rise exceeds `lower_landmark_margin`: the last valid point at or
///   before `i - 1` is reported
/// - otherwise, the mirrored fall: the first valid point at or after `i` is
///   reported
///
/// Both cases pick the edge of the nearer surface.
pub fn loose_end_landmarks<T: Scalar>(
    points: &[Point2D<T>],
    distances: &[T],
    config: &PartitionConfig,
) -> Vec<Landmark<T>> {
    let n = points.len().min(distances.len());
    let threshold = T::from_f64(config.discontinuity_threshold);
    let margin = T::from_f64(config.lower_landmark_margin);
    let max_range = T::from_f64(config.max_range);

    let mut landmarks = Vec::new();
    if n == 0 {
        return landmarks;
    }

    let mut last_valid = is_valid_distance(distances[0]).then_some(0);

    for i in 1..n {
        let prev_valid = is_valid_distance(distances[i - 1]);
        let cur_valid = is_valid_distance(distances[i]);
        let prev = jump_distance(distances[i - 1], max_range);
        let cur = jump_distance(distances[i], max_range);

        let rising = cur - prev > threshold || (!cur_valid && cur - prev > margin);
        let falling = prev - cur > threshold || (!prev_valid && prev - cur > margin);

        if rising {
            if let Some(j) = last_valid {
                landmarks.push(Landmark::loose_end(points[j]));
            }
        } else if falling {
            if let Some(j) = (i..n).find(|&k| is_valid_distance(distances[k])) {
                landmarks.push(Landmark::loose_end(points[j]));
            }
        }

        if cur_valid {
            last_valid = Some(i);
        }
    }

    landmarks
}
