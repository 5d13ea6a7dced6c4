//! Published range scan.

use std::time::Instant;

use crate::core::{Point2D, Scalar, is_valid_distance};

/// One complete scan as published by [`RangeSensor`](super::RangeSensor).
///
/// `distances[i]` and `angles[i]` always describe the same beam of the same
/// update. Beams that hit nothing carry [`Scalar::invalid`].
#[derive(Clone, Debug)]
pub struct ScanSnapshot<T> {
    /// Measured distance per beam (noisy), or the invalid sentinel.
    pub distances: Vec<T>,
    /// Actual beam angle per beam in world frame (radians, noisy).
    pub angles: Vec<T>,
    /// When the scan was published.
    pub captured_at: Instant,
    /// Number of updates published before this one was taken (0 = never updated).
    pub sequence: u64,
}

impl<T: Scalar> ScanSnapshot<T> {
    /// Number of beams.
    #[inline]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of beams that reported an obstacle.
    pub fn valid_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|&&d| is_valid_distance(d))
            .count()
    }

    /// Project every beam into Cartesian coordinates around `origin`.
    ///
    /// The stored (noisy) angles are used, so the points are exactly what the
    /// sensor believes it saw. Invalid beams map to `origin`; the extraction
    /// pipeline ignores them based on their distance.
    pub fn to_cartesian(&self, origin: Point2D<T>) -> Vec<Point2D<T>> {
        self.distances
            .iter()
            .zip(&self.angles)
            .map(|(&d, &theta)| {
                if is_valid_distance(d) {
                    origin + Point2D::from_polar(theta, d)
                } else {
                    origin
                }
            })
            .collect()
    }
}
