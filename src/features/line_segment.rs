//! Detected obstacle edge.

use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Scalar};

/// A straight obstacle edge found in a scan.
///
/// Endpoints are the first and last supporting scan points in scan order,
/// not a least-squares idealization, so both are always observed points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment<T> {
    /// First inlier in scan order.
    pub start: Point2D<T>,
    /// Last inlier in scan order.
    pub end: Point2D<T>,
    /// Number of scan points supporting this segment.
    pub inlier_count: usize,
}

impl<T: Scalar> LineSegment<T> {
    #[inline]
    pub fn new(start: Point2D<T>, end: Point2D<T>, inlier_count: usize) -> Self {
        Self {
            start,
            end,
            inlier_count,
        }
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> Point2D<T> {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> T {
        self.direction().length()
    }

    /// Endpoints as a tuple.
    #[inline]
    pub fn endpoints(&self) -> (Point2D<T>, Point2D<T>) {
        (self.start, self.end)
    }
}
