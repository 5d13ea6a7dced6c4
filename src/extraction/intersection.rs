//! Corner landmarks at line intersections.
//!
//! Every pair of fitted lines is intersected as infinite lines. The crossing
//! is snapped to the nearest observed scan point, which becomes a landmark if
//! it is close to the crossing and near both segments.

use serde::{Deserialize, Serialize};

use crate::config::ConfigLoadError;
use crate::config::defaults;
use crate::core::math::{line_intersection, nearest_point, within_expanded_bounds};
use crate::core::{Point2D, Scalar};
use crate::features::{Landmark, LineSegment};

/// Configuration for intersection landmark detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntersectionConfig {
    /// Maximum distance between a crossing and its nearest scan point, and
    /// the growth applied to each segment's bounding box.
    /// Default: 30
    #[serde(default = "defaults::intersection_margin")]
    pub margin: f64,

    /// Line pairs whose direction sine is below this are treated as parallel.
    /// Default: 1e-6
    #[serde(default = "defaults::parallel_tolerance")]
    pub parallel_tolerance: f64,
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self {
            margin: defaults::intersection_margin(),
            parallel_tolerance: defaults::parallel_tolerance(),
        }
    }
}

impl IntersectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the intersection margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Builder-style setter for the parallel tolerance.
    pub fn with_parallel_tolerance(mut self, tolerance: f64) -> Self {
        self.parallel_tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if !(self.margin >= 0.0) || !(self.parallel_tolerance >= 0.0) {
            return Err(ConfigLoadError::Validation(
                "extraction.intersection values must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Landmarks at the crossings of every pair of `lines`.
///
/// Pairs are visited as `(i, j)` with `i < j`. A pair yields a landmark when
/// its crossing exists (lines not parallel), the nearest point in `points` is
/// closer than `margin` to it, and that point lies strictly within both
/// segments' bounding boxes grown by `margin`. Several pairs may snap to the
/// same point; duplicates are kept.
pub fn detect_intersection_landmarks<T: Scalar>(
    lines: &[LineSegment<T>],
    points: &[Point2D<T>],
    config: &IntersectionConfig,
) -> Vec<Landmark<T>> {
    let margin = T::from_f64(config.margin);
    let tolerance = T::from_f64(config.parallel_tolerance);
    let mut landmarks = Vec::new();

    for (i, l1) in lines.iter().enumerate() {
        for l2 in &lines[i + 1..] {
            let Some(crossing) = line_intersection(l1.start, l1.end, l2.start, l2.end, tolerance)
            else {
                continue;
            };
            let Some((idx, dist)) = nearest_point(points, crossing) else {
                continue;
            };
            let candidate = points[idx];
            if dist < margin
                && within_expanded_bounds(candidate, l1.start, l1.end, margin)
                && within_expanded_bounds(candidate, l2.start, l2.end, margin)
            {
                landmarks.push(Landmark::intersection(candidate));
            }
        }
    }

    landmarks
}
