//! Point landmarks.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// How a landmark was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandmarkKind {
    /// Occlusion edge at a range discontinuity.
    LooseEnd,
    /// Observed point nearest to the crossing of two fitted lines.
    Intersection,
}

/// A single observed scan point flagged as a feature.
///
/// `position` is always one of the input points, never an interpolated one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Landmark<T> {
    pub position: Point2D<T>,
    pub kind: LandmarkKind,
}

impl<T> Landmark<T> {
    #[inline]
    pub fn loose_end(position: Point2D<T>) -> Self {
        Self {
            position,
            kind: LandmarkKind::LooseEnd,
        }
    }

    #[inline]
    pub fn intersection(position: Point2D<T>) -> Self {
        Self {
            position,
            kind: LandmarkKind::Intersection,
        }
    }
}
