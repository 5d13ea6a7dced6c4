//! Obstacle and landmark extraction pipeline.
//!
//! ```text
//!   points + distances (one entry per beam)
//!              │
//!              ▼
//!     ┌─────────────────┐
//!     │    partition    │── split at range discontinuities
//!     └────────┬────────┘
//!              │ per partition
//!              ▼
//!     ┌─────────────────┐
//!     │  RANSAC lines   │── obstacles (LineSegment)
//!     └────────┬────────┘
//!              ▼
//!     ┌─────────────────┐
//!     │   loose ends    │── landmarks at occlusion edges
//!     └────────┬────────┘
//!              ▼
//!     ┌─────────────────┐
//!     │  intersections  │── landmarks at line crossings
//!     └─────────────────┘
//! ```
//!
//! The pipeline holds no state between calls; concurrent readers may each
//! run it on their own snapshot.

use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoadError;
use crate::core::{Point2D, Scalar, is_valid_distance};
use crate::error::{Error, Result};
use crate::features::{Landmark, LineSegment};

use super::intersection::{IntersectionConfig, detect_intersection_landmarks};
use super::partition::{PartitionConfig, loose_end_landmarks, partition};
use super::ransac_lines::{RansacLineConfig, fit_lines_with_rng};

/// Configuration for the full extraction pipeline.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Discontinuity detection
    #[serde(default)]
    pub partition: PartitionConfig,

    /// Line fitting
    #[serde(default)]
    pub ransac: RansacLineConfig,

    /// Intersection landmarks
    #[serde(default)]
    pub intersection: IntersectionConfig,
}

impl ExtractionConfig {
    pub fn validate(&self) -> std::result::Result<(), ConfigLoadError> {
        self.partition.validate()?;
        self.ransac.validate()?;
        self.intersection.validate()
    }
}

/// Obstacles and landmarks observed in one scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult<T> {
    /// Fitted obstacle edges, partition by partition in acceptance order.
    pub lines: Vec<LineSegment<T>>,
    /// Loose ends first (scan order), then intersections (pair order).
    pub landmarks: Vec<Landmark<T>>,
    /// Number of partitions the scan was split into.
    pub partition_count: usize,
}

impl<T: Scalar> ExtractionResult<T> {
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            landmarks: Vec::new(),
            partition_count: 0,
        }
    }

    /// Landmark positions without their kinds.
    pub fn landmark_points(&self) -> Vec<Point2D<T>> {
        self.landmarks.iter().map(|l| l.position).collect()
    }
}

/// Trait for scan-to-observation extraction algorithms.
///
/// `points[i]` and `distances[i]` describe beam `i`. Beams with an invalid
/// distance are ignored apart from their role in discontinuity detection.
pub trait LandmarkExtractor<T: Scalar>: Send + Sync {
    /// Extract obstacle edges and landmarks from one scan.
    ///
    /// Fails only if `points` and `distances` differ in length.
    fn extract(&self, points: &[Point2D<T>], distances: &[T]) -> Result<ExtractionResult<T>>;
}

/// RANSAC-based extractor: partition → RANSAC → loose ends → intersections.
#[derive(Clone, Debug, Default)]
pub struct RansacLandmarkExtractor {
    config: ExtractionConfig,
}

impl RansacLandmarkExtractor {
    /// Create a new extractor with the given configuration.
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Create an extractor after checking `config`.
    pub fn try_new(config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Get the configuration.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Run the pipeline drawing RANSAC samples from `rng`.
    pub fn extract_with_rng<T: Scalar, R: Rng + ?Sized>(
        &self,
        points: &[Point2D<T>],
        distances: &[T],
        rng: &mut R,
    ) -> Result<ExtractionResult<T>> {
        if points.len() != distances.len() {
            return Err(Error::LengthMismatch {
                points: points.len(),
                distances: distances.len(),
            });
        }

        let start = Instant::now();

        let partitions = partition(points, distances, &self.config.partition);
        let mut lines = Vec::new();
        for part in &partitions {
            lines.extend(fit_lines_with_rng(part, &self.config.ransac, rng));
        }

        let mut landmarks = loose_end_landmarks(points, distances, &self.config.partition);
        let loose_ends = landmarks.len();

        let observed: Vec<Point2D<T>> = points
            .iter()
            .zip(distances)
            .filter(|&(_, &d)| is_valid_distance(d))
            .map(|(&p, _)| p)
            .collect();
        landmarks.extend(detect_intersection_landmarks(
            &lines,
            &observed,
            &self.config.intersection,
        ));

        log::debug!(
            "Extracted {} lines from {} partitions, {} loose ends + {} intersections ({} of {} beams valid) in {}µs",
            lines.len(),
            partitions.len(),
            loose_ends,
            landmarks.len() - loose_ends,
            observed.len(),
            points.len(),
            start.elapsed().as_micros()
        );

        Ok(ExtractionResult {
            lines,
            landmarks,
            partition_count: partitions.len(),
        })
    }
}

impl<T: Scalar> LandmarkExtractor<T> for RansacLandmarkExtractor {
    fn extract(&self, points: &[Point2D<T>], distances: &[T]) -> Result<ExtractionResult<T>> {
        let mut rng = self.config.ransac.rng();
        self.extract_with_rng(points, distances, &mut rng)
    }
}
