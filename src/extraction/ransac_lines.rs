//! RANSAC-based line fitting.
//!
//! Fits straight obstacle edges to one scan partition using Random Sample
//! Consensus. RANSAC is robust to outliers and finds the dominant line first,
//! then repeats on the points it did not explain.
//!
//! # Algorithm
//!
//! ```text
//! pool = partition points (scan order)
//! loop:
//!     repeat `iterations` times:
//!         sample two points from pool → candidate line
//!         inliers = pool points within `inlier_threshold` of the line
//!         keep the candidate with most inliers (first found wins ties)
//!     if best inliers > min_inliers:
//!         emit segment(first inlier, last inlier), remove inliers from pool
//!     stop if nothing was emitted or pool < min_inliers + 2
//! ```
//!
//! Sampling is random, so repeated runs on the same input may move segment
//! boundaries by a point or two. Pass a fixed seed (or your own RNG) when
//! results must be reproducible.
//!
//! # Usage
//!
//! ```rust,ignore
//! use drishti::extraction::{RansacLineConfig, RansacLineFitter};
//!
//! let fitter = RansacLineFitter::new(RansacLineConfig::default().with_seed(42));
//! let lines = fitter.fit_lines(&partition);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoadError;
use crate::config::defaults;
use crate::core::math::perpendicular_distance;
use crate::core::{Point2D, Scalar};
use crate::features::LineSegment;

/// Configuration for RANSAC line fitting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RansacLineConfig {
    /// Number of two-point trials per extracted line.
    /// Default: 1000
    #[serde(default = "defaults::ransac_iterations")]
    pub iterations: usize,

    /// Perpendicular distance below which a point supports a candidate line.
    /// Default: 4
    #[serde(default = "defaults::inlier_threshold")]
    pub inlier_threshold: f64,

    /// A line is accepted only with strictly more inliers than this.
    /// Default: 15
    #[serde(default = "defaults::min_inliers")]
    pub min_inliers: usize,

    /// Random seed for reproducibility.
    /// 0 = use entropy-based seed (non-deterministic).
    /// Default: 0
    #[serde(default)]
    pub seed: u64,
}

impl Default for RansacLineConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::ransac_iterations(),
            inlier_threshold: defaults::inlier_threshold(),
            min_inliers: defaults::min_inliers(),
            seed: 0,
        }
    }
}

impl RansacLineConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Builder-style setter for inlier threshold.
    pub fn with_inlier_threshold(mut self, threshold: f64) -> Self {
        self.inlier_threshold = threshold;
        self
    }

    /// Builder-style setter for minimum inliers.
    pub fn with_min_inliers(mut self, min_inliers: usize) -> Self {
        self.min_inliers = min_inliers;
        self
    }

    /// Builder-style setter for random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Random source described by `seed`.
    pub fn rng(&self) -> SmallRng {
        if self.seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(self.seed)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.iterations == 0 {
            return Err(ConfigLoadError::Validation(
                "extraction.ransac.iterations must be positive".to_string(),
            ));
        }
        if !(self.inlier_threshold > 0.0) {
            return Err(ConfigLoadError::Validation(format!(
                "extraction.ransac.inlier_threshold must be positive, got {}",
                self.inlier_threshold
            )));
        }
        Ok(())
    }
}

/// Fit line segments to one partition using the config's seed.
pub fn fit_lines<T: Scalar>(points: &[Point2D<T>], config: &RansacLineConfig) -> Vec<LineSegment<T>> {
    let mut rng = config.rng();
    fit_lines_with_rng(points, config, &mut rng)
}

/// Fit line segments to one partition, drawing samples from `rng`.
///
/// Segments are returned in acceptance order (strongest first). Their
/// endpoints are the first and last inlier in scan order.
pub fn fit_lines_with_rng<T: Scalar, R: Rng + ?Sized>(
    points: &[Point2D<T>],
    config: &RansacLineConfig,
    rng: &mut R,
) -> Vec<LineSegment<T>> {
    let mut lines = Vec::new();
    if points.len() < 2 {
        return lines;
    }

    let threshold = T::from_f64(config.inlier_threshold);
    let mut remaining: Vec<Point2D<T>> = points.to_vec();
    let mut current_inliers: Vec<usize> = Vec::with_capacity(points.len());
    let mut best_inliers: Vec<usize> = Vec::with_capacity(points.len());

    loop {
        // A round can only succeed with more than min_inliers points left
        if remaining.len() < 2 || remaining.len() <= config.min_inliers {
            break;
        }

        best_inliers.clear();
        for _ in 0..config.iterations {
            let p1 = remaining[rng.gen_range(0..remaining.len())];
            let p2 = remaining[rng.gen_range(0..remaining.len())];

            current_inliers.clear();
            for (k, &p) in remaining.iter().enumerate() {
                // Coincident samples define no line and yield no inliers
                match perpendicular_distance(p1, p2, p) {
                    Some(d) if d < threshold => current_inliers.push(k),
                    Some(_) => {}
                    None => break,
                }
            }

            if current_inliers.len() > best_inliers.len() {
                std::mem::swap(&mut best_inliers, &mut current_inliers);
            }
        }

        if best_inliers.len() <= config.min_inliers {
            break;
        }

        let (Some(&first), Some(&last)) = (best_inliers.first(), best_inliers.last()) else {
            break;
        };
        let segment = LineSegment::new(remaining[first], remaining[last], best_inliers.len());
        log::trace!(
            "RANSAC line {}: {} inliers, ({:.2}, {:.2}) → ({:.2}, {:.2})",
            lines.len(),
            segment.inlier_count,
            segment.start.x,
            segment.start.y,
            segment.end.x,
            segment.end.y
        );
        lines.push(segment);

        let mut keep = vec![true; remaining.len()];
        for &k in &best_inliers {
            keep[k] = false;
        }
        let mut flags = keep.into_iter();
        remaining.retain(|_| flags.next().unwrap_or(true));

        if remaining.len() < config.min_inliers + 2 {
            break;
        }
    }

    lines
}

/// RANSAC line fitter bound to one configuration.
#[derive(Clone, Debug, Default)]
pub struct RansacLineFitter {
    config: RansacLineConfig,
}

impl RansacLineFitter {
    /// Create a new fitter with the given configuration.
    pub fn new(config: RansacLineConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RansacLineConfig {
        &self.config
    }

    /// Fit lines with a fresh RNG derived from the configured seed.
    pub fn fit_lines<T: Scalar>(&self, points: &[Point2D<T>]) -> Vec<LineSegment<T>> {
        fit_lines(points, &self.config)
    }

    /// Fit lines drawing samples from a caller-supplied RNG.
    pub fn fit_lines_with_rng<T: Scalar, R: Rng + ?Sized>(
        &self,
        points: &[Point2D<T>],
        rng: &mut R,
    ) -> Vec<LineSegment<T>> {
        fit_lines_with_rng(points, &self.config, rng)
    }
}
