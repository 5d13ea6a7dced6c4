//! Obstacle and landmark extraction from range scans.
//!
//! # Algorithms
//!
//! - **Partitioning**: split the scan at range discontinuities
//! - **Loose ends**: landmarks at occlusion edges
//! - **RANSAC Lines**: robust line fitting per partition
//! - **Intersections**: landmarks where fitted lines cross near observed points
//!
//! [`RansacLandmarkExtractor`] chains all four behind the [`LandmarkExtractor`]
//! trait. The stages are also exported individually.

pub mod intersection;
pub mod partition;
pub mod pipeline;
pub mod ransac_lines;

pub use intersection::{IntersectionConfig, detect_intersection_landmarks};
pub use partition::{PartitionConfig, loose_end_landmarks, partition};
pub use pipeline::{ExtractionConfig, ExtractionResult, LandmarkExtractor, RansacLandmarkExtractor};
pub use ransac_lines::{RansacLineConfig, RansacLineFitter, fit_lines, fit_lines_with_rng};
