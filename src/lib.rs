//! # Drishti: Range Sensor Simulation and Landmark Extraction
//!
//! Simulates a rotating-beam range sensor inside a 2D world and turns each
//! scan into a compact geometric observation: straight obstacle edges and
//! point landmarks, ready for a localization or mapping front end.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use drishti::core::Point2D;
//! use drishti::extraction::{LandmarkExtractor, RansacLandmarkExtractor};
//! use drishti::sensor::{RangeSensor, RangeSensorConfig, SegmentObstacle};
//!
//! let sensor = Arc::new(RangeSensor::<f64>::new(RangeSensorConfig::default()));
//! let walls = [SegmentObstacle::new(Point2D::new(100.0, -200.0), Point2D::new(100.0, 200.0))];
//!
//! // Simulation tick
//! sensor.update(Point2D::zero(), 0.0, &walls);
//!
//! // Any reader thread
//! let scan = sensor.read_snapshot();
//! let points = scan.to_cartesian(Point2D::zero());
//! let result = RansacLandmarkExtractor::default()
//!     .extract(&points, &scan.distances)
//!     .unwrap();
//! println!("{} lines, {} landmarks", result.lines.len(), result.landmarks.len());
//! ```
//!
//! ## Data Flow
//!
//! ```text
//!   obstacles ──▶ RangeSensor::update (writer tick)
//!                        │ atomic publish
//!                        ▼
//!                  ScanSnapshot ──▶ read_snapshot (readers, by copy)
//!                        │ to_cartesian()
//!                        ▼
//!              points + distances
//!                        │
//!                        ▼
//!            RansacLandmarkExtractor::extract
//!                        │
//!                        ▼
//!          LineSegments + Landmarks (ExtractionResult)
//! ```
//!
//! ## Modules
//!
//! - [`core`]: precision trait, points, geometry helpers
//! - [`config`]: YAML configuration
//! - [`sensor`]: obstacles, noise, range sensor
//! - [`features`]: line segments and landmarks
//! - [`extraction`]: partitioning, RANSAC, intersections, pipeline
//!
//! All types are generic over [`core::Scalar`] (`f32` or `f64`).

pub mod config;
pub mod core;
pub mod error;
pub mod extraction;
pub mod features;
pub mod sensor;

// Re-export main types at crate root
pub use config::{ConfigLoadError, DrishtiConfig};
pub use error::{Error, Result};
pub use extraction::{ExtractionConfig, ExtractionResult, LandmarkExtractor, RansacLandmarkExtractor};
pub use features::{Landmark, LandmarkKind, LineSegment};
pub use sensor::{Obstacle, RangeSensor, RangeSensorConfig, ScanSnapshot};
