//! Core types for the drishti library.
//!
//! - [`Scalar`]: precision abstraction implemented for `f32` and `f64`
//! - [`Point2D`]: 2D point/vector
//! - [`math`]: perpendicular distance, line intersection, bounds checks

pub mod math;
mod point;
mod scalar;

pub use point::Point2D;
pub use scalar::{Scalar, is_valid_distance};
