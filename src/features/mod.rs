//! Geometric observations produced by extraction.

mod landmark;
mod line_segment;

pub use landmark::{Landmark, LandmarkKind};
pub use line_segment::LineSegment;
