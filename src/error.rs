//! Error types for drishti

use crate::config::ConfigLoadError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Drishti error types
///
/// Geometric degeneracies (parallel lines, empty scans, invalid beams) are not
/// errors; they produce empty results. Only caller contract violations and
/// configuration problems surface here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Points and distances passed to extraction differ in length
    #[error("Length mismatch: {points} points but {distances} distances")]
    LengthMismatch {
        /// Number of points supplied
        points: usize,
        /// Number of distances supplied
        distances: usize,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}
