//! Unified configuration loading for drishti.
//!
//! Loads sensor and extraction settings from a single YAML file.

pub(crate) mod defaults;
mod drishti;
mod error;

pub use drishti::{DEFAULT_CONFIG_PATH, DrishtiConfig};
pub use error::ConfigLoadError;
