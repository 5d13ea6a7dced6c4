//! Main DrishtiConfig and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::extraction::ExtractionConfig;
use crate::sensor::RangeSensorConfig;

use super::error::ConfigLoadError;

/// Path checked by [`DrishtiConfig::load_default`].
pub const DEFAULT_CONFIG_PATH: &str = "configs/drishti.yaml";

/// Full configuration loaded from YAML.
///
/// ```yaml
/// sensor:
///   beam_count: 181
///   max_range: 500.0
/// extraction:
///   partition:
///     discontinuity_threshold: 60.0
///   ransac:
///     iterations: 1000
///     seed: 42
///   intersection:
///     margin: 30.0
/// ```
///
/// Missing sections and fields fall back to their defaults.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DrishtiConfig {
    /// Range sensor settings
    #[serde(default)]
    pub sensor: RangeSensorConfig,

    /// Landmark extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl DrishtiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path, or defaults if the file is absent
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("{} not found, using default configuration", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse and validate from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check value ranges the algorithms rely on.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.sensor.validate()?;
        self.extraction.validate()?;
        if self.sensor.max_range != self.extraction.partition.max_range {
            log::warn!(
                "sensor.max_range ({}) differs from extraction.partition.max_range ({}); \
                 invalid beams will not read as the sensor's range limit",
                self.sensor.max_range,
                self.extraction.partition.max_range
            );
        }
        Ok(())
    }
}
