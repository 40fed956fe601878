use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::components::{SurfaceLayout, WingPlanform};
use crate::resources::config::{KinematicsConfig, OscillatorConfig};
use crate::utils::{KinematicsError, DEFAULT_TRACK_RESOLUTION};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid wing configuration: {0}")]
    Validation(#[from] KinematicsError),
}

/// Everything needed to build the kinematics engine and the oscillator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WingConfig {
    pub name: String,
    pub planform: WingPlanform,
    pub kinematics: KinematicsConfig,
    pub oscillator: OscillatorConfig,
    /// Number of polyline segments per sampled track.
    pub track_resolution: usize,
    /// Custom surface layout; the standard layout is used when absent.
    pub layouts: Option<Vec<SurfaceLayout>>,
    /// Gaps in the fixed leading edge that the slats must fill.
    pub leading_edge_gaps: Option<Vec<(f64, f64)>>,
}

impl Default for WingConfig {
    fn default() -> Self {
        Self::from_programmed(WingType::StandardTransport)
    }
}

impl WingConfig {
    /// Creates a wing configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - A `WingSource` enum specifying if the configuration is hardcoded
    ///              (`Programmed`) or loaded from a file (`File`).
    pub fn new(source: WingSource) -> Result<Self, ConfigError> {
        match source {
            WingSource::Programmed(wing_type) => Ok(Self::from_programmed(wing_type)),
            WingSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(wing_type: WingType) -> Self {
        let name = match &wing_type {
            WingType::StandardTransport => "StandardTransport".to_string(),
            WingType::Custom(name) => name.clone(),
        };
        Self {
            name,
            planform: WingPlanform::standard(),
            kinematics: KinematicsConfig::default(),
            oscillator: OscillatorConfig::default(),
            track_resolution: DEFAULT_TRACK_RESOLUTION,
            layouts: None,
            leading_edge_gaps: None,
        }
    }

    /// Reads a YAML file and checks the scalar settings. The surface layout is
    /// validated when the catalog is built.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&file_contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: WingConfig = serde_yaml::from_str(contents)?;
        config.kinematics.validate()?;
        config.oscillator.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }
}

/// Source for wing configuration.
#[derive(Debug, Clone)]
pub enum WingSource {
    Programmed(WingType),
    File(PathBuf),
}

/// Built-in wings.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum WingType {
    StandardTransport,
    Custom(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = WingConfig::default();
        assert_eq!(config.name, "StandardTransport");
        assert_eq!(config.track_resolution, DEFAULT_TRACK_RESOLUTION);
        assert!(config.layouts.is_none());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = WingConfig::from_yaml(
            "name: Stubby\nplanform:\n  span: 4.0\n  root_chord: 1.8\n  tip_chord: 1.2\n",
        )
        .unwrap();
        assert_eq!(config.name, "Stubby");
        assert_eq!(config.planform.span(), 4.0);
        assert_eq!(config.kinematics, KinematicsConfig::default());
        assert_eq!(config.oscillator, OscillatorConfig::default());
    }

    #[test]
    fn test_rejects_bad_oscillator() {
        let result = WingConfig::from_yaml("oscillator:\n  step: 0.0\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let mut config = WingConfig::new(WingSource::Programmed(WingType::Custom(
            "Demo".to_string(),
        )))
        .unwrap();
        config.track_resolution = 32;

        let file = NamedTempFile::new().unwrap();
        config.save(file.path()).unwrap();
        let loaded = WingConfig::new(WingSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let result = WingConfig::from_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }
}
