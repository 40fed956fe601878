pub mod catalog;
pub mod config;
mod oscillator;
mod poses;

pub use catalog::SurfaceCatalog;
pub use config::{
    ConfigError, KinematicsConfig, OscillatorConfig, WingConfig, WingSource, WingType,
};
pub use oscillator::{DeployTarget, DeploymentOscillator, Direction, OscillatorState};
pub use poses::{SurfacePose, SurfacePoses};
