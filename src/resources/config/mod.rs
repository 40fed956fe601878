pub mod kinematics;
pub mod oscillator;
pub mod wing;

pub use kinematics::KinematicsConfig;
pub use oscillator::OscillatorConfig;
pub use wing::{ConfigError, WingConfig, WingSource, WingType};
