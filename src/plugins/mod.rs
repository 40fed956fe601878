mod wing;

pub use wing::{DeploymentSet, WingKinematicsPlugin};
