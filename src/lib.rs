pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{
    DeploymentParameter, DeploymentPreset, PartRole, Segment, SurfaceDeployments, SurfaceKind,
    SurfaceTransform, WingPlanform,
};
pub use plugins::WingKinematicsPlugin;
pub use resources::{
    DeployTarget, DeploymentOscillator, OscillatorState, SurfaceCatalog, WingConfig,
};
pub use systems::WingKinematics;
pub use utils::KinematicsError;
