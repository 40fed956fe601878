pub mod deployment;
pub mod planform;
pub mod surface;
pub mod transform;

pub use deployment::{DeploymentParameter, DeploymentPreset, SurfaceDeployments};
pub use planform::WingPlanform;
pub use surface::{Segment, SurfaceKind, SurfaceLayout, SurfaceSection};
pub use transform::{PartRole, SurfaceTransform};
