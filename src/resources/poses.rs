use bevy::prelude::*;
use serde::Serialize;

use crate::components::{PartRole, SurfaceKind, SurfaceTransform};

/// Pose of one moving part, as computed for the current frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfacePose {
    pub kind: SurfaceKind,
    pub section_index: usize,
    pub index: usize,
    pub role: PartRole,
    /// Motion relative to the segment's stowed frame.
    pub transform: SurfaceTransform,
    /// Placement in the wing box frame, ready for a renderer.
    #[serde(skip)]
    pub world: Transform,
}

/// Every part pose of the wing, rebuilt each frame from the current deployments.
#[derive(Resource, Debug, Clone, Default)]
pub struct SurfacePoses {
    pub poses: Vec<SurfacePose>,
}

impl SurfacePoses {
    pub fn for_kind(&self, kind: SurfaceKind) -> impl Iterator<Item = &SurfacePose> + '_ {
        self.poses.iter().filter(move |pose| pose.kind == kind)
    }

    /// Main panel poses only.
    pub fn surfaces(&self) -> impl Iterator<Item = &SurfacePose> + '_ {
        self.poses
            .iter()
            .filter(|pose| pose.role == PartRole::Surface)
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}
