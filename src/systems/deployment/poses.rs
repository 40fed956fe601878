use bevy::prelude::*;

use crate::components::SurfaceKind;
use crate::resources::{DeploymentOscillator, SurfacePose, SurfacePoses};
use crate::systems::kinematics::WingKinematics;

/// Recomputes every part pose from the current deployments.
pub fn surface_pose_system(
    kinematics: Res<WingKinematics>,
    oscillator: Res<DeploymentOscillator>,
    mut poses: ResMut<SurfacePoses>,
) {
    let deployments = oscillator.deployments();
    let catalog = kinematics.catalog();

    poses.poses.clear();
    for kind in SurfaceKind::ALL {
        let deployment = deployments.get(kind).value();
        for segment in catalog.segments_for(kind) {
            let origin = catalog.stowed_origin(&segment);
            for (role, transform) in kinematics.parts_for(kind, &segment, deployment) {
                poses.poses.push(SurfacePose {
                    kind,
                    section_index: segment.section_index,
                    index: segment.index,
                    role,
                    transform,
                    world: transform.to_bevy_transform(&origin),
                });
            }
        }
    }
}
