use nalgebra::Vector3;

use crate::components::{Segment, SurfaceTransform};
use crate::resources::KinematicsConfig;
use crate::systems::kinematics::track::{flap_track, CubicBezier};
use crate::utils::FLAP_ACTUATOR_DROP;

/// Progress through the two Fowler phases for a deployment `d` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlapPhases {
    /// Aft slide, complete at `d = 0.5`.
    pub extension: f64,
    /// Rotation about the hinge, starting at `d = 0.5`.
    pub rotation: f64,
}

impl FlapPhases {
    pub fn at(deployment: f64) -> Self {
        Self {
            extension: (2.0 * deployment).min(1.0),
            rotation: (2.0 * deployment - 1.0).max(0.0),
        }
    }
}

/// Flap track for a segment; its chordwise reach is the full aft travel.
pub fn flap_track_for(segment: &Segment, taper: f64, config: &KinematicsConfig) -> CubicBezier {
    flap_track(config.flap_extension_ratio * segment.chord_at_span * taper)
}

/// Flap law: slide straight aft, then rotate about the hinge with the aft
/// position held.
pub fn flap_transform(
    segment: &Segment,
    deployment: f64,
    taper: f64,
    config: &KinematicsConfig,
) -> SurfaceTransform {
    let phases = FlapPhases::at(deployment);
    let aft = flap_track_for(segment, taper, config).chordwise_reach() * phases.extension;
    SurfaceTransform::new(
        Vector3::new(aft, 0.0, 0.0),
        config.flap_max_angle() * phases.rotation,
    )
}

/// Auxiliary vane: over-rotates relative to the main flap and tucks in
/// towards the wing in proportion to deployment.
pub fn vane_transform(
    segment: &Segment,
    deployment: f64,
    flap: &SurfaceTransform,
    config: &KinematicsConfig,
) -> SurfaceTransform {
    let (x_ratio, y_ratio) = config.vane_offset_ratio;
    let offset = Vector3::new(
        -segment.chord_at_span * x_ratio * deployment,
        -segment.chord_at_span * y_ratio * deployment,
        0.0,
    );
    SurfaceTransform::new(
        flap.translation + offset,
        flap.rotation * config.vane_rotation_gain,
    )
}

/// Track bracket standing one panel thickness off the element's upper surface.
pub fn track_bracket(element: &SurfaceTransform, thickness: f64) -> SurfaceTransform {
    let (sin, cos) = element.rotation.sin_cos();
    SurfaceTransform::new(
        element.translation + Vector3::new(-sin * thickness, cos * thickness, 0.0),
        element.rotation,
    )
}

/// Actuator arm. Its housing hangs below the hinge line halfway along the
/// flap's full aft travel; the arm follows the flap at half its travel and
/// half its angle while dipping further as the flap deploys.
pub fn actuator_arm(
    segment: &Segment,
    deployment: f64,
    flap: &SurfaceTransform,
    config: &KinematicsConfig,
) -> SurfaceTransform {
    let housing = Vector3::new(
        config.flap_extension_ratio * segment.chord_at_span * 0.5,
        -FLAP_ACTUATOR_DROP,
        0.0,
    );
    let stroke = Vector3::new(
        flap.translation.x * 0.5,
        -FLAP_ACTUATOR_DROP * deployment,
        0.0,
    );
    SurfaceTransform::new(housing + stroke, flap.rotation * 0.5)
}
