use nalgebra::Vector3;

use crate::components::{Segment, SurfaceTransform};
use crate::resources::KinematicsConfig;

/// Trailing hinge edge of a spoiler panel, relative to the panel centre.
pub fn spoiler_hinge(segment: &Segment) -> Vector3<f64> {
    Vector3::new(segment.surface_chord / 2.0, 0.0, 0.0)
}

/// Spoiler law: rotation of `-deployment * max_angle` about `pivot`, so the
/// leading edge lifts out of the upper surface.
pub fn spoiler_transform(
    _segment: &Segment,
    deployment: f64,
    _taper: f64,
    config: &KinematicsConfig,
    pivot: &Vector3<f64>,
) -> SurfaceTransform {
    SurfaceTransform::rotation_about(pivot, -deployment * config.spoiler_max_angle())
}

/// Actuator attachment on the panel underside, carried with the panel.
pub fn hinge_arm(segment: &Segment, spoiler: &SurfaceTransform) -> SurfaceTransform {
    let rest = Vector3::new(0.0, -segment.thickness, 0.0);
    SurfaceTransform::new(spoiler.apply(&rest), spoiler.rotation)
}

/// Hydraulic actuator of a spoiler, hung two panel thicknesses below it.
///
/// Returns the cylinder, the piston and the link that joins the piston to
/// the panel. Cylinder and piston stroke with the deployment; the link swings
/// with the panel angle.
pub fn spoiler_actuator(
    segment: &Segment,
    deployment: f64,
    config: &KinematicsConfig,
) -> [SurfaceTransform; 3] {
    let width = segment.surface_chord;
    let t = segment.thickness;
    let angle = deployment * config.spoiler_max_angle();
    let (sin, cos) = angle.sin_cos();
    let base = -2.0 * t;
    let stroke = base - 2.0 * t - 2.0 * t * deployment;

    let cylinder = SurfaceTransform::translation_only(Vector3::new(width / 4.0, stroke, 0.0));
    let piston = SurfaceTransform::translation_only(Vector3::new(
        width / 4.0 - 2.0 * t + 4.0 * t * deployment,
        stroke,
        0.0,
    ));
    let link = SurfaceTransform::new(
        Vector3::new(-width / 4.0 + width * sin / 2.0, base + 2.0 * t * cos, 0.0),
        -angle,
    );
    [cylinder, piston, link]
}
