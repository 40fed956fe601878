use nalgebra::Vector3;

use crate::components::{Segment, SurfaceTransform};
use crate::resources::KinematicsConfig;

/// Aileron law: pure rotation about the hinge line, `deflection * max_angle`.
/// Positive deflection is trailing edge up.
pub fn aileron_transform(
    _segment: &Segment,
    deflection: f64,
    _taper: f64,
    config: &KinematicsConfig,
) -> SurfaceTransform {
    SurfaceTransform::new(Vector3::zeros(), deflection * config.aileron_max_angle())
}

/// Control rod end, hung two panel thicknesses below the hinge and carried
/// round with the surface.
///
/// The rod end moves rigidly with the panel, so at deflection `θ` it sits at
/// `(2t·sinθ, -2t·cosθ)`: trailing edge up swings it aft.
pub fn control_rod(segment: &Segment, aileron: &SurfaceTransform) -> SurfaceTransform {
    let rest = Vector3::new(0.0, -2.0 * segment.thickness, 0.0);
    SurfaceTransform::new(aileron.apply(&rest), aileron.rotation)
}
