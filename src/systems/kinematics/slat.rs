use nalgebra::Vector3;

use crate::components::{Segment, SurfaceTransform};
use crate::resources::KinematicsConfig;
use crate::systems::kinematics::track::{slat_track, QuadraticBezier};
use crate::utils::{
    deg_to_rad, SLAT_ACTUATOR_RATIO, SLAT_ACTUATOR_STOWED_DEG, SLAT_ACTUATOR_SWING_DEG,
    SLAT_MOUNT_RATIO, SLAT_PISTON_RATIO, SLAT_ROLLER_RATIO,
};

/// Track of a slat, scaled by the local taper.
pub fn slat_track_for(taper: f64, config: &KinematicsConfig) -> QuadraticBezier {
    slat_track(config.slat_depth * taper, config.slat_drop * taper)
}

/// Slat law: forward and down along the curved track.
///
/// `forward = -depth * taper * d` and `drop = -drop * taper * d * (2 - d)`, so
/// the descent decelerates as the slat approaches full travel. Slat travel is
/// absolute rather than chord-relative; only the taper varies along the span.
pub fn slat_transform(
    _segment: &Segment,
    deployment: f64,
    taper: f64,
    config: &KinematicsConfig,
) -> SurfaceTransform {
    SurfaceTransform::translation_only(slat_track_for(taper, config).point(deployment))
}

/// Track roller carriage, which trails the slat along the track.
pub fn slat_roller(slat: &SurfaceTransform) -> SurfaceTransform {
    SurfaceTransform::translation_only(slat.translation * SLAT_ROLLER_RATIO)
}

/// Point `ratio` of the way along the straight line to full slat travel.
fn along_travel(ratio: f64, config: &KinematicsConfig) -> Vector3<f64> {
    Vector3::new(-config.slat_depth * ratio, -config.slat_drop * ratio, 0.0)
}

/// Inclination shared by the actuator body and piston, swinging from 45° stowed
/// to 15° at full travel.
fn actuator_angle(deployment: f64) -> f64 {
    deg_to_rad(SLAT_ACTUATOR_STOWED_DEG - deployment * SLAT_ACTUATOR_SWING_DEG)
}

/// Hydraulic actuator body. It sits back along the travel line when stowed and
/// closes up on its base as the slat runs out.
pub fn slat_actuator(deployment: f64, config: &KinematicsConfig) -> SurfaceTransform {
    SurfaceTransform::new(
        along_travel(SLAT_ACTUATOR_RATIO * (1.0 - deployment), config),
        actuator_angle(deployment),
    )
}

pub fn slat_piston(deployment: f64, config: &KinematicsConfig) -> SurfaceTransform {
    SurfaceTransform::new(
        along_travel(SLAT_PISTON_RATIO * deployment, config),
        actuator_angle(deployment),
    )
}

/// Mounting point where the piston meets the slat.
pub fn slat_mount(deployment: f64, config: &KinematicsConfig) -> SurfaceTransform {
    SurfaceTransform::translation_only(along_travel(SLAT_MOUNT_RATIO * deployment, config))
}
