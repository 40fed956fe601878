use bevy::prelude::*;
use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{pivot_correction, rotate_about_span};

/// Rigid motion of a part relative to its stowed frame: a translation plus a
/// rotation (radians) about the span axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTransform {
    pub translation: Vector3<f64>,
    pub rotation: f64,
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl SurfaceTransform {
    pub fn new(translation: Vector3<f64>, rotation: f64) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), 0.0)
    }

    pub fn translation_only(translation: Vector3<f64>) -> Self {
        Self::new(translation, 0.0)
    }

    /// Pure rotation about `pivot`, expressed in the part's stowed frame.
    pub fn rotation_about(pivot: &Vector3<f64>, rotation: f64) -> Self {
        Self::new(pivot_correction(pivot, rotation), rotation)
    }

    /// Re-expresses this transform so its rotation happens about `pivot`
    /// instead of the frame origin.
    pub fn with_pivot(self, pivot: &Vector3<f64>) -> Self {
        Self::new(
            self.translation + pivot_correction(pivot, self.rotation),
            self.rotation,
        )
    }

    /// Maps a point from the stowed frame to its deployed position.
    pub fn apply(&self, point: &Vector3<f64>) -> Vector3<f64> {
        rotate_about_span(point, self.rotation) + self.translation
    }

    pub fn is_identity(&self) -> bool {
        self.rotation == 0.0 && self.translation == Vector3::zeros()
    }

    /// Pose in the wing box frame for a part whose stowed frame sits at `origin`.
    pub fn to_isometry(&self, origin: &Vector3<f64>) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::from(origin + self.translation),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.rotation),
        )
    }

    /// Render-side transform in single precision.
    pub fn to_bevy_transform(&self, origin: &Vector3<f64>) -> Transform {
        let position = origin + self.translation;
        Transform::from_xyz(position.x as f32, position.y as f32, position.z as f32)
            .with_rotation(Quat::from_rotation_z(self.rotation as f32))
    }
}

/// Which moving part of a segment a transform belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartRole {
    /// The surface panel itself.
    Surface,
    /// Fowler flap auxiliary vane.
    Vane,
    /// Slat track roller carriage.
    Roller,
    /// Flap track bracket.
    Bracket,
    /// Aileron control rod end.
    ControlRod,
    /// Spoiler actuator hinge arm.
    HingeArm,
    /// Hydraulic actuator body (slat, spoiler) or actuator arm (flap).
    Actuator,
    Piston,
    /// Moving actuator mounting point on a slat.
    Mount,
    /// Link joining the spoiler actuator to the panel.
    Link,
}
