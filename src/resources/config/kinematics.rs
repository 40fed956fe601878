use serde::{Deserialize, Serialize};

use crate::utils::{
    deg_to_rad, AILERON_MAX_ANGLE_DEG, FLAP_EXTENSION_RATIO, FLAP_MAX_ANGLE_DEG, KinematicsError,
    SLAT_DEPTH, SLAT_DROP, SPOILER_MAX_ANGLE_DEG, VANE_OFFSET_X_RATIO, VANE_OFFSET_Y_RATIO,
    VANE_ROTATION_GAIN,
};

/// Travel limits of the deployable surfaces. Angles are stored in degrees to
/// keep configuration files readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicsConfig {
    /// Forward travel of a slat at the root (m).
    pub slat_depth: f64,
    /// Downward travel of a slat at the root (m).
    pub slat_drop: f64,
    /// Aft flap travel as a fraction of the local chord.
    pub flap_extension_ratio: f64,
    pub flap_max_angle_deg: f64,
    /// Vane rotation relative to the main flap.
    pub vane_rotation_gain: f64,
    /// Vane offset towards the wing as fractions of the local chord (x, y).
    pub vane_offset_ratio: (f64, f64),
    pub aileron_max_angle_deg: f64,
    pub spoiler_max_angle_deg: f64,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            slat_depth: SLAT_DEPTH,
            slat_drop: SLAT_DROP,
            flap_extension_ratio: FLAP_EXTENSION_RATIO,
            flap_max_angle_deg: FLAP_MAX_ANGLE_DEG,
            vane_rotation_gain: VANE_ROTATION_GAIN,
            vane_offset_ratio: (VANE_OFFSET_X_RATIO, VANE_OFFSET_Y_RATIO),
            aileron_max_angle_deg: AILERON_MAX_ANGLE_DEG,
            spoiler_max_angle_deg: SPOILER_MAX_ANGLE_DEG,
        }
    }
}

impl KinematicsConfig {
    pub fn flap_max_angle(&self) -> f64 {
        deg_to_rad(self.flap_max_angle_deg)
    }

    pub fn aileron_max_angle(&self) -> f64 {
        deg_to_rad(self.aileron_max_angle_deg)
    }

    pub fn spoiler_max_angle(&self) -> f64 {
        deg_to_rad(self.spoiler_max_angle_deg)
    }

    pub fn validate(&self) -> Result<(), KinematicsError> {
        let non_negative = [
            ("slat_depth", self.slat_depth),
            ("slat_drop", self.slat_drop),
            ("flap_extension_ratio", self.flap_extension_ratio),
            ("flap_max_angle_deg", self.flap_max_angle_deg),
            ("vane_rotation_gain", self.vane_rotation_gain),
            ("aileron_max_angle_deg", self.aileron_max_angle_deg),
            ("spoiler_max_angle_deg", self.spoiler_max_angle_deg),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(KinematicsError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        for angle in [
            self.flap_max_angle_deg,
            self.aileron_max_angle_deg,
            self.spoiler_max_angle_deg,
        ] {
            if angle > 90.0 {
                return Err(KinematicsError::InvalidConfig(format!(
                    "surface angles are limited to 90 degrees, got {}",
                    angle
                )));
            }
        }
        Ok(())
    }
}
