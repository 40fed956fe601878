use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{
    KinematicsError, STANDARD_MAX_THICKNESS, STANDARD_ROOT_CHORD, STANDARD_SPAN,
    STANDARD_TIP_CHORD, TAPER_RELIEF,
};

/// Tapering law of the wing: chord and thickness as a function of span position.
///
/// The wing spans `[-span / 2, span / 2]` with the root at span position `0.0`.
/// Positions beyond the tips are clamped, so no query extrapolates past the
/// physical wing.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlanform", into = "RawPlanform")]
pub struct WingPlanform {
    span: f64,
    root_chord: f64,
    tip_chord: f64,
    max_thickness: f64,
}

impl Default for WingPlanform {
    fn default() -> Self {
        Self::standard()
    }
}

impl WingPlanform {
    /// Creates a planform, rejecting degenerate dimensions.
    ///
    /// # Arguments
    /// * `span` - Full tip-to-tip span (m), must be positive.
    /// * `root_chord` - Chord at the root (m), at least the tip chord.
    /// * `tip_chord` - Chord at the tips (m), must be positive.
    /// * `max_thickness` - Section thickness at the root (m), must be positive.
    pub fn new(
        span: f64,
        root_chord: f64,
        tip_chord: f64,
        max_thickness: f64,
    ) -> Result<Self, KinematicsError> {
        if !(span > 0.0 && span.is_finite()) {
            return Err(KinematicsError::InvalidPlanform(format!(
                "span must be positive, got {}",
                span
            )));
        }
        if !(tip_chord > 0.0 && tip_chord.is_finite()) {
            return Err(KinematicsError::InvalidPlanform(format!(
                "tip chord must be positive, got {}",
                tip_chord
            )));
        }
        if !(root_chord >= tip_chord && root_chord.is_finite()) {
            return Err(KinematicsError::InvalidPlanform(format!(
                "root chord {} is smaller than tip chord {}",
                root_chord, tip_chord
            )));
        }
        if !(max_thickness > 0.0 && max_thickness.is_finite()) {
            return Err(KinematicsError::InvalidPlanform(format!(
                "max thickness must be positive, got {}",
                max_thickness
            )));
        }

        Ok(Self {
            span,
            root_chord,
            tip_chord,
            max_thickness,
        })
    }

    /// The 5 m semi-tapered wing the standard surface layout is drawn for.
    pub fn standard() -> Self {
        Self {
            span: STANDARD_SPAN,
            root_chord: STANDARD_ROOT_CHORD,
            tip_chord: STANDARD_TIP_CHORD,
            max_thickness: STANDARD_MAX_THICKNESS,
        }
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn half_span(&self) -> f64 {
        self.span / 2.0
    }

    pub fn root_chord(&self) -> f64 {
        self.root_chord
    }

    pub fn tip_chord(&self) -> f64 {
        self.tip_chord
    }

    pub fn max_thickness(&self) -> f64 {
        self.max_thickness
    }

    /// Signed position as a fraction of the half span, in `[-1, 1]`.
    pub fn half_span_ratio(&self, span_position: f64) -> f64 {
        (span_position / self.half_span()).clamp(-1.0, 1.0)
    }

    /// Position measured from the left tip as a fraction of the full span, in `[0, 1]`.
    pub fn normalized_span_ratio(&self, span_position: f64) -> f64 {
        ((span_position + self.half_span()) / self.span).clamp(0.0, 1.0)
    }

    /// Chord length, root chord at the root and tip chord at either tip.
    pub fn chord_at(&self, span_position: f64) -> f64 {
        let outboard = self.half_span_ratio(span_position).abs();
        self.root_chord - (self.root_chord - self.tip_chord) * outboard
    }

    /// Motion scale applied to deployable surfaces, 1 at the root and 0.8 at the tips.
    pub fn taper_factor(&self, span_position: f64) -> f64 {
        1.0 - TAPER_RELIEF * self.half_span_ratio(span_position).abs()
    }

    /// Section thickness, thinning by the same relief as the taper factor.
    pub fn thickness_at(&self, span_position: f64) -> f64 {
        self.max_thickness * self.taper_factor(span_position)
    }
}

/// Unchecked mirror used so deserialized planforms go through validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPlanform {
    span: f64,
    root_chord: f64,
    tip_chord: f64,
    #[serde(default = "default_max_thickness")]
    max_thickness: f64,
}

fn default_max_thickness() -> f64 {
    STANDARD_MAX_THICKNESS
}

impl TryFrom<RawPlanform> for WingPlanform {
    type Error = KinematicsError;

    fn try_from(raw: RawPlanform) -> Result<Self, Self::Error> {
        Self::new(raw.span, raw.root_chord, raw.tip_chord, raw.max_thickness)
    }
}

impl From<WingPlanform> for RawPlanform {
    fn from(planform: WingPlanform) -> Self {
        Self {
            span: planform.span,
            root_chord: planform.root_chord,
            tip_chord: planform.tip_chord,
            max_thickness: planform.max_thickness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_chord_interpolates_root_to_tip() {
        let planform = WingPlanform::standard();
        assert_relative_eq!(planform.chord_at(0.0), 2.0);
        assert_relative_eq!(planform.chord_at(2.5), 1.4);
        assert_relative_eq!(planform.chord_at(-2.5), 1.4);
        assert_relative_eq!(planform.chord_at(1.25), 1.7, epsilon = 1e-12);
    }

    #[test]
    fn test_chord_stays_within_bounds() {
        let planform = WingPlanform::standard();
        for i in 0..=100 {
            let pos = -2.5 + 5.0 * i as f64 / 100.0;
            let chord = planform.chord_at(pos);
            assert!(chord <= planform.root_chord() + 1e-12, "chord {} at {}", chord, pos);
            assert!(chord >= planform.tip_chord() - 1e-12, "chord {} at {}", chord, pos);
        }
    }

    #[test]
    fn test_ratios_clamp_beyond_tips() {
        let planform = WingPlanform::standard();
        assert_relative_eq!(planform.normalized_span_ratio(-10.0), 0.0);
        assert_relative_eq!(planform.normalized_span_ratio(10.0), 1.0);
        assert_relative_eq!(planform.normalized_span_ratio(0.0), 0.5);
        assert_relative_eq!(planform.half_span_ratio(-4.0), -1.0);
        assert_relative_eq!(planform.chord_at(7.0), 1.4);
    }

    #[test]
    fn test_taper_and_thickness() {
        let planform = WingPlanform::standard();
        assert_relative_eq!(planform.taper_factor(0.0), 1.0);
        assert_relative_eq!(planform.taper_factor(2.5), 0.8);
        assert_relative_eq!(planform.taper_factor(-1.25), 0.9, epsilon = 1e-12);
        assert_relative_eq!(planform.thickness_at(2.5), 0.24, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        assert!(WingPlanform::new(0.0, 2.0, 1.4, 0.3).is_err());
        assert!(WingPlanform::new(5.0, 1.0, 1.4, 0.3).is_err());
        assert!(WingPlanform::new(5.0, 2.0, 0.0, 0.3).is_err());
        assert!(WingPlanform::new(5.0, 2.0, 1.4, -0.1).is_err());
        assert!(WingPlanform::new(f64::NAN, 2.0, 1.4, 0.3).is_err());
        assert!(WingPlanform::new(5.0, 1.4, 1.4, 0.3).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: WingPlanform =
            serde_yaml::from_str("span: 6.0\nroot_chord: 2.2\ntip_chord: 1.0\n").unwrap();
        assert_relative_eq!(ok.max_thickness(), STANDARD_MAX_THICKNESS);

        let bad: Result<WingPlanform, _> =
            serde_yaml::from_str("span: 6.0\nroot_chord: 1.0\ntip_chord: 2.0\n");
        assert!(bad.is_err());
    }
}
