use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    DeploymentParameter, PartRole, Segment, SurfaceKind, SurfaceTransform, WingPlanform,
};
use crate::resources::{
    catalog::standard_leading_edge_gaps, ConfigError, KinematicsConfig, SurfaceCatalog,
    WingConfig,
};
use crate::systems::kinematics::{
    aileron::{aileron_transform, control_rod},
    flap::{actuator_arm, flap_track_for, flap_transform, track_bracket, vane_transform},
    slat::{slat_actuator, slat_mount, slat_piston, slat_roller, slat_track_for, slat_transform},
    spoiler::{hinge_arm, spoiler_actuator, spoiler_hinge, spoiler_transform},
    track::{hinge_arc, sample, TrackPath},
};
use crate::utils::{
    DEFAULT_TRACK_RESOLUTION, MIN_TRACK_RESOLUTION, RAIL_OFFSET_RATIO, STANDARD_SPAN,
};

/// The deployment kinematics engine.
///
/// Holds only immutable design data; every query is a pure function of its
/// arguments, so the engine can be shared freely between systems.
#[derive(Resource, Debug, Clone)]
pub struct WingKinematics {
    catalog: SurfaceCatalog,
    config: KinematicsConfig,
    track_resolution: usize,
}

impl Default for WingKinematics {
    fn default() -> Self {
        let planform = WingPlanform::standard();
        Self {
            catalog: SurfaceCatalog::standard(planform)
                .expect("Standard surface catalog should always be valid"),
            config: KinematicsConfig::default(),
            track_resolution: DEFAULT_TRACK_RESOLUTION,
        }
    }
}

impl WingKinematics {
    pub fn new(
        catalog: SurfaceCatalog,
        config: KinematicsConfig,
        track_resolution: usize,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let track_resolution = if track_resolution < MIN_TRACK_RESOLUTION {
            warn!(
                "Track resolution {} is below the minimum, using {}",
                track_resolution, MIN_TRACK_RESOLUTION
            );
            MIN_TRACK_RESOLUTION
        } else {
            track_resolution
        };
        Ok(Self {
            catalog,
            config,
            track_resolution,
        })
    }

    /// Builds the engine described by a wing configuration.
    pub fn from_config(config: &WingConfig) -> Result<Self, ConfigError> {
        let catalog = match &config.layouts {
            Some(layouts) => {
                let scale = config.planform.span() / STANDARD_SPAN;
                let gaps = config
                    .leading_edge_gaps
                    .clone()
                    .unwrap_or_else(|| standard_leading_edge_gaps(scale));
                SurfaceCatalog::new(config.planform, layouts.clone(), gaps)?
            }
            None => SurfaceCatalog::standard(config.planform)?,
        };
        Self::new(catalog, config.kinematics.clone(), config.track_resolution)
    }

    pub fn catalog(&self) -> &SurfaceCatalog {
        &self.catalog
    }

    pub fn planform(&self) -> &WingPlanform {
        self.catalog.planform()
    }

    pub fn config(&self) -> &KinematicsConfig {
        &self.config
    }

    pub fn track_resolution(&self) -> usize {
        self.track_resolution
    }

    /// Pivot a surface rotates about when the caller does not override it.
    pub fn default_pivot(&self, segment: &Segment) -> Vector3<f64> {
        match segment.kind {
            SurfaceKind::Spoilers => spoiler_hinge(segment),
            SurfaceKind::Slats | SurfaceKind::Flaps | SurfaceKind::Ailerons => Vector3::zeros(),
        }
    }

    /// Transform of the main panel of `segment` at `deployment`.
    ///
    /// The deployment is clamped into the kind's range. When `pivot_override`
    /// is given the rotation happens about that point (in the segment's stowed
    /// frame) instead of the surface's own hinge.
    ///
    /// # Panics
    /// If `segment` does not belong to `kind`.
    pub fn transform_for(
        &self,
        kind: SurfaceKind,
        segment: &Segment,
        deployment: f64,
        pivot_override: Option<Vector3<f64>>,
    ) -> SurfaceTransform {
        assert_eq!(
            segment.kind, kind,
            "segment of {} queried as {}",
            segment.kind, kind
        );
        let d = DeploymentParameter::new(kind, deployment).value();
        let taper = segment.taper;

        let transform = match kind {
            SurfaceKind::Slats => slat_transform(segment, d, taper, &self.config),
            SurfaceKind::Flaps => flap_transform(segment, d, taper, &self.config),
            SurfaceKind::Ailerons => aileron_transform(segment, d, taper, &self.config),
            SurfaceKind::Spoilers => {
                let pivot = pivot_override.unwrap_or_else(|| spoiler_hinge(segment));
                return spoiler_transform(segment, d, taper, &self.config, &pivot);
            }
        };

        match pivot_override {
            Some(pivot) => transform.with_pivot(&pivot),
            None => transform,
        }
    }

    /// Main panel plus every dependent part of `segment`.
    pub fn parts_for(
        &self,
        kind: SurfaceKind,
        segment: &Segment,
        deployment: f64,
    ) -> Vec<(PartRole, SurfaceTransform)> {
        let d = DeploymentParameter::new(kind, deployment).value();
        let surface = self.transform_for(kind, segment, d, None);

        let mut parts = vec![(PartRole::Surface, surface)];
        match kind {
            SurfaceKind::Slats => {
                parts.push((PartRole::Roller, slat_roller(&surface)));
                parts.push((PartRole::Actuator, slat_actuator(d, &self.config)));
                parts.push((PartRole::Piston, slat_piston(d, &self.config)));
                parts.push((PartRole::Mount, slat_mount(d, &self.config)));
            }
            SurfaceKind::Flaps => {
                let vane = vane_transform(segment, d, &surface, &self.config);
                parts.push((PartRole::Vane, vane));
                parts.push((PartRole::Bracket, track_bracket(&surface, segment.thickness)));
                // The vane is two thirds as thick as the main flap.
                parts.push((
                    PartRole::Bracket,
                    track_bracket(&vane, segment.thickness * 2.0 / 3.0),
                ));
                parts.push((PartRole::Actuator, actuator_arm(segment, d, &surface, &self.config)));
            }
            SurfaceKind::Ailerons => {
                parts.push((PartRole::ControlRod, control_rod(segment, &surface)));
            }
            SurfaceKind::Spoilers => {
                parts.push((PartRole::HingeArm, hinge_arm(segment, &surface)));
                let [cylinder, piston, link] = spoiler_actuator(segment, d, &self.config);
                parts.push((PartRole::Actuator, cylinder));
                parts.push((PartRole::Piston, piston));
                parts.push((PartRole::Link, link));
            }
        }
        parts
    }

    /// Sampled mechanical path of `segment` and the current carriage position.
    ///
    /// Slats and flaps return their track. Ailerons and spoilers return the
    /// arc swept by the panel's free edge over the whole deployment range.
    pub fn path_for(&self, kind: SurfaceKind, segment: &Segment, deployment: f64) -> TrackPath {
        let d = DeploymentParameter::new(kind, deployment).value();
        let resolution = self.track_resolution;
        let surface = self.transform_for(kind, segment, d, None);

        match kind {
            SurfaceKind::Slats => {
                let track = slat_track_for(segment.taper, &self.config);
                TrackPath {
                    points: sample(|t| track.point(t), 0.0, 1.0, resolution),
                    carriage: surface.translation,
                }
            }
            SurfaceKind::Flaps => {
                let track = flap_track_for(segment, segment.taper, &self.config);
                TrackPath {
                    points: sample(|t| track.point(t), 0.0, 1.0, resolution),
                    carriage: surface.translation,
                }
            }
            SurfaceKind::Ailerons => {
                let edge = Vector3::new(segment.surface_chord, 0.0, 0.0);
                let max = self.config.aileron_max_angle();
                TrackPath {
                    points: hinge_arc(&edge, &Vector3::zeros(), -max, max, resolution),
                    carriage: surface.apply(&edge),
                }
            }
            SurfaceKind::Spoilers => {
                let hinge = spoiler_hinge(segment);
                let edge = Vector3::new(-segment.surface_chord / 2.0, 0.0, 0.0);
                let max = self.config.spoiler_max_angle();
                TrackPath {
                    points: hinge_arc(&edge, &hinge, 0.0, -max, resolution),
                    carriage: surface.apply(&edge),
                }
            }
        }
    }

    /// Spanwise offsets of the two rails carrying a segment.
    pub fn rail_offsets(&self, segment: &Segment) -> [f64; 2] {
        let offset = segment.width_along_span * RAIL_OFFSET_RATIO;
        [-offset, offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_clamps_out_of_range_deployment() {
        let engine = WingKinematics::default();
        let segment = engine.catalog().segment(SurfaceKind::Flaps, 0, 1);
        assert_eq!(
            engine.transform_for(SurfaceKind::Flaps, &segment, 3.0, None),
            engine.transform_for(SurfaceKind::Flaps, &segment, 1.0, None)
        );
        assert!(engine
            .transform_for(SurfaceKind::Flaps, &segment, f64::NAN, None)
            .is_identity());
    }

    #[test]
    #[should_panic(expected = "segment of flaps queried as slats")]
    fn test_kind_mismatch_panics() {
        let engine = WingKinematics::default();
        let segment = engine.catalog().segment(SurfaceKind::Flaps, 0, 0);
        engine.transform_for(SurfaceKind::Slats, &segment, 0.5, None);
    }

    #[test]
    fn test_pivot_override_on_aileron() {
        let engine = WingKinematics::default();
        let segment = engine.catalog().segment(SurfaceKind::Ailerons, 0, 0);
        let pivot = Vector3::new(0.1, 0.0, 0.0);
        let transform = engine.transform_for(SurfaceKind::Ailerons, &segment, 1.0, Some(pivot));
        assert_relative_eq!(transform.rotation, PI / 6.0, epsilon = 1e-12);
        assert_relative_eq!(transform.apply(&pivot), pivot, epsilon = 1e-12);
    }

    #[test]
    fn test_spoiler_default_pivot_is_trailing_edge() {
        let engine = WingKinematics::default();
        let segment = engine.catalog().segment(SurfaceKind::Spoilers, 1, 0);
        let hinge = engine.default_pivot(&segment);
        assert_relative_eq!(hinge.x, segment.surface_chord / 2.0);
        let transform = engine.transform_for(SurfaceKind::Spoilers, &segment, 0.7, None);
        assert_relative_eq!(transform.apply(&hinge), hinge, epsilon = 1e-12);
    }

    #[test]
    fn test_parts_per_kind() {
        let engine = WingKinematics::default();
        let roles = |kind| {
            let segment = engine.catalog().segments_for(kind).next().unwrap();
            engine
                .parts_for(kind, &segment, 0.6)
                .into_iter()
                .map(|(role, _)| role)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            roles(SurfaceKind::Slats),
            vec![
                PartRole::Surface,
                PartRole::Roller,
                PartRole::Actuator,
                PartRole::Piston,
                PartRole::Mount
            ]
        );
        assert_eq!(
            roles(SurfaceKind::Flaps),
            vec![
                PartRole::Surface,
                PartRole::Vane,
                PartRole::Bracket,
                PartRole::Bracket,
                PartRole::Actuator
            ]
        );
        assert_eq!(roles(SurfaceKind::Ailerons), vec![PartRole::Surface, PartRole::ControlRod]);
        assert_eq!(
            roles(SurfaceKind::Spoilers),
            vec![
                PartRole::Surface,
                PartRole::HingeArm,
                PartRole::Actuator,
                PartRole::Piston,
                PartRole::Link
            ]
        );
    }

    fn part(parts: &[(PartRole, SurfaceTransform)], role: PartRole) -> SurfaceTransform {
        parts
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, transform)| *transform)
            .unwrap()
    }

    #[test]
    fn test_actuator_parts_move_with_deployment() {
        let engine = WingKinematics::default();

        let slat = engine.catalog().segment(SurfaceKind::Slats, 0, 0);
        for (d, body, piston) in [(0.0, 0.3, 0.0), (0.5, 0.15, 0.25), (1.0, 0.0, 0.5)] {
            let parts = engine.parts_for(SurfaceKind::Slats, &slat, d);
            assert_relative_eq!(
                part(&parts, PartRole::Actuator).translation,
                Vector3::new(-0.3 * body, -0.15 * body, 0.0),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                part(&parts, PartRole::Actuator).rotation,
                PI / 4.0 - d * PI / 6.0,
                epsilon = 1e-12
            );
            assert_relative_eq!(
                part(&parts, PartRole::Piston).translation,
                Vector3::new(-0.3 * piston, -0.15 * piston, 0.0),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                part(&parts, PartRole::Mount).translation,
                Vector3::new(-0.18 * d, -0.09 * d, 0.0),
                epsilon = 1e-12
            );
        }

        let flap = engine.catalog().segment(SurfaceKind::Flaps, 0, 0);
        let housing = 0.15 * flap.chord_at_span;
        for d in [0.0, 0.5, 1.0] {
            let parts = engine.parts_for(SurfaceKind::Flaps, &flap, d);
            let surface = part(&parts, PartRole::Surface);
            let arm = part(&parts, PartRole::Actuator);
            assert_relative_eq!(
                arm.translation,
                Vector3::new(housing + surface.translation.x * 0.5, -0.1 - 0.1 * d, 0.0),
                epsilon = 1e-12
            );
            assert_relative_eq!(arm.rotation, surface.rotation * 0.5, epsilon = 1e-12);
        }

        let spoiler = engine.catalog().segment(SurfaceKind::Spoilers, 0, 0);
        let (w, t) = (spoiler.surface_chord, spoiler.thickness);
        for d in [0.0, 0.5, 1.0] {
            let parts = engine.parts_for(SurfaceKind::Spoilers, &spoiler, d);
            let angle = d * PI / 4.0;
            assert_relative_eq!(
                part(&parts, PartRole::Actuator).translation,
                Vector3::new(w / 4.0, -4.0 * t - 2.0 * t * d, 0.0),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                part(&parts, PartRole::Piston).translation,
                Vector3::new(w / 4.0 - 2.0 * t + 4.0 * t * d, -4.0 * t - 2.0 * t * d, 0.0),
                epsilon = 1e-12
            );
            let link = part(&parts, PartRole::Link);
            assert_relative_eq!(
                link.translation,
                Vector3::new(
                    -w / 4.0 + w * angle.sin() / 2.0,
                    -2.0 * t + 2.0 * t * angle.cos(),
                    0.0
                ),
                epsilon = 1e-12
            );
            assert_relative_eq!(link.rotation, -angle, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_low_resolution_is_raised() {
        let engine = WingKinematics::new(
            SurfaceCatalog::standard(WingPlanform::standard()).unwrap(),
            KinematicsConfig::default(),
            3,
        )
        .unwrap();
        assert_eq!(engine.track_resolution(), MIN_TRACK_RESOLUTION);
    }

    #[test]
    fn test_rail_offsets() {
        let engine = WingKinematics::default();
        let segment = engine.catalog().segment(SurfaceKind::Flaps, 0, 0);
        let [inner, outer] = engine.rail_offsets(&segment);
        assert_relative_eq!(outer, 0.06, epsilon = 1e-12);
        assert_relative_eq!(inner, -outer);
    }
}
