use std::path::PathBuf;

use wing_kinematics::{
    resources::{SurfaceCatalog, WingConfig},
    Segment, SurfaceKind, WingKinematics, WingPlanform,
};

pub const SAMPLE_CONFIG: &str = "assets/wings/standard_transport.yaml";

pub fn sample_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(SAMPLE_CONFIG)
}

pub fn standard_engine() -> WingKinematics {
    WingKinematics::from_config(&WingConfig::default()).expect("standard wing is valid")
}

pub fn standard_catalog() -> SurfaceCatalog {
    SurfaceCatalog::standard(WingPlanform::standard()).expect("standard catalog is valid")
}

/// First segment of every surface kind.
pub fn first_segments(engine: &WingKinematics) -> Vec<Segment> {
    SurfaceKind::ALL
        .iter()
        .map(|&kind| {
            engine
                .catalog()
                .segments_for(kind)
                .next()
                .expect("every kind has a segment")
        })
        .collect()
}

/// `count + 1` evenly spaced deployments over `[start, end]`.
pub fn deployment_sweep(start: f64, end: f64, count: usize) -> Vec<f64> {
    (0..=count)
        .map(|i| start + (end - start) * i as f64 / count as f64)
        .collect()
}

/// A small wing with slats and flaps only where the layout needs them.
pub fn compact_wing_yaml() -> &'static str {
    r#"
name: Compact
planform:
  span: 2.0
  root_chord: 1.0
  tip_chord: 0.6
track_resolution: 4
leading_edge_gaps:
  - [-0.8, -0.2]
layouts:
  - kind: slats
    base_offset: [-0.45, 0.0, 0.0]
    chord_ratio: 0.08
    thickness: 0.02
    sections:
      - { name: Slat, start_span: -0.8, end_span: -0.2, segment_width_target: 0.3 }
  - kind: flaps
    base_offset: [0.75, 0.0, 0.0]
    chord_ratio: 0.5
    thickness: 0.03
    sections:
      - { name: Flap, start_span: -0.9, end_span: 0.0, segment_width_target: 0.3 }
  - kind: ailerons
    base_offset: [0.75, 0.0, 0.0]
    chord_ratio: 0.25
    thickness: 0.02
    sections:
      - { name: Aileron, start_span: 0.5, end_span: 0.9, segment_width_target: 0.2 }
  - kind: spoilers
    base_offset: [0.25, 0.12, 0.0]
    chord_ratio: 0.2
    thickness: 0.01
    sections:
      - { name: Spoiler, start_span: 0.1, end_span: 0.4, segment_width_target: 0.15 }
"#
}
