// Standard wing planform
pub const STANDARD_SPAN: f64 = 5.0; // m
pub const STANDARD_ROOT_CHORD: f64 = 2.0; // m
pub const STANDARD_TIP_CHORD: f64 = 1.4; // m
pub const STANDARD_MAX_THICKNESS: f64 = 0.3; // m

/// Fraction of motion (and thickness) lost between root and tip.
pub const TAPER_RELIEF: f64 = 0.2;

// Slats
pub const SLAT_DEPTH: f64 = 0.3; // m forward at full deployment
pub const SLAT_DROP: f64 = 0.15; // m down at full deployment
pub const SLAT_ROLLER_RATIO: f64 = 0.8;
pub const SLAT_ACTUATOR_RATIO: f64 = 0.3; // body travel, fraction of slat travel
pub const SLAT_PISTON_RATIO: f64 = 0.5;
pub const SLAT_MOUNT_RATIO: f64 = 0.6;
pub const SLAT_ACTUATOR_STOWED_DEG: f64 = 45.0;
pub const SLAT_ACTUATOR_SWING_DEG: f64 = 30.0;

// Fowler flaps
pub const FLAP_EXTENSION_RATIO: f64 = 0.3; // fraction of local chord
pub const FLAP_MAX_ANGLE_DEG: f64 = 30.0;
pub const VANE_ROTATION_GAIN: f64 = 1.2;
pub const VANE_OFFSET_X_RATIO: f64 = 0.1;
pub const VANE_OFFSET_Y_RATIO: f64 = 0.05;
pub const FLAP_ACTUATOR_DROP: f64 = 0.1; // m below the hinge line

// Control surfaces
pub const AILERON_MAX_ANGLE_DEG: f64 = 30.0;
pub const SPOILER_MAX_ANGLE_DEG: f64 = 45.0;

// Tracks
pub const DEFAULT_TRACK_RESOLUTION: usize = 20;
pub const MIN_TRACK_RESOLUTION: usize = 10;
pub const RAIL_OFFSET_RATIO: f64 = 0.12; // fraction of segment width

/// Upper bound on the segments a single section may be split into.
pub const MAX_SECTION_SEGMENTS: usize = 64;

// Auto deployment
pub const OSCILLATOR_STEP: f64 = 0.01;
pub const OSCILLATOR_TICK_MS: u64 = 30;
pub const OSCILLATOR_UPPER_BOUND: f64 = 0.99;
pub const OSCILLATOR_LOWER_BOUND: f64 = 0.01;

/// Slack used when comparing layout boundaries and segment counts.
pub const LAYOUT_EPSILON: f64 = 1e-9;
