use thiserror::Error;

use crate::components::SurfaceKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    #[error("Invalid planform: {0}")]
    InvalidPlanform(String),

    #[error("{kind} section '{name}' is empty or has no segment width ({start}..{end})")]
    EmptySection {
        kind: SurfaceKind,
        name: String,
        start: f64,
        end: f64,
    },

    #[error("{kind} section '{name}' would split into {count} segments (at most {max})")]
    TooManySegments {
        kind: SurfaceKind,
        name: String,
        count: f64,
        max: usize,
    },

    #[error("{kind} section '{name}' ({start}..{end}) lies outside the half span {half_span}")]
    SectionOutsideSpan {
        kind: SurfaceKind,
        name: String,
        start: f64,
        end: f64,
        half_span: f64,
    },

    #[error("{kind} section '{first}' overlaps {other_kind} section '{second}'")]
    SectionOverlap {
        kind: SurfaceKind,
        first: String,
        other_kind: SurfaceKind,
        second: String,
    },

    #[error("Slat sections do not match the fixed leading edge gaps: {0}")]
    LeadingEdgeMismatch(String),

    #[error("Config error: {0}")]
    InvalidConfig(String),
}
