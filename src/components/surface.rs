use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::WingPlanform;
use crate::utils::LAYOUT_EPSILON;

/// The closed set of movable surfaces on the wing.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    Slats,
    Flaps,
    Ailerons,
    Spoilers,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 4] = [
        SurfaceKind::Slats,
        SurfaceKind::Flaps,
        SurfaceKind::Ailerons,
        SurfaceKind::Spoilers,
    ];

    /// Inclusive range of the deployment parameter for this kind.
    pub fn deployment_range(&self) -> (f64, f64) {
        match self {
            SurfaceKind::Ailerons => (-1.0, 1.0),
            SurfaceKind::Slats | SurfaceKind::Flaps | SurfaceKind::Spoilers => (0.0, 1.0),
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurfaceKind::Slats => "slats",
            SurfaceKind::Flaps => "flaps",
            SurfaceKind::Ailerons => "ailerons",
            SurfaceKind::Spoilers => "spoilers",
        };
        write!(f, "{}", name)
    }
}

/// A contiguous spanwise run of one surface kind, split into equal segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSection {
    /// Human readable name, e.g. "Inboard Flap".
    pub name: String,
    /// Inboard edge of the run (m along span).
    pub start_span: f64,
    /// Outboard edge of the run (m along span).
    pub end_span: f64,
    /// Desired segment width (m); the actual count is `max(2, floor(length / target))`.
    pub segment_width_target: f64,
}

impl SurfaceSection {
    pub fn new(name: impl Into<String>, start_span: f64, end_span: f64, target: f64) -> Self {
        Self {
            name: name.into(),
            start_span,
            end_span,
            segment_width_target: target,
        }
    }

    pub fn length(&self) -> f64 {
        self.end_span - self.start_span
    }

    pub fn interval(&self) -> (f64, f64) {
        (self.start_span, self.end_span)
    }

    pub fn segment_count(&self) -> usize {
        let fits = (self.length() / self.segment_width_target + LAYOUT_EPSILON).floor();
        (fits.max(0.0) as usize).max(2)
    }

    pub fn segment_width(&self) -> f64 {
        self.length() / self.segment_count() as f64
    }

    /// Span position of the centre of segment `index`.
    pub fn segment_center(&self, index: usize) -> f64 {
        let width = self.segment_width();
        self.start_span + index as f64 * width + width / 2.0
    }
}

/// Fixed placement of one surface family on the wing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLayout {
    pub kind: SurfaceKind,
    /// Chordwise/vertical offset of the family's stowed hinge line from the wing box origin.
    pub base_offset: Vector3<f64>,
    /// Surface chord as a fraction of the local wing chord.
    pub chord_ratio: f64,
    /// Panel thickness (m).
    pub thickness: f64,
    pub sections: Vec<SurfaceSection>,
}

/// One queryable spanwise piece of a surface. Derived from a section on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SurfaceKind,
    pub section_index: usize,
    pub index: usize,
    pub span_center: f64,
    /// Local wing chord at the segment centre.
    pub chord_at_span: f64,
    pub width_along_span: f64,
    /// Motion scale at the segment centre, see [`WingPlanform::taper_factor`].
    pub taper: f64,
    /// Chord of the moving panel itself.
    pub surface_chord: f64,
    pub thickness: f64,
}

impl Segment {
    pub(crate) fn derive(
        planform: &WingPlanform,
        layout: &SurfaceLayout,
        section_index: usize,
        index: usize,
    ) -> Self {
        let section = &layout.sections[section_index];
        let span_center = section.segment_center(index);
        let chord_at_span = planform.chord_at(span_center);
        Self {
            kind: layout.kind,
            section_index,
            index,
            span_center,
            chord_at_span,
            width_along_span: section.segment_width(),
            taper: planform.taper_factor(span_center),
            surface_chord: chord_at_span * layout.chord_ratio,
            thickness: layout.thickness,
        }
    }

    /// Stowed origin of the segment in the wing box frame.
    pub fn stowed_origin(&self, layout: &SurfaceLayout) -> Vector3<f64> {
        layout.base_offset + Vector3::new(0.0, 0.0, self.span_center)
    }
}
