use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{Segment, SurfaceKind, SurfaceLayout, SurfaceSection, WingPlanform};
use crate::utils::{intervals_overlap, KinematicsError, LAYOUT_EPSILON, MAX_SECTION_SEGMENTS};

/// Fixed placement of every movable surface on the wing.
///
/// Built once and never mutated. All layout invariants (ordering, span
/// bounds, slat/leading-edge alignment and flap clearance) are checked in
/// [`SurfaceCatalog::new`], so queries never need to.
#[derive(Resource, Debug, Clone)]
pub struct SurfaceCatalog {
    planform: WingPlanform,
    layouts: Vec<SurfaceLayout>,
    leading_edge_gaps: Vec<(f64, f64)>,
}

impl SurfaceCatalog {
    pub fn new(
        planform: WingPlanform,
        layouts: Vec<SurfaceLayout>,
        leading_edge_gaps: Vec<(f64, f64)>,
    ) -> Result<Self, KinematicsError> {
        let catalog = Self {
            planform,
            layouts,
            leading_edge_gaps,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The standard layout, drawn for a 5 m wing and scaled to `planform`'s span.
    pub fn standard(planform: WingPlanform) -> Result<Self, KinematicsError> {
        let scale = planform.span() / crate::utils::STANDARD_SPAN;
        Self::new(
            planform,
            standard_layouts(scale),
            standard_leading_edge_gaps(scale),
        )
    }

    pub fn planform(&self) -> &WingPlanform {
        &self.planform
    }

    pub fn leading_edge_gaps(&self) -> &[(f64, f64)] {
        &self.leading_edge_gaps
    }

    /// Layout of `kind`.
    ///
    /// # Panics
    /// If the catalog was built without a layout for `kind`.
    pub fn layout(&self, kind: SurfaceKind) -> &SurfaceLayout {
        self.layouts
            .iter()
            .find(|layout| layout.kind == kind)
            .unwrap_or_else(|| panic!("no {} layout in the surface catalog", kind))
    }

    pub fn sections_for(&self, kind: SurfaceKind) -> &[SurfaceSection] {
        &self.layout(kind).sections
    }

    /// Segment `index` of section `section_index` of `kind`.
    ///
    /// # Panics
    /// On indices outside the catalog; those are caller bugs.
    pub fn segment(&self, kind: SurfaceKind, section_index: usize, index: usize) -> Segment {
        let layout = self.layout(kind);
        let section = layout.sections.get(section_index).unwrap_or_else(|| {
            panic!(
                "{} has {} sections, section {} requested",
                kind,
                layout.sections.len(),
                section_index
            )
        });
        assert!(
            index < section.segment_count(),
            "{} section '{}' has {} segments, segment {} requested",
            kind,
            section.name,
            section.segment_count(),
            index
        );
        Segment::derive(&self.planform, layout, section_index, index)
    }

    /// Every segment of `kind`, inboard to outboard.
    pub fn segments_for(&self, kind: SurfaceKind) -> impl Iterator<Item = Segment> + '_ {
        let layout = self.layout(kind);
        layout
            .sections
            .iter()
            .enumerate()
            .flat_map(move |(section_index, section)| {
                (0..section.segment_count())
                    .map(move |index| Segment::derive(&self.planform, layout, section_index, index))
            })
    }

    /// Stowed origin of `segment` in the wing box frame.
    pub fn stowed_origin(&self, segment: &Segment) -> Vector3<f64> {
        segment.stowed_origin(self.layout(segment.kind))
    }

    /// Stations of the fixed leading edge panels, `step` apart, skipping the slat gaps.
    pub fn leading_edge_panels(&self, step: f64) -> Vec<f64> {
        if step <= 0.0 {
            return Vec::new();
        }
        let half_span = self.planform.half_span();
        let count = ((2.0 * half_span) / step + LAYOUT_EPSILON).floor() as usize;
        (0..count)
            .map(|i| -half_span + i as f64 * step)
            .filter(|station| {
                !self
                    .leading_edge_gaps
                    .iter()
                    .any(|&(start, end)| *station >= start && *station <= end)
            })
            .collect()
    }

    fn validate(&self) -> Result<(), KinematicsError> {
        let half_span = self.planform.half_span();

        for layout in &self.layouts {
            let mut previous_end: Option<(f64, &str)> = None;
            for section in &layout.sections {
                if !(section.end_span > section.start_span && section.segment_width_target > 0.0) {
                    return Err(KinematicsError::EmptySection {
                        kind: layout.kind,
                        name: section.name.clone(),
                        start: section.start_span,
                        end: section.end_span,
                    });
                }
                let count = section.length() / section.segment_width_target;
                if count > MAX_SECTION_SEGMENTS as f64 {
                    return Err(KinematicsError::TooManySegments {
                        kind: layout.kind,
                        name: section.name.clone(),
                        count: count.floor(),
                        max: MAX_SECTION_SEGMENTS,
                    });
                }
                if section.start_span < -half_span - LAYOUT_EPSILON
                    || section.end_span > half_span + LAYOUT_EPSILON
                {
                    return Err(KinematicsError::SectionOutsideSpan {
                        kind: layout.kind,
                        name: section.name.clone(),
                        start: section.start_span,
                        end: section.end_span,
                        half_span,
                    });
                }
                if let Some((end, name)) = previous_end {
                    if section.start_span < end - LAYOUT_EPSILON {
                        return Err(KinematicsError::SectionOverlap {
                            kind: layout.kind,
                            first: name.to_string(),
                            other_kind: layout.kind,
                            second: section.name.clone(),
                        });
                    }
                }
                previous_end = Some((section.end_span, &section.name));
            }
        }

        for kind in SurfaceKind::ALL {
            if !self.layouts.iter().any(|layout| layout.kind == kind) {
                return Err(KinematicsError::InvalidConfig(format!(
                    "surface catalog has no {} layout",
                    kind
                )));
            }
        }

        self.validate_leading_edge()?;
        self.validate_flap_clearance()
    }

    fn validate_leading_edge(&self) -> Result<(), KinematicsError> {
        let slats = self.sections_for(SurfaceKind::Slats);
        if slats.len() != self.leading_edge_gaps.len() {
            return Err(KinematicsError::LeadingEdgeMismatch(format!(
                "{} slat sections for {} gaps",
                slats.len(),
                self.leading_edge_gaps.len()
            )));
        }
        for (section, &(start, end)) in slats.iter().zip(&self.leading_edge_gaps) {
            if (section.start_span - start).abs() > LAYOUT_EPSILON
                || (section.end_span - end).abs() > LAYOUT_EPSILON
            {
                return Err(KinematicsError::LeadingEdgeMismatch(format!(
                    "'{}' spans {}..{} but the gap is {}..{}",
                    section.name, section.start_span, section.end_span, start, end
                )));
            }
        }
        Ok(())
    }

    fn validate_flap_clearance(&self) -> Result<(), KinematicsError> {
        let flaps = self.sections_for(SurfaceKind::Flaps);
        for kind in [SurfaceKind::Ailerons, SurfaceKind::Spoilers] {
            for section in self.sections_for(kind) {
                let overlapping = flaps.iter().find(|flap| {
                    intervals_overlap(section.interval(), flap.interval(), LAYOUT_EPSILON)
                });
                if let Some(flap) = overlapping {
                    return Err(KinematicsError::SectionOverlap {
                        kind,
                        first: section.name.clone(),
                        other_kind: SurfaceKind::Flaps,
                        second: flap.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Standard surface layout; span positions are multiplied by `scale`.
pub fn standard_layouts(scale: f64) -> Vec<SurfaceLayout> {
    let section = |name: &str, start: f64, end: f64, target: f64| {
        SurfaceSection::new(name, start * scale, end * scale, target * scale)
    };

    vec![
        SurfaceLayout {
            kind: SurfaceKind::Slats,
            base_offset: Vector3::new(-0.9, 0.0, 0.0),
            chord_ratio: 0.075,
            thickness: 0.04,
            sections: vec![
                section("Inboard Slat", -2.0, -1.2, 0.4),
                section("Mid Slat", 0.2, 1.0, 0.4),
                section("Outboard Slat", 1.5, 2.3, 0.4),
            ],
        },
        SurfaceLayout {
            kind: SurfaceKind::Flaps,
            base_offset: Vector3::new(1.5, 0.0, 0.0),
            chord_ratio: 0.6,
            thickness: 0.06,
            sections: vec![
                section("Inboard Flap", -2.25, -0.75, 0.5),
                section("Mid Flap", -0.5, 0.25, 0.5),
                section("Outboard Flap", 0.5, 1.0, 0.5),
            ],
        },
        SurfaceLayout {
            kind: SurfaceKind::Ailerons,
            base_offset: Vector3::new(1.5, 0.0, 0.0),
            chord_ratio: 0.25,
            thickness: 0.05,
            sections: vec![section("Aileron", 1.4, 2.4, 0.5)],
        },
        SurfaceLayout {
            kind: SurfaceKind::Spoilers,
            base_offset: Vector3::new(0.5, 0.25, 0.0),
            chord_ratio: 0.18,
            thickness: 0.02,
            sections: vec![
                section("Inboard Spoiler", 1.0, 1.4, 0.4),
                section("Middle Spoiler", 1.5, 1.9, 0.4),
                section("Outboard Spoiler", 2.0, 2.4, 0.4),
            ],
        },
    ]
}

pub fn standard_leading_edge_gaps(scale: f64) -> Vec<(f64, f64)> {
    [(-2.0, -1.2), (0.2, 1.0), (1.5, 2.3)]
        .iter()
        .map(|&(start, end)| (start * scale, end * scale))
        .collect()
}
