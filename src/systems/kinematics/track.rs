use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::rotate_about_span;

/// Quadratic Bezier curve in the segment's stowed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub p0: Vector3<f64>,
    pub p1: Vector3<f64>,
    pub p2: Vector3<f64>,
}

impl QuadraticBezier {
    pub fn point(&self, t: f64) -> Vector3<f64> {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.p0 * (u * u) + self.p1 * (2.0 * u * t) + self.p2 * (t * t)
    }
}

/// Cubic Bezier curve in the segment's stowed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Vector3<f64>,
    pub p1: Vector3<f64>,
    pub p2: Vector3<f64>,
    pub p3: Vector3<f64>,
}

impl CubicBezier {
    pub fn point(&self, t: f64) -> Vector3<f64> {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.p0 * (u * u * u)
            + self.p1 * (3.0 * u * u * t)
            + self.p2 * (3.0 * u * t * t)
            + self.p3 * (t * t * t)
    }

    /// Chordwise distance between the stowed and deployed ends.
    pub fn chordwise_reach(&self) -> f64 {
        self.p3.x - self.p0.x
    }
}

/// Slat track: forward and down, levelling off as it reaches full travel.
///
/// The middle control point sits at half the forward travel and the full drop,
/// which makes `point(t)` equal `(-depth * t, -drop * t * (2 - t))`.
pub fn slat_track(depth: f64, drop: f64) -> QuadraticBezier {
    QuadraticBezier {
        p0: Vector3::zeros(),
        p1: Vector3::new(-depth / 2.0, -drop, 0.0),
        p2: Vector3::new(-depth, -drop, 0.0),
    }
}

/// Fowler flap track: a straight aft run that curves down towards the end.
pub fn flap_track(reach: f64) -> CubicBezier {
    CubicBezier {
        p0: Vector3::zeros(),
        p1: Vector3::new(reach * 0.3, 0.0, 0.0),
        p2: Vector3::new(reach * 0.7, -reach * 0.2, 0.0),
        p3: Vector3::new(reach, -reach * 0.4, 0.0),
    }
}

/// Samples `curve` at `resolution + 1` evenly spaced parameters in `[start, end]`.
pub fn sample<F>(curve: F, start: f64, end: f64, resolution: usize) -> Vec<Vector3<f64>>
where
    F: Fn(f64) -> Vector3<f64>,
{
    (0..=resolution)
        .map(|i| curve(start + (end - start) * i as f64 / resolution as f64))
        .collect()
}

/// Arc traced by `edge` as the surface rotates from `min_angle` to `max_angle`
/// about `pivot`.
pub fn hinge_arc(
    edge: &Vector3<f64>,
    pivot: &Vector3<f64>,
    min_angle: f64,
    max_angle: f64,
    resolution: usize,
) -> Vec<Vector3<f64>> {
    sample(
        |angle| pivot + rotate_about_span(&(edge - pivot), angle),
        min_angle,
        max_angle,
        resolution,
    )
}

/// A sampled mechanical path and where the moving part currently sits on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPath {
    pub points: Vec<Vector3<f64>>,
    pub carriage: Vector3<f64>,
}

impl TrackPath {
    pub fn start(&self) -> Option<&Vector3<f64>> {
        self.points.first()
    }

    pub fn end(&self) -> Option<&Vector3<f64>> {
        self.points.last()
    }

    /// Total polyline length.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum()
    }
}
