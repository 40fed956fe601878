use nalgebra::{Rotation3, Vector3};
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Rotate a point about the span (z) axis.
#[inline]
pub fn rotate_about_span(point: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle) * point
}

/// Translation that makes a rotation by `angle` about the origin look like a
/// rotation about `pivot`.
#[inline]
pub fn pivot_correction(pivot: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    pivot - rotate_about_span(pivot, angle)
}

/// Open-interval overlap test; touching endpoints do not overlap.
#[inline]
pub fn intervals_overlap(a: (f64, f64), b: (f64, f64), epsilon: f64) -> bool {
    a.0 < b.1 - epsilon && b.0 < a.1 - epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_conversions() {
        assert_relative_eq!(deg_to_rad(180.0), PI);
        assert_relative_eq!(deg_to_rad(45.0), PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pivot_correction_keeps_pivot_fixed() {
        let pivot = Vector3::new(0.15, 0.0, 0.0);
        let angle = -PI / 4.0;
        let moved = rotate_about_span(&pivot, angle) + pivot_correction(&pivot, angle);
        assert_relative_eq!(moved, pivot, epsilon = 1e-12);
    }

    #[test]
    fn test_intervals_overlap() {
        assert!(intervals_overlap((0.0, 1.0), (0.5, 1.5), 1e-9));
        assert!(!intervals_overlap((0.0, 1.0), (1.0, 1.5), 1e-9));
        assert!(!intervals_overlap((1.4, 2.4), (-0.5, 0.25), 1e-9));
    }
}
