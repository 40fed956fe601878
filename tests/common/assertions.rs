use approx::assert_relative_eq;
use nalgebra::Vector3;
use wing_kinematics::SurfaceTransform;

/// Assert that two vectors are equal within `epsilon`
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert that two transforms are equal within `epsilon`
#[track_caller]
pub fn assert_transform_eq(actual: &SurfaceTransform, expected: &SurfaceTransform, epsilon: f64) {
    assert_vector_eq(&actual.translation, &expected.translation, epsilon);
    assert_relative_eq!(actual.rotation, expected.rotation, epsilon = epsilon);
}

/// Assert that a transform has no NaN or infinite parts
#[track_caller]
pub fn assert_all_finite(transform: &SurfaceTransform) {
    assert!(
        transform.translation.iter().all(|v| v.is_finite()),
        "Translation is not finite: {:?}",
        transform.translation
    );
    assert!(
        transform.rotation.is_finite(),
        "Rotation is not finite: {}",
        transform.rotation
    );
}
