//! Conversions to and from `nalgebra` types.

use approx::assert_abs_diff_eq;
use nalgebra::{Matrix4, Perspective3, Vector3, Vector4};
use pga3d::{Motor3, Rotor3, Vec3};

const EPSILON: f64 = 1e-9;

#[test]
fn perspective_matrix_inverts_to_identity() {
    let perspective = Perspective3::new(1.0, 0.8 * std::f64::consts::PI, 0.3, 50.0);
    let product = perspective.to_homogeneous() * perspective.inverse();
    assert_abs_diff_eq!(product, Matrix4::identity(), epsilon = EPSILON);
}

#[test]
fn motor_transform_matrix_matches_point_transform() {
    let m = Motor3::from_axis_angle_translation(
        Vec3::new(0.6, 0.0, 0.8),
        2.0,
        Vec3::new(1.0, -2.0, 0.5),
    );
    let point = Vec3::new(0.3, -1.2, 2.0);
    let homogeneous = m.as_transform() * Vector4::new(point.x, point.y, point.z, 1.0);
    let expected = m.transform_point(&point);
    assert_abs_diff_eq!(homogeneous.w, 1.0, epsilon = EPSILON);
    assert_abs_diff_eq!(
        Vec3::from(homogeneous.xyz()),
        expected,
        epsilon = EPSILON
    );
}

#[test]
fn rotor_basis_matches_direction_transform() {
    let r = Rotor3::from_axis_angle(Vec3::new(1.0, 2.0, -2.0) / 3.0, 0.7);
    let rotated = r.basis() * Vector3::new(1.0, -0.5, 2.0);
    assert_abs_diff_eq!(
        Vec3::from(rotated),
        r.transform_vector(&Vec3::new(1.0, -0.5, 2.0)),
        epsilon = EPSILON
    );
}
