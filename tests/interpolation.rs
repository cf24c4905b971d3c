//! Motor interpolation tests.

use approx::assert_abs_diff_eq;
use pga3d::{
    Line3, Motor3, Point3, Vec3,
    motor::{kenlerp, lielerp, sclerp, seplerp},
};

const EPSILON: f64 = 1e-9;

fn motors() -> Vec<(Motor3<f64>, Motor3<f64>)> {
    vec![
        (
            Motor3::IDENTITY,
            Motor3::from_axis_angle_translation(Vec3::Z, 1.5, Vec3::new(2.0, -1.0, 0.5)),
        ),
        (
            Motor3::from_axis_angle_translation(
                Vec3::new(0.0, 0.6, 0.8),
                0.4,
                Vec3::new(-1.0, 0.5, 2.0),
            ),
            Motor3::from_axis_angle_translation(
                Vec3::new(1.0, 2.0, -2.0) / 3.0,
                2.2,
                Vec3::new(3.0, 1.0, -1.0),
            ),
        ),
        (
            Motor3::from_translation(Vec3::new(1.0, 0.0, 0.0)),
            Motor3::from_translation(Vec3::new(0.0, 4.0, -2.0)),
        ),
    ]
}

#[test]
fn sclerp_agrees_with_lielerp() {
    for (a, b) in motors() {
        for step in 0..=10 {
            let t = f64::from(step) / 10.0;
            assert_abs_diff_eq!(sclerp(&a, &b, t), lielerp(&a, &b, t), epsilon = EPSILON);
        }
    }
}

#[test]
fn interpolated_motors_stay_normalized() {
    for (a, b) in motors() {
        for t in [0.2, 0.5, 0.7] {
            for m in [
                sclerp(&a, &b, t),
                seplerp(&a, &b, t),
                lielerp(&a, &b, t),
                kenlerp(&a, &b, t, 0.5),
            ] {
                assert_abs_diff_eq!(m.magnitude_squared(), 1.0, epsilon = EPSILON);
            }
        }
    }
}

#[test]
fn pure_translations_interpolate_along_straight_line() {
    let a = Motor3::from_translation(Vec3::new(1.0, 0.0, 0.0));
    let b = Motor3::from_translation(Vec3::new(0.0, 4.0, -2.0));
    let expected = Vec3::new(0.75, 1.0, -0.5);
    assert_abs_diff_eq!(sclerp(&a, &b, 0.25).translation(), expected, epsilon = EPSILON);
    assert_abs_diff_eq!(seplerp(&a, &b, 0.25).translation(), expected, epsilon = EPSILON);
}

#[test]
fn screw_interpolation_moves_points_along_helix() {
    let axis = Line3::line(Vec3::Z, Vec3::new(1.0, 1.0, 0.0));
    let screw = Motor3::from_screw_coordinates(
        axis.direction(),
        axis.moment(),
        std::f64::consts::PI,
        4.0,
    );
    let halfway = sclerp(&Motor3::IDENTITY, &screw, 0.5);
    let moved = halfway.transform(&Point3::point(2.0, 1.0, 0.0)).as_vector();
    let offset = moved - Vec3::new(1.0, 1.0, 0.0);
    assert_abs_diff_eq!(offset.z, 2.0, epsilon = EPSILON);
    assert_abs_diff_eq!(
        Vec3::new(offset.x, offset.y, 0.0).length(),
        1.0,
        epsilon = EPSILON
    );
}
