//! Agreement between general multivector products and the specialized
//! flat and motor formulas.

use approx::assert_abs_diff_eq;
use pga3d::{
    Line3, Motor3, Mvec3, Plane3, Point3, Rotor3, Vec3,
    flat::{Flat, Inner, Join, Meet, Reflect, join3, meet3},
};
use std::fmt::Debug;

const EPSILON: f64 = 1e-9;

fn planes() -> [Plane3<f64>; 3] {
    [
        Plane3::plane(Vec3::new(1.0, -2.0, 3.0), 5.0),
        Plane3::plane(Vec3::new(4.0, 2.0, -1.0), -2.0),
        Plane3::plane(Vec3::new(0.0, 1.0, 1.0), 0.5),
    ]
}

fn points() -> [Point3<f64>; 3] {
    [
        Point3::point(2.0, 5.0, -1.0),
        Point3::point(-1.0, 0.0, 4.0),
        Point3::new(0.5, -3.0, 1.0, 2.0),
    ]
}

fn lines() -> [Line3<f64>; 2] {
    [
        Line3::line(Vec3::new(1.0, 2.0, -2.0), Vec3::new(0.0, 1.0, 3.0)),
        Line3::line(Vec3::new(-1.0, 0.5, 1.0), Vec3::new(2.0, -1.0, 0.0)),
    ]
}

fn motor() -> Motor3<f64> {
    Motor3::from_axis_angle_translation(Vec3::new(0.6, 0.0, 0.8), 2.0, Vec3::new(1.0, -2.0, 0.5))
}

#[test]
fn outer_product_matches_meet() {
    let [a, b, c] = planes();
    let [l, _] = lines();
    assert_abs_diff_eq!(
        Line3::from(Mvec3::from(a) ^ Mvec3::from(b)),
        a.meet(&b),
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(
        Point3::from(Mvec3::from(a) ^ Mvec3::from(l)),
        a.meet(&l),
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(
        Point3::from(Mvec3::from(a) ^ Mvec3::from(b) ^ Mvec3::from(c)),
        meet3(&a, &b, &c),
        epsilon = EPSILON
    );
}

#[test]
fn regressive_product_matches_join() {
    let [x, y, z] = points();
    let [l, _] = lines();
    assert_abs_diff_eq!(
        Line3::from(Mvec3::from(x) & Mvec3::from(y)),
        x.join(&y),
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(
        Plane3::from(Mvec3::from(l) & Mvec3::from(z)),
        l.join(&z),
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(
        Plane3::from(Mvec3::from(x) & Mvec3::from(y) & Mvec3::from(z)),
        join3(&x, &y, &z),
        epsilon = EPSILON
    );
}

#[test]
fn inner_product_matches_flat_inner() {
    let [a, b, _] = planes();
    let [x, _, _] = points();
    let [l, m] = lines();
    assert_abs_diff_eq!(
        (Mvec3::from(a) | Mvec3::from(b))[pga3d::Basis::S],
        a.inner(&b),
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(
        Plane3::from(Mvec3::from(a) | Mvec3::from(l)),
        a.inner(&l),
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(
        Plane3::from(Mvec3::from(l) | Mvec3::from(x)),
        l.inner(&x),
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(
        (Mvec3::from(l) | Mvec3::from(m))[pga3d::Basis::S],
        l.inner(&m),
        epsilon = EPSILON
    );
}

#[test]
fn geometric_product_of_flats_matches_motor_products() {
    let [a, b, _] = planes();
    let [l, m] = lines();
    let [x, y, _] = points();
    assert_abs_diff_eq!(
        Motor3::from(Mvec3::from(a) * Mvec3::from(b)),
        a * b,
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(
        Motor3::from(Mvec3::from(l) * Mvec3::from(m)),
        l * m,
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(
        Motor3::from(Mvec3::from(x) * Mvec3::from(y)),
        x * y,
        epsilon = EPSILON
    );
}

#[test]
fn sandwich_product_matches_motor_transforms() {
    let m = motor();
    let mv = Mvec3::from(m);
    let sandwich = |x: Mvec3<f64>| mv * x * mv.rev();

    for plane in planes() {
        assert_abs_diff_eq!(
            Plane3::from(sandwich(Mvec3::from(plane))),
            m.transform(&plane),
            epsilon = EPSILON
        );
    }
    for line in lines() {
        assert_abs_diff_eq!(
            Line3::from(sandwich(Mvec3::from(line))),
            m.transform(&line),
            epsilon = EPSILON
        );
    }
    for point in points() {
        assert_abs_diff_eq!(
            Point3::from(sandwich(Mvec3::from(point))),
            m.transform(&point),
            epsilon = EPSILON
        );
    }
}

#[test]
fn geometric_product_of_rotors_matches_rotor_product() {
    let a = Rotor3::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 1.3);
    let b = Rotor3::from_axis_angle(Vec3::X, -0.4);
    assert_abs_diff_eq!(
        Rotor3::from(Mvec3::from(a) * Mvec3::from(b)),
        a * b,
        epsilon = EPSILON
    );
}

#[test]
fn plane_reflection_matches_sandwich() {
    let [mirror, _, _] = planes();
    let mirror = mirror.normalized();
    let [x, _, _] = points();
    let mirror_mv = Mvec3::from(mirror);
    let reflected = Point3::from(mirror_mv * Mvec3::from(x) * mirror_mv);
    assert_abs_diff_eq!(
        reflected.as_vector(),
        x.reflect(&mirror).as_vector(),
        epsilon = EPSILON
    );
}

/// Checks `x` reflected in `mirror` against `±mirror * x * ~mirror`, where
/// the sign is `(-1)^(grade(x) * grade(mirror))`.
fn assert_reflection_matches_sandwich<X, M>(x: X, mirror: M, sign: f64)
where
    X: Reflect<M> + Copy + Debug + From<Mvec3<f64>> + approx::AbsDiffEq<Epsilon = f64>,
    M: Flat<Scalar = f64> + Into<Mvec3<f64>>,
    Mvec3<f64>: From<X>,
{
    let mirror_mv: Mvec3<f64> = mirror.into();
    let sandwich = mirror_mv * Mvec3::from(x) * mirror_mv.rev() * sign;
    assert_abs_diff_eq!(x.fast_reflect(&mirror), X::from(sandwich), epsilon = EPSILON);
    assert_abs_diff_eq!(
        x.reflect(&mirror),
        X::from(sandwich / mirror.magnitude_squared()),
        epsilon = EPSILON
    );
}

#[test]
fn every_reflection_matches_sandwich() {
    for mirror in planes() {
        for x in points() {
            assert_reflection_matches_sandwich(x, mirror, -1.0);
        }
        for x in lines() {
            assert_reflection_matches_sandwich(x, mirror, 1.0);
        }
        for x in planes() {
            assert_reflection_matches_sandwich(x, mirror, -1.0);
        }
    }
    for mirror in lines() {
        for x in points() {
            assert_reflection_matches_sandwich(x, mirror, 1.0);
        }
        for x in lines() {
            assert_reflection_matches_sandwich(x, mirror, 1.0);
        }
        for x in planes() {
            assert_reflection_matches_sandwich(x, mirror, 1.0);
        }
    }
    for mirror in points() {
        for x in points() {
            assert_reflection_matches_sandwich(x, mirror, -1.0);
        }
        for x in lines() {
            assert_reflection_matches_sandwich(x, mirror, 1.0);
        }
        for x in planes() {
            assert_reflection_matches_sandwich(x, mirror, -1.0);
        }
    }
}
