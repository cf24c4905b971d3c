//! Invariant checks driven by the fuzz targets in `fuzz/`.

use crate::{
    flat::{Flat, Line3, Plane3, Point3, Reflect},
    motor::Motor3,
    num::Float,
    vector::Vec3,
};
use approx::abs_diff_eq;
use arbitrary::{Arbitrary, Result, Unstructured};

const MAX_COORDINATE: f64 = 100.0;
const RESOLUTION: i32 = 1_000_000;
const EPSILON: f64 = 1e-6;

/// A normalized motor built from bounded screw parameters.
#[derive(Clone, Debug)]
pub struct ArbitraryMotor {
    pub axis: Vec3<f64>,
    pub angle: f64,
    pub translation: Vec3<f64>,
}

/// A finite point together with one mirror of each flat type.
#[derive(Clone, Debug)]
pub struct ArbitraryReflection {
    pub point: Point3<f64>,
    pub line: Line3<f64>,
    pub plane: Plane3<f64>,
    pub plane_mirror: Plane3<f64>,
    pub line_mirror: Line3<f64>,
    pub point_mirror: Point3<f64>,
}

fn arbitrary_fraction(u: &mut Unstructured<'_>) -> Result<f64> {
    Ok(f64::from(u.int_in_range(-RESOLUTION..=RESOLUTION)?) / f64::from(RESOLUTION))
}

fn arbitrary_coordinate(u: &mut Unstructured<'_>) -> Result<f64> {
    Ok(MAX_COORDINATE * arbitrary_fraction(u)?)
}

fn arbitrary_position(u: &mut Unstructured<'_>) -> Result<Vec3<f64>> {
    Ok(Vec3::new(
        arbitrary_coordinate(u)?,
        arbitrary_coordinate(u)?,
        arbitrary_coordinate(u)?,
    ))
}

/// A unit vector, falling back to the z-axis for near-zero draws.
fn arbitrary_unit_vector(u: &mut Unstructured<'_>) -> Result<Vec3<f64>> {
    let v = Vec3::new(
        arbitrary_fraction(u)?,
        arbitrary_fraction(u)?,
        arbitrary_fraction(u)?,
    );
    Ok(if v.length_squared() < 1e-4 {
        Vec3::Z
    } else {
        v.normalized()
    })
}

impl Arbitrary<'_> for ArbitraryMotor {
    fn arbitrary(u: &mut Unstructured<'_>) -> Result<Self> {
        let axis = arbitrary_unit_vector(u)?;
        let pure_translation: bool = u.arbitrary()?;
        let angle = if pure_translation {
            0.0
        } else {
            // Excludes the identity and the full turn, where the screw
            // axis is undefined.
            f64::TWO_PI * f64::from(u.int_in_range(1..=999)?) / 1000.0
        };
        let translation = arbitrary_position(u)?;
        Ok(Self {
            axis,
            angle,
            translation,
        })
    }
}

impl Arbitrary<'_> for ArbitraryReflection {
    fn arbitrary(u: &mut Unstructured<'_>) -> Result<Self> {
        let point = Point3::from_vector(arbitrary_position(u)?);
        let line = Line3::line(arbitrary_unit_vector(u)?, arbitrary_position(u)?);
        let plane = Plane3::plane(arbitrary_unit_vector(u)?, arbitrary_coordinate(u)?);
        let plane_mirror = Plane3::plane(arbitrary_unit_vector(u)?, arbitrary_coordinate(u)?);
        let line_mirror = Line3::line(arbitrary_unit_vector(u)?, arbitrary_position(u)?);
        let point_mirror = Point3::from_vector(arbitrary_position(u)?);
        Ok(Self {
            point,
            line,
            plane,
            plane_mirror,
            line_mirror,
            point_mirror,
        })
    }
}

impl ArbitraryMotor {
    pub fn motor(&self) -> Motor3<f64> {
        Motor3::from_axis_angle_translation(self.axis, self.angle, self.translation)
    }
}

pub fn fuzz_test_motor_exp_log_round_trip(input: ArbitraryMotor) {
    let motor = input.motor();
    let round_tripped = Motor3::exp(&motor.log());
    assert!(
        abs_diff_eq!(round_tripped, motor, epsilon = EPSILON),
        "exp(log(m)) != m for {input:?}: got {round_tripped:?}, expected {motor:?}"
    );
}

fn assert_reflection_is_involution<X, M>(x: &X, mirror: &M)
where
    X: Reflect<M> + approx::AbsDiffEq<Epsilon = f64> + std::fmt::Debug,
    M: Flat + std::fmt::Debug,
{
    let twice = x.reflect(mirror).reflect(mirror);
    assert!(
        abs_diff_eq!(twice, *x, epsilon = EPSILON * MAX_COORDINATE),
        "double reflection of {x:?} in {mirror:?} gave {twice:?}"
    );
}

pub fn fuzz_test_reflection_involution(input: ArbitraryReflection) {
    assert_reflection_is_involution(&input.point, &input.plane_mirror);
    assert_reflection_is_involution(&input.line, &input.plane_mirror);
    assert_reflection_is_involution(&input.plane, &input.plane_mirror);
    assert_reflection_is_involution(&input.point, &input.line_mirror);
    assert_reflection_is_involution(&input.line, &input.line_mirror);
    assert_reflection_is_involution(&input.plane, &input.line_mirror);
    assert_reflection_is_involution(&input.point, &input.point_mirror);
    assert_reflection_is_involution(&input.line, &input.point_mirror);
    assert_reflection_is_involution(&input.plane, &input.point_mirror);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEEDS: [[u8; 8]; 3] = [
        [0; 8],
        [255; 8],
        [17, 200, 3, 99, 42, 128, 7, 250],
    ];

    fn inputs<A: for<'a> Arbitrary<'a>>() -> Vec<A> {
        SEEDS
            .iter()
            .map(|seed| {
                let data: Vec<u8> = seed.iter().cycle().take(256).copied().collect();
                A::arbitrary(&mut Unstructured::new(&data)).unwrap()
            })
            .collect()
    }

    #[test]
    fn motor_exp_log_round_trip_holds_for_seeds() {
        for input in inputs::<ArbitraryMotor>() {
            fuzz_test_motor_exp_log_round_trip(input);
        }
    }

    #[test]
    fn reflection_involution_holds_for_seeds() {
        for input in inputs::<ArbitraryReflection>() {
            fuzz_test_reflection_involution(input);
        }
    }
}
