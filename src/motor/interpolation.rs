//! Interpolation between normalized motors.
//!
//! All policies return `a` at `t = 0` and `b` at `t = 1`. They differ in
//! the path taken in between.

use super::{Motor3, ScrewCoordinates};
use crate::{ease::Easing, num::Float, rotor};

/// Interpolates the rotation (by slerp) and the translation (linearly)
/// separately, so the translation moves along a straight line.
pub fn seplerp<T: Float>(a: &Motor3<T>, b: &Motor3<T>, t: T) -> Motor3<T> {
    Motor3::from_rotor_translation(
        rotor::slerp(&a.rotor(), &b.rotor(), t),
        a.translation().lerp(&b.translation(), t),
    )
}

/// Screw linear interpolation: moves along the constant screw axis taking
/// `a` to `b`, scaling the angle and the translation along the axis.
pub fn sclerp<T: Float>(a: &Motor3<T>, b: &Motor3<T>, t: T) -> Motor3<T> {
    let screw = (a.reverse() * b).to_screw_coordinates();
    a * Motor3::from_screw(&ScrewCoordinates {
        angle: screw.angle * t,
        translation: screw.translation * t,
        ..screw
    })
}

/// Interpolates through the motor logarithm. Follows the same path as
/// [`sclerp`].
#[inline]
pub fn lielerp<T: Float>(a: &Motor3<T>, b: &Motor3<T>, t: T) -> Motor3<T> {
    a * (a.reverse() * b).pow(t)
}

/// Blends the [`sclerp`] path (at `beta = 0`) with the [`seplerp`] path (at
/// `beta = 1`).
pub fn kenlerp<T: Float>(a: &Motor3<T>, b: &Motor3<T>, t: T, beta: T) -> Motor3<T> {
    let screw = sclerp(a, b, t);
    let separate = seplerp(a, b, t);
    seplerp(&screw, &separate, beta)
}

/// Runs the interpolation `policy` at the parameter remapped by `easing`.
#[inline]
pub fn eased<T, P>(policy: P, a: &Motor3<T>, b: &Motor3<T>, t: T, easing: Easing) -> Motor3<T>
where
    T: Float,
    P: Fn(&Motor3<T>, &Motor3<T>, T) -> Motor3<T>,
{
    policy(a, b, easing.apply(t))
}
