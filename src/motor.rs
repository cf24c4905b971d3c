//! Motors.
//!
//! A motor is an even multivector `s + e23 + e31 + e12 + e0123 + e01 + e02 +
//! e03` encoding a rigid body motion (a screw motion in general). It acts on
//! flats through the sandwich product `m x ~m`, where `~m` is the reverse.
//! The first four coefficients form the real part, a [`Rotor3`], and the
//! last four the dual part, which carries the translation.

mod interpolation;

pub use interpolation::{eased, kenlerp, lielerp, sclerp, seplerp};

use crate::{
    flat::{Line3, Plane3, Point3},
    num::Float,
    rotor::Rotor3,
    tolerance::{is_approx_zero, is_square_approx_zero},
    vector::Vec3,
};

/// A rigid body motion in 3D.
///
/// Motors compose by multiplication: `(a * b).transform(x)` applies `b`
/// first and then `a`. The motors `m` and `-m` represent the same motion.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motor3<T> {
    pub s: T,
    pub e23: T,
    pub e31: T,
    pub e12: T,
    pub e0123: T,
    pub e01: T,
    pub e02: T,
    pub e03: T,
}

/// The screw parameters of a motor: a rotation by `angle` about the line
/// with the given unit `direction` and `moment`, together with a
/// translation by `translation` along that line.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrewCoordinates<T> {
    pub direction: Vec3<T>,
    pub moment: Vec3<T>,
    pub angle: T,
    pub translation: T,
}

/// Flats that a motor can move with the sandwich product.
pub trait Transformable<T: Float>: Sized {
    /// Returns `motor * self * reverse(motor)`.
    fn transformed_by(&self, motor: &Motor3<T>) -> Self;
}

impl<T: Float> Motor3<T> {
    pub const ZERO: Self = Self::new(
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
    );
    pub const IDENTITY: Self = Self::new(
        T::ONE,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
    );

    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(s: T, e23: T, e31: T, e12: T, e0123: T, e01: T, e02: T, e03: T) -> Self {
        Self {
            s,
            e23,
            e31,
            e12,
            e0123,
            e01,
            e02,
            e03,
        }
    }

    /// Assembles a motor from its real part `(s, e23, e31, e12)` and dual
    /// part `(e0123, e01, e02, e03)`.
    #[inline]
    pub fn from_parts(real: Rotor3<T>, dual: Rotor3<T>) -> Self {
        Self::new(
            real.s, real.e23, real.e31, real.e12, dual.s, dual.e23, dual.e31, dual.e12,
        )
    }

    /// Creates the motor rotating counterclockwise by `angle` radians about
    /// the given unit axis through the origin.
    #[inline]
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        Self::from_rotor(Rotor3::from_axis_angle(axis, angle))
    }

    #[inline]
    pub fn from_translation(translation: Vec3<T>) -> Self {
        let half = translation * T::NEG_ONE_HALF;
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO, T::ZERO, half.x, half.y, half.z)
    }

    #[inline]
    pub fn from_rotor(rotor: Rotor3<T>) -> Self {
        Self::from_parts(rotor, Rotor3::ZERO)
    }

    /// Creates the motor that first applies `rotation` and then translates
    /// by `translation`.
    #[inline]
    pub fn from_rotor_translation(rotation: Rotor3<T>, translation: Vec3<T>) -> Self {
        let half_translation = Rotor3::from_scalar_and_bivector(T::ZERO, translation * T::ONE_HALF);
        Self::from_parts(rotation, (half_translation * rotation).reverse())
    }

    #[inline]
    pub fn from_axis_angle_translation(axis: Vec3<T>, angle: T, translation: Vec3<T>) -> Self {
        Self::from_rotor_translation(Rotor3::from_axis_angle(axis, angle), translation)
    }

    /// Creates the screw motion rotating by `angle` about the line with unit
    /// `direction` and the given `moment` while translating by `translation`
    /// along it. With a vanishing angle the motor is a pure translation by
    /// `translation * direction`.
    pub fn from_screw_coordinates(direction: Vec3<T>, moment: Vec3<T>, angle: T, translation: T) -> Self {
        if is_approx_zero(angle) {
            log::trace!("Creating screw motor with vanishing angle as a translation");
            return Self::from_translation(direction * translation);
        }

        let (sin, cos) = (angle * T::ONE_HALF).sin_cos();
        let half_translation = translation * T::ONE_HALF;
        Self::from_parts(
            Rotor3::from_scalar_and_bivector(cos, direction * (-sin)),
            Rotor3::from_scalar_and_bivector(
                half_translation * sin,
                moment * (-sin) - direction * (half_translation * cos),
            ),
        )
    }

    #[inline]
    pub fn from_screw(screw: &ScrewCoordinates<T>) -> Self {
        Self::from_screw_coordinates(screw.direction, screw.moment, screw.angle, screw.translation)
    }

    /// The real part `(s, e23, e31, e12)`.
    #[inline]
    pub fn real_part(&self) -> Rotor3<T> {
        Rotor3::new(self.s, self.e23, self.e31, self.e12)
    }

    /// The dual part `(e0123, e01, e02, e03)`.
    #[inline]
    pub fn dual_part(&self) -> Rotor3<T> {
        Rotor3::new(self.e0123, self.e01, self.e02, self.e03)
    }

    /// The rotational part of the motion.
    #[inline]
    pub fn rotor(&self) -> Rotor3<T> {
        self.real_part()
    }

    /// The translation applied after [`Motor3::rotor`]. Only meaningful for
    /// a normalized motor.
    #[inline]
    pub fn translation(&self) -> Vec3<T> {
        ((self.dual_part().reverse() * self.real_part().reverse()) * T::TWO).bivector()
    }

    /// Whether the grade-4 part vanishes, meaning the motor is a pure
    /// rotation or a pure translation rather than a general screw.
    #[inline]
    pub fn is_simple(&self) -> bool {
        is_approx_zero(self.e0123)
    }

    #[inline]
    pub fn reverse(&self) -> Self {
        Self::new(
            self.s, -self.e23, -self.e31, -self.e12, self.e0123, -self.e01, -self.e02, -self.e03,
        )
    }

    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.real_part().length_squared()
    }

    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn vanishing_magnitude_squared(&self) -> T {
        self.dual_part().length_squared()
    }

    #[inline]
    pub fn vanishing_magnitude(&self) -> T {
        self.vanishing_magnitude_squared().sqrt()
    }

    #[inline]
    pub fn inverse(&self) -> Self {
        self.reverse() / self.magnitude_squared()
    }

    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.magnitude()
    }

    /// The exponential of a line, i.e. the screw motion about the line by
    /// twice its (negated) magnitude. A vanishing line exponentiates to a
    /// translation.
    pub fn exp(line: &Line3<T>) -> Self {
        let direction = line.direction();
        let moment = line.moment();
        let r = direction.length_squared();

        if is_square_approx_zero(r) {
            log::trace!("Exponentiating vanishing line into a translation");
            return Self::new(
                T::ONE,
                T::ZERO,
                T::ZERO,
                T::ZERO,
                T::ZERO,
                moment.x,
                moment.y,
                moment.z,
            );
        }

        let (u, v, axis) = unit_screw_axis(r, direction, moment);
        let (sin, cos) = u.sin_cos();
        Self::from_parts(
            Rotor3::from_scalar_and_bivector(cos, axis.direction() * sin),
            Rotor3::from_scalar_and_bivector(
                -v * sin,
                axis.moment() * sin - axis.direction() * (v * cos),
            ),
        )
    }

    /// The logarithm of a normalized motor, the inverse of [`Motor3::exp`]
    /// for rotation angles in `[0, 2π)`.
    ///
    /// A motor without rotation logs to a vanishing line whatever the sign of
    /// its scalar part, so a full turn combined with a translation logs to
    /// the translation alone.
    pub fn log(&self) -> Line3<T> {
        let bivector = self.real_part().bivector();
        let dual_bivector = self.dual_part().bivector();
        let r = bivector.length_squared();

        if is_square_approx_zero(r) {
            log::trace!("Taking logarithm of motor without rotation");
            // The scalar part is ±1 here and flips the sign of the dual part.
            return Line3::vanishing_line(dual_bivector / self.s);
        }

        let (u, v, axis) = unit_screw_axis(r, bivector, dual_bivector);
        let angle = u.atan2(self.s);
        let pitch = if is_approx_zero(self.s) {
            -self.e0123 / u
        } else {
            v / self.s
        };
        Line3::from_plucker(
            axis.direction() * angle,
            axis.moment() * angle - axis.direction() * pitch,
        )
    }

    /// Raises the motor to the given power, scaling both the rotation angle
    /// and the translation along the screw axis.
    #[inline]
    pub fn pow(&self, power: T) -> Self {
        Self::exp(&(self.log() * power))
    }

    /// Returns the motor doing half the motion.
    ///
    /// The square of the result is `self` or `-self`, which represent the
    /// same motion, whichever is numerically stable. Use
    /// [`Motor3::oriented_sqrt`] when the sign matters.
    pub fn sqrt(&self) -> Self {
        if self.s >= T::ZERO {
            self.sqrt_with_sign(T::ONE)
        } else {
            self.sqrt_with_sign(T::NEG_ONE)
        }
    }

    /// Returns the motor doing half the motion, up to a positive factor.
    /// Skips all divisions and square roots.
    pub fn fast_sqrt(&self) -> Self {
        let scaling = T::ONE + self.s;
        let half_g4 = T::ONE_HALF * self.e0123;
        let bivector = self.real_part().bivector();
        Self::from_parts(
            Rotor3::from_scalar_and_bivector(scaling * scaling, bivector * scaling),
            Rotor3::from_scalar_and_bivector(
                scaling * half_g4,
                self.dual_part().bivector() * scaling + bivector * half_g4,
            ),
        )
    }

    /// Returns the square root whose square is exactly `self` for a
    /// normalized motor. Falls back to [`Motor3::sqrt`] when the scalar part
    /// is near -1 (a full turn), where that root is not unique.
    pub fn oriented_sqrt(&self) -> Self {
        if is_approx_zero(T::ONE + self.s) {
            log::trace!("Taking oriented square root of full-turn motor");
            return self.sqrt();
        }
        self.sqrt_with_sign(T::ONE)
    }

    fn sqrt_with_sign(&self, sign: T) -> Self {
        let scaling = T::ONE + sign * self.s;
        let denominator = T::TWO * scaling;
        let g4 = self.e0123 / denominator;
        Self::from_parts(
            Rotor3::from_scalar_and_bivector(sign + self.s, self.real_part().bivector()),
            Rotor3::from_scalar_and_bivector(
                self.e0123 - scaling * g4,
                self.dual_part().bivector() + self.real_part().bivector() * (sign * g4),
            ),
        ) / denominator.sqrt()
    }

    /// Decomposes a normalized motor into screw parameters.
    ///
    /// Without rotation the direction is that of the translation (zero for
    /// the identity) and the moment is zero. The angle is then zero also for
    /// a full turn, since `m` and `-m` are the same motion.
    pub fn to_screw_coordinates(&self) -> ScrewCoordinates<T> {
        let s = self.s.max(T::NEG_ONE).min(T::ONE);
        let angle = T::TWO * s.acos();
        let sin = (angle * T::ONE_HALF).sin();

        if is_approx_zero(sin) {
            log::trace!("Decomposing motor without rotation into screw coordinates");
            let angle = T::TWO * s.abs().acos();
            let translation = self.translation();
            let distance = translation.length();
            let direction = if is_approx_zero(distance) {
                Vec3::ZERO
            } else {
                translation / distance
            };
            return ScrewCoordinates {
                direction,
                moment: Vec3::ZERO,
                angle,
                translation: distance,
            };
        }

        let inv_sin = sin.recip();
        let direction = self.real_part().bivector() * (-inv_sin);
        let translation = T::TWO * self.e0123 * inv_sin;
        let moment = self.dual_part().bivector() * (-inv_sin)
            - direction * (T::ONE_HALF * translation * s * inv_sin);

        ScrewCoordinates {
            direction,
            moment,
            angle,
            translation,
        }
    }

    /// The homogeneous transformation matrix of a normalized motor.
    pub fn as_transform(&self) -> nalgebra::Matrix4<T> {
        let rotor = self.rotor();
        let (x, y, z) = (rotor.x_basis(), rotor.y_basis(), rotor.z_basis());
        let t = self.translation();
        #[rustfmt::skip]
        let matrix = nalgebra::Matrix4::new(
            x.x,    y.x,    z.x,    t.x,
            x.y,    y.y,    z.y,    t.y,
            x.z,    y.z,    z.z,    t.z,
            T::ZERO, T::ZERO, T::ZERO, T::ONE,
        );
        matrix
    }

    /// Moves the given flat by the sandwich product.
    #[inline]
    pub fn transform<X: Transformable<T>>(&self, x: &X) -> X {
        x.transformed_by(self)
    }

    /// Moves the point with the given coordinates. The result is divided by
    /// the squared magnitude, so the motor need not be normalized.
    #[inline]
    pub fn transform_point(&self, point: &Vec3<T>) -> Vec3<T> {
        let rotor = self.real_part();
        (rotor.transform_vector(point) - self.point_offset() * T::TWO) / rotor.length_squared()
    }

    /// Rotates the given direction, ignoring the translation.
    #[inline]
    pub fn transform_direction(&self, direction: &Vec3<T>) -> Vec3<T> {
        self.real_part().transform_vector(direction)
    }

    /// Linearly interpolates the motor coefficients. The result is
    /// generally not normalized.
    #[inline]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        self + (other - self) * t
    }

    /// The (negated, halved) displacement the motor gives a point at the
    /// origin, before division by the squared magnitude.
    #[inline]
    fn point_offset(&self) -> Vec3<T> {
        let bivector = self.real_part().bivector();
        let dual_bivector = self.dual_part().bivector();
        dual_bivector * self.s + bivector * self.e0123 - bivector.cross(&dual_bivector)
    }
}

/// Splits the line `(direction, moment)` with squared direction length `r`
/// into `(u, v, axis)` such that the line equals `(u + v I) axis` for the
/// normalized line `axis`.
#[inline]
fn unit_screw_axis<T: Float>(r: T, direction: Vec3<T>, moment: Vec3<T>) -> (T, T, Line3<T>) {
    let u = r.sqrt();
    let v = -direction.dot(&moment) / u;
    let axis = Line3::from_plucker(direction / u, moment / u + direction * (v / r));
    (u, v, axis)
}

impl<T: Float> Default for Motor3<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl_linear_ops!(Motor3 { s, e23, e31, e12, e0123, e01, e02, e03 });

impl_binop!(Mul, mul, Motor3<T>, Motor3<T>, Motor3<T>, |a, b| {
    Motor3::new(
        a.s * b.s - a.e23 * b.e23 - a.e31 * b.e31 - a.e12 * b.e12,
        a.s * b.e23 + b.s * a.e23 - a.e31 * b.e12 + b.e31 * a.e12,
        a.s * b.e31 + b.s * a.e31 + a.e23 * b.e12 - b.e23 * a.e12,
        a.s * b.e12 + b.s * a.e12 - a.e23 * b.e31 + b.e23 * a.e31,
        a.e01 * b.e23
            + a.e02 * b.e31
            + a.e03 * b.e12
            + b.e01 * a.e23
            + b.e02 * a.e31
            + b.e03 * a.e12
            + a.s * b.e0123
            + b.s * a.e0123,
        a.s * b.e01 + b.s * a.e01 + a.e03 * b.e31 - a.e02 * b.e12 + b.e02 * a.e12
            - b.e03 * a.e31
            - a.e23 * b.e0123
            - b.e23 * a.e0123,
        a.s * b.e02 + b.s * a.e02 + a.e01 * b.e12 - a.e03 * b.e23 - b.e01 * a.e12
            + b.e03 * a.e23
            - a.e31 * b.e0123
            - b.e31 * a.e0123,
        a.s * b.e03 + b.s * a.e03 - a.e01 * b.e31 + a.e02 * b.e23 + b.e01 * a.e31
            - b.e02 * a.e23
            - a.e12 * b.e0123
            - b.e12 * a.e0123,
    )
});

impl_binop_assign!(MulAssign, mul_assign, Motor3<T>, Motor3<T>, |a, b| {
    *a = &*a * b;
});

// The geometric product of two flats of equal grade is a motor: the
// composition of the two reflections.

impl_binop!(Mul, mul, Plane3<T>, Plane3<T>, Motor3<T>, |a, b| {
    Motor3::new(
        a.e1 * b.e1 + a.e2 * b.e2 + a.e3 * b.e3,
        a.e2 * b.e3 - a.e3 * b.e2,
        a.e3 * b.e1 - a.e1 * b.e3,
        a.e1 * b.e2 - a.e2 * b.e1,
        T::ZERO,
        a.e0 * b.e1 - a.e1 * b.e0,
        a.e0 * b.e2 - a.e2 * b.e0,
        a.e0 * b.e3 - a.e3 * b.e0,
    )
});

impl_binop!(Mul, mul, Line3<T>, Line3<T>, Motor3<T>, |a, b| {
    Motor3::new(
        -a.e23 * b.e23 - a.e31 * b.e31 - a.e12 * b.e12,
        a.e12 * b.e31 - a.e31 * b.e12,
        a.e23 * b.e12 - a.e12 * b.e23,
        a.e31 * b.e23 - a.e23 * b.e31,
        a.e23 * b.e01
            + a.e31 * b.e02
            + a.e12 * b.e03
            + a.e01 * b.e23
            + a.e02 * b.e31
            + a.e03 * b.e12,
        a.e12 * b.e02 - a.e02 * b.e12 + a.e03 * b.e31 - a.e31 * b.e03,
        a.e23 * b.e03 - a.e03 * b.e23 + a.e01 * b.e12 - a.e12 * b.e01,
        a.e31 * b.e01 - a.e01 * b.e31 + a.e02 * b.e23 - a.e23 * b.e02,
    )
});

impl_binop!(Mul, mul, Point3<T>, Point3<T>, Motor3<T>, |a, b| {
    Motor3::new(
        -a.e123 * b.e123,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        a.e032 * b.e123 - b.e032 * a.e123,
        a.e013 * b.e123 - b.e013 * a.e123,
        a.e021 * b.e123 - b.e021 * a.e123,
    )
});

impl_binop!(Div, div, Plane3<T>, Plane3<T>, Motor3<T>, |a, b| { a * b.reverse() });
impl_binop!(Div, div, Line3<T>, Line3<T>, Motor3<T>, |a, b| { a * b.reverse() });
impl_binop!(Div, div, Point3<T>, Point3<T>, Motor3<T>, |a, b| { a * b.reverse() });

impl<T: Float> Transformable<T> for Plane3<T> {
    fn transformed_by(&self, motor: &Motor3<T>) -> Self {
        let rotor = motor.real_part();
        let bivector = rotor.bivector();
        let dual_bivector = motor.dual_part().bivector();
        let offset =
            dual_bivector * motor.s + bivector * motor.e0123 + bivector.cross(&dual_bivector);

        let normal = self.normal();
        let rotated = rotor.transform_vector(&normal);
        Plane3::new(
            rotated.x,
            rotated.y,
            rotated.z,
            self.e0 * rotor.length_squared() + T::TWO * normal.dot(&offset),
        )
    }
}

impl<T: Float> Transformable<T> for Line3<T> {
    fn transformed_by(&self, motor: &Motor3<T>) -> Self {
        let rotor = motor.real_part();
        let b = rotor.bivector();
        let d = motor.dual_part().bivector();
        let a = self.direction();

        let shear = d * b.dot(&a) + b * a.dot(&d) - a * b.dot(&d)
            + (b.cross(&a) - a * motor.s) * motor.e0123
            + a.cross(&d) * motor.s;

        Line3::from_plucker(
            rotor.transform_vector(&a),
            rotor.transform_vector(&self.moment()) + shear * T::TWO,
        )
    }
}

impl<T: Float> Transformable<T> for Point3<T> {
    fn transformed_by(&self, motor: &Motor3<T>) -> Self {
        let rotor = motor.real_part();
        let moved = rotor.transform_vector(&Vec3::new(self.e032, self.e013, self.e021))
            - motor.point_offset() * (T::TWO * self.e123);
        Point3::new(
            moved.x,
            moved.y,
            moved.z,
            self.e123 * rotor.length_squared(),
        )
    }
}
