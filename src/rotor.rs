//! Rotors.

use crate::{
    flat::{Line3, Plane3, Point3},
    motor::{Motor3, Transformable},
    num::Float,
    tolerance::is_approx_zero,
    vector::Vec3,
};

/// A rotation about an axis through the origin, stored as the even
/// Euclidean part `s + e23 + e31 + e12` of a PGA multivector.
///
/// A rotor representing a rotation has unit length. The rotors `r` and
/// `-r` represent the same rotation.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotor3<T> {
    pub s: T,
    pub e23: T,
    pub e31: T,
    pub e12: T,
}

impl<T: Float> Rotor3<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    pub const IDENTITY: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);

    #[inline]
    pub const fn new(s: T, e23: T, e31: T, e12: T) -> Self {
        Self { s, e23, e31, e12 }
    }

    #[inline]
    pub fn from_scalar_and_bivector(s: T, bivector: Vec3<T>) -> Self {
        Self::new(s, bivector.x, bivector.y, bivector.z)
    }

    /// Creates the rotor rotating counterclockwise by `angle` radians about
    /// the given axis, which must have unit length.
    #[inline]
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let (sin, cos) = (angle * T::ONE_HALF).sin_cos();
        Self::from_scalar_and_bivector(cos, axis * (-sin))
    }

    /// The bivector part `(e23, e31, e12)`.
    #[inline]
    pub fn bivector(&self) -> Vec3<T> {
        Vec3::new(self.e23, self.e31, self.e12)
    }

    #[inline]
    pub fn reverse(&self) -> Self {
        Self::new(self.s, -self.e23, -self.e31, -self.e12)
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.s * self.s + self.e23 * self.e23 + self.e31 * self.e31 + self.e12 * self.e12
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.length()
    }

    #[inline]
    pub fn inverse(&self) -> Self {
        self.reverse() / self.length_squared()
    }

    /// The exponential of the rotor viewed as a scalar plus a bivector.
    pub fn exp(&self) -> Self {
        let bivector = self.bivector();
        let bivector_length = bivector.length();
        let exp_s = self.s.exp();

        if is_approx_zero(bivector_length) {
            log::trace!("Exponentiating rotor with vanishing bivector part");
            return Self::from_scalar_and_bivector(exp_s, bivector * exp_s);
        }

        let (sin, cos) = bivector_length.sin_cos();
        Self::from_scalar_and_bivector(exp_s * cos, bivector * (exp_s * sin / bivector_length))
    }

    /// The logarithm, the inverse of [`Rotor3::exp`] for rotation angles in
    /// `[0, 2π)`.
    ///
    /// A rotor without bivector part logs to a pure scalar, so `-1` (a full
    /// turn) logs to `0` like the identity. The two rotate vectors the same
    /// way, but `exp(log(r))` is then `-r`.
    pub fn log(&self) -> Self {
        let length = self.length();
        let bivector = self.bivector();
        let bivector_length = bivector.length();

        if is_approx_zero(bivector_length) {
            log::trace!("Taking logarithm of rotor with vanishing bivector part");
            return Self::new(length.ln(), T::ZERO, T::ZERO, T::ZERO);
        }

        let cos = (self.s / length).max(T::NEG_ONE).min(T::ONE);
        Self::from_scalar_and_bivector(length.ln(), bivector * (cos.acos() / bivector_length))
    }

    /// Raises the rotor to the given power, scaling its rotation angle.
    #[inline]
    pub fn pow(&self, power: T) -> Self {
        (self.log() * power).exp()
    }

    /// Returns the rotor doing half the rotation, scaled so that its
    /// square has the length of `self`.
    pub fn sqrt(&self) -> Self {
        let length = self.length();
        if is_approx_zero(length + self.s) {
            log::trace!("Taking square root of rotor with full-turn rotation");
            return Self::new(T::ZERO, length.sqrt(), T::ZERO, T::ZERO);
        }
        let half_way = Self::new(length + self.s, self.e23, self.e31, self.e12);
        half_way * (length.sqrt() / half_way.length())
    }

    /// Linearly interpolates the rotor components. The result is generally
    /// not normalized.
    #[inline]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        self + (other - self) * t
    }

    /// The image of the x-axis under the rotation.
    #[inline]
    pub fn x_basis(&self) -> Vec3<T> {
        let Self { s, e23, e31, e12 } = *self;
        Vec3::new(
            e23 * e23 - e31 * e31 - e12 * e12 + s * s,
            T::TWO * (e23 * e31 - e12 * s),
            T::TWO * (e23 * e12 + e31 * s),
        )
    }

    /// The image of the y-axis under the rotation.
    #[inline]
    pub fn y_basis(&self) -> Vec3<T> {
        let Self { s, e23, e31, e12 } = *self;
        Vec3::new(
            T::TWO * (e31 * e23 + s * e12),
            -e23 * e23 + e31 * e31 - e12 * e12 + s * s,
            T::TWO * (e31 * e12 - s * e23),
        )
    }

    /// The image of the z-axis under the rotation.
    #[inline]
    pub fn z_basis(&self) -> Vec3<T> {
        let Self { s, e23, e31, e12 } = *self;
        Vec3::new(
            T::TWO * (e12 * e23 - s * e31),
            T::TWO * (s * e23 + e31 * e12),
            -e23 * e23 - e31 * e31 + e12 * e12 + s * s,
        )
    }

    /// The rotation matrix, with the images of the coordinate axes as
    /// columns. For a rotor that is not normalized the matrix is scaled by
    /// the squared length.
    pub fn basis(&self) -> nalgebra::Matrix3<T> {
        nalgebra::Matrix3::from_columns(&[
            nalgebra::Vector3::from(self.x_basis()),
            nalgebra::Vector3::from(self.y_basis()),
            nalgebra::Vector3::from(self.z_basis()),
        ])
    }

    /// Rotates the given vector.
    #[inline]
    pub fn transform_vector(&self, v: &Vec3<T>) -> Vec3<T> {
        self.x_basis() * v.x + self.y_basis() * v.y + self.z_basis() * v.z
    }

    /// Rotates the given flat by the sandwich product.
    #[inline]
    pub fn transform<X: Transformable<T>>(&self, x: &X) -> X {
        Motor3::from_rotor(*self).transform(x)
    }

    #[inline]
    pub fn transform_plane(&self, plane: &Plane3<T>) -> Plane3<T> {
        self.transform(plane)
    }

    #[inline]
    pub fn transform_line(&self, line: &Line3<T>) -> Line3<T> {
        self.transform(line)
    }

    #[inline]
    pub fn transform_point(&self, point: &Point3<T>) -> Point3<T> {
        self.transform(point)
    }
}

impl<T: Float> Default for Rotor3<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl_linear_ops!(Rotor3 { s, e23, e31, e12 });

impl_binop!(Mul, mul, Rotor3<T>, Rotor3<T>, Rotor3<T>, |a, b| {
    Rotor3::new(
        a.s * b.s - a.e23 * b.e23 - a.e31 * b.e31 - a.e12 * b.e12,
        a.s * b.e23 + b.s * a.e23 - a.e31 * b.e12 + b.e31 * a.e12,
        a.s * b.e31 + b.s * a.e31 + a.e23 * b.e12 - b.e23 * a.e12,
        a.s * b.e12 + b.s * a.e12 - a.e23 * b.e31 + b.e23 * a.e31,
    )
});

impl_binop_assign!(MulAssign, mul_assign, Rotor3<T>, Rotor3<T>, |a, b| {
    *a = &*a * b;
});

/// Spherical linear interpolation from `a` (at `t = 0`) to `b` (at
/// `t = 1`) with constant angular velocity.
#[inline]
pub fn slerp<T: Float>(a: &Rotor3<T>, b: &Rotor3<T>, t: T) -> Rotor3<T> {
    a * (a.reverse() * b).pow(t)
}
