//! Lines.

use crate::{
    flat::{Flat, Inner, Join, Meet},
    num::Float,
    tolerance::{is_approx_zero, is_square_approx_zero},
    vector::Vec3,
};

/// A line in Plücker form, stored as a grade-2 PGA element.
///
/// `(e23, e31, e12)` is the direction and `(e01, e02, e03)` the moment. A
/// line with zero direction is vanishing: it lies in the plane at infinity.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Line3<T> {
    pub e23: T,
    pub e31: T,
    pub e12: T,
    pub e01: T,
    pub e02: T,
    pub e03: T,
}

impl<T: Float> Line3<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    pub const X_AXIS: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    pub const Y_AXIS: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    pub const Z_AXIS: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO, T::ZERO, T::ZERO);

    #[inline]
    pub const fn new(e23: T, e31: T, e12: T, e01: T, e02: T, e03: T) -> Self {
        Self {
            e23,
            e31,
            e12,
            e01,
            e02,
            e03,
        }
    }

    /// Creates the line through `point` with the given direction.
    #[inline]
    pub fn line(direction: Vec3<T>, point: Vec3<T>) -> Self {
        Self::from_plucker(direction, point.cross(&direction))
    }

    #[inline]
    pub fn from_plucker(direction: Vec3<T>, moment: Vec3<T>) -> Self {
        Self::new(
            direction.x,
            direction.y,
            direction.z,
            moment.x,
            moment.y,
            moment.z,
        )
    }

    #[inline]
    pub fn vanishing_line(direction: Vec3<T>) -> Self {
        Self::from_plucker(Vec3::ZERO, direction)
    }

    #[inline]
    pub fn direction(&self) -> Vec3<T> {
        Vec3::new(self.e23, self.e31, self.e12)
    }

    #[inline]
    pub fn moment(&self) -> Vec3<T> {
        Vec3::new(self.e01, self.e02, self.e03)
    }

    #[inline]
    pub fn is_vanishing(&self) -> bool {
        is_square_approx_zero(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.direction().length_squared()
    }

    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn vanishing_magnitude_squared(&self) -> T {
        self.moment().length_squared()
    }

    #[inline]
    pub fn vanishing_magnitude(&self) -> T {
        self.vanishing_magnitude_squared().sqrt()
    }

    /// Returns the line scaled to a unit direction, or to a unit moment if
    /// the line is vanishing.
    #[inline]
    pub fn normalized(&self) -> Self {
        if self.is_vanishing() {
            log::trace!("Normalizing vanishing line {self:?}");
            self / self.vanishing_magnitude()
        } else {
            self / self.magnitude()
        }
    }

    #[inline]
    pub fn reverse(&self) -> Self {
        -self
    }

    #[inline]
    pub fn inverse(&self) -> Self {
        self.reverse() / self.magnitude_squared()
    }

    #[inline]
    pub fn is_approx_zero(&self) -> bool {
        self.to_array().into_iter().all(is_approx_zero)
    }
}

impl_linear_ops!(Line3 { e23, e31, e12, e01, e02, e03 });

impl<T: Float> Flat for Line3<T> {
    type Scalar = T;

    #[inline]
    fn magnitude_squared(&self) -> T {
        Line3::magnitude_squared(self)
    }

    #[inline]
    fn reverse(&self) -> Self {
        Line3::reverse(self)
    }

    #[inline]
    fn is_approx_zero(&self) -> bool {
        Line3::is_approx_zero(self)
    }
}

/// The pseudoscalar coefficient of `a ∧ b`. It vanishes exactly when the
/// lines are coplanar.
#[inline]
fn line_line_incidence<T: Float>(a: &Line3<T>, b: &Line3<T>) -> T {
    a.e23 * b.e01 + a.e31 * b.e02 + a.e12 * b.e03 + a.e01 * b.e23 + a.e02 * b.e31 + a.e03 * b.e12
}

impl<T: Float> Meet for Line3<T> {
    type Output = T;

    #[inline]
    fn meet(&self, b: &Self) -> T {
        line_line_incidence(self, b)
    }
}

impl<T: Float> Join for Line3<T> {
    type Output = T;

    #[inline]
    fn join(&self, b: &Self) -> T {
        line_line_incidence(self, b)
    }
}

impl<T: Float> Inner for Line3<T> {
    type Output = T;

    #[inline]
    fn inner(&self, b: &Self) -> T {
        -(self.e23 * b.e23 + self.e31 * b.e31 + self.e12 * b.e12)
    }
}
