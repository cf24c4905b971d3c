//! Points.

use crate::{
    flat::{Flat, Inner, Join, Line3},
    num::Float,
    tolerance::is_approx_zero,
    vector::Vec3,
};

/// A homogeneous point, stored as a grade-3 PGA element.
///
/// `e123` is the weight. A point with zero weight is vanishing: it is an
/// ideal point representing a pure direction.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3<T> {
    pub e032: T,
    pub e013: T,
    pub e021: T,
    pub e123: T,
}

impl<T: Float> Point3<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    pub const ORIGIN: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);
    pub const X_DIR: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    pub const Y_DIR: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    pub const Z_DIR: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);

    #[inline]
    pub const fn new(e032: T, e013: T, e021: T, e123: T) -> Self {
        Self {
            e032,
            e013,
            e021,
            e123,
        }
    }

    /// Creates the finite point with unit weight at `(x, y, z)`.
    #[inline]
    pub const fn point(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::ONE)
    }

    #[inline]
    pub fn from_vector(v: Vec3<T>) -> Self {
        Self::point(v.x, v.y, v.z)
    }

    /// Creates the ideal point in the given direction.
    #[inline]
    pub fn direction(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z, T::ZERO)
    }

    /// Returns the Euclidean coordinates of the point, or the direction if
    /// the point is vanishing.
    #[inline]
    pub fn as_vector(&self) -> Vec3<T> {
        let v = Vec3::new(self.e032, self.e013, self.e021);
        if self.is_vanishing() { v } else { v / self.e123 }
    }

    #[inline]
    pub fn is_vanishing(&self) -> bool {
        is_approx_zero(self.e123)
    }

    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.e123 * self.e123
    }

    #[inline]
    pub fn magnitude(&self) -> T {
        self.e123.abs()
    }

    #[inline]
    pub fn vanishing_magnitude_squared(&self) -> T {
        self.e032 * self.e032 + self.e013 * self.e013 + self.e021 * self.e021
    }

    #[inline]
    pub fn vanishing_magnitude(&self) -> T {
        self.vanishing_magnitude_squared().sqrt()
    }

    /// Returns the point scaled to unit weight, or, for a vanishing point,
    /// to a unit direction.
    #[inline]
    pub fn normalized(&self) -> Self {
        if self.is_vanishing() {
            log::trace!("Normalizing vanishing point {self:?}");
            self / self.vanishing_magnitude()
        } else {
            self / self.e123
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

impl_linear_ops!(Point3 { e032, e013, e021, e123 });

impl<T: Float> Flat for Point3<T> {
    type Scalar = T;

    #[inline]
    fn magnitude_squared(&self) -> T {
        Point3::magnitude_squared(self)
    }

    #[inline]
    fn reverse(&self) -> Self {
        Point3::reverse(self)
    }

    #[inline]
    fn is_approx_zero(&self) -> bool {
        Point3::is_approx_zero(self)
    }
}

impl<T: Float> Join for Point3<T> {
    type Output = Line3<T>;

    #[inline]
    fn join(&self, b: &Self) -> Line3<T> {
        let a = self;
        Line3::new(
            a.e032 * b.e123 - a.e123 * b.e032,
            a.e013 * b.e123 - a.e123 * b.e013,
            a.e021 * b.e123 - a.e123 * b.e021,
            a.e021 * b.e013 - a.e013 * b.e021,
            a.e032 * b.e021 - a.e021 * b.e032,
            a.e013 * b.e032 - a.e032 * b.e013,
        )
    }
}

impl<T: Float> Inner for Point3<T> {
    type Output = T;

    #[inline]
    fn inner(&self, b: &Self) -> T {
        -self.e123 * b.e123
    }
}

impl<T: Float> From<Vec3<T>> for Point3<T> {
    fn from(v: Vec3<T>) -> Self {
        Self::from_vector(v)
    }
}
