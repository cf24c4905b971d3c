//! Planes.

use crate::{
    flat::{Flat, Inner, Line3, Meet, Point3},
    num::Float,
    tolerance::{is_approx_zero, is_square_approx_zero},
    vector::Vec3,
};

/// A plane `e1·x + e2·y + e3·z + e0 = 0`, stored as a grade-1 PGA element.
///
/// `(e1, e2, e3)` is the (unnormalized) normal. The plane is vanishing,
/// i.e. it is the plane at infinity, when the normal is zero.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Plane3<T> {
    pub e1: T,
    pub e2: T,
    pub e3: T,
    pub e0: T,
}

impl<T: Float> Plane3<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    /// The unit plane at infinity.
    pub const VANISHING: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::NEG_ONE);
    /// The plane `x = 0`.
    pub const YZ: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    /// The plane `y = 0`.
    pub const ZX: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    /// The plane `z = 0`.
    pub const XY: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);

    #[inline]
    pub const fn new(e1: T, e2: T, e3: T, e0: T) -> Self {
        Self { e1, e2, e3, e0 }
    }

    /// Creates the plane with the given normal at signed distance
    /// `distance` from the origin along the normal (in units of the normal
    /// length).
    #[inline]
    pub fn plane(normal: Vec3<T>, distance: T) -> Self {
        Self::new(normal.x, normal.y, normal.z, -distance)
    }

    #[inline]
    pub fn vanishing_plane(distance: T) -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, -distance)
    }

    #[inline]
    pub fn normal(&self) -> Vec3<T> {
        Vec3::new(self.e1, self.e2, self.e3)
    }

    #[inline]
    pub fn is_vanishing(&self) -> bool {
        is_square_approx_zero(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.e1 * self.e1 + self.e2 * self.e2 + self.e3 * self.e3
    }

    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn vanishing_magnitude_squared(&self) -> T {
        self.e0 * self.e0
    }

    #[inline]
    pub fn vanishing_magnitude(&self) -> T {
        self.e0.abs()
    }

    /// Returns the plane with a unit normal. Any vanishing plane normalizes
    /// to [`Plane3::VANISHING`].
    #[inline]
    pub fn normalized(&self) -> Self {
        if self.is_vanishing() {
            log::trace!("Normalizing vanishing plane {self:?}");
            Self::VANISHING
        } else {
            self / self.magnitude()
        }
    }

    /// The point dual to this plane, at the ideal point in the direction of
    /// the normal.
    #[inline]
    pub fn dual(&self) -> Point3<T> {
        Point3::new(self.e1, self.e2, self.e3, T::ZERO)
    }

    #[inline]
    pub fn reverse(&self) -> Self {
        *self
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

impl_linear_ops!(Plane3 { e1, e2, e3, e0 });

impl<T: Float> Flat for Plane3<T> {
    type Scalar = T;

    #[inline]
    fn magnitude_squared(&self) -> T {
        Plane3::magnitude_squared(self)
    }

    #[inline]
    fn reverse(&self) -> Self {
        Plane3::reverse(self)
    }

    #[inline]
    fn is_approx_zero(&self) -> bool {
        Plane3::is_approx_zero(self)
    }
}

impl<T: Float> Meet for Plane3<T> {
    type Output = Line3<T>;

    #[inline]
    fn meet(&self, b: &Self) -> Line3<T> {
        let a = self;
        Line3::new(
            a.e2 * b.e3 - a.e3 * b.e2,
            a.e3 * b.e1 - a.e1 * b.e3,
            a.e1 * b.e2 - a.e2 * b.e1,
            a.e0 * b.e1 - a.e1 * b.e0,
            a.e0 * b.e2 - a.e2 * b.e0,
            a.e0 * b.e3 - a.e3 * b.e0,
        )
    }
}

impl<T: Float> Inner for Plane3<T> {
    type Output = T;

    /// The cosine of the angle between the planes, scaled by their
    /// magnitudes.
    #[inline]
    fn inner(&self, b: &Self) -> T {
        self.e1 * b.e1 + self.e2 * b.e2 + self.e3 * b.e3
    }
}
