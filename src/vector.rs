//! Vectors.

use crate::num::Float;

/// A 2-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A 4-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Float> Vec2<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);
    pub const X: Self = Self::new(T::ONE, T::ZERO);
    pub const Y: Self = Self::new(T::ZERO, T::ONE);

    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl<T: Float> Vec3<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn same(value: T) -> Self {
        Self::new(value, value, value)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl<T: Float> Vec4<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    pub const W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns the first three components.
    #[inline]
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

macro_rules! impl_metric {
    ($t:ident) => {
        impl<T: Float> $t<T> {
            #[inline]
            pub fn length_squared(&self) -> T {
                self.dot(self)
            }

            #[inline]
            pub fn length(&self) -> T {
                self.length_squared().sqrt()
            }

            /// Returns the vector scaled to unit length. A zero vector
            /// yields non-finite components.
            #[inline]
            pub fn normalized(&self) -> Self {
                self / self.length()
            }

            /// Linearly interpolates from `self` (at `t = 0`) to `other`
            /// (at `t = 1`).
            #[inline]
            pub fn lerp(&self, other: &Self, t: T) -> Self {
                self + (other - self) * t
            }
        }
    };
}

impl_metric!(Vec2);
impl_metric!(Vec3);
impl_metric!(Vec4);

impl_linear_ops!(Vec2 { x, y });
impl_linear_ops!(Vec3 { x, y, z });
impl_linear_ops!(Vec4 { x, y, z, w });

impl<T: Float> From<nalgebra::Vector2<T>> for Vec2<T> {
    fn from(v: nalgebra::Vector2<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T: Float> From<Vec2<T>> for nalgebra::Vector2<T> {
    fn from(v: Vec2<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T: Float> From<nalgebra::Vector3<T>> for Vec3<T> {
    fn from(v: nalgebra::Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T: Float> From<Vec3<T>> for nalgebra::Vector3<T> {
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T: Float> From<nalgebra::Vector4<T>> for Vec4<T> {
    fn from(v: nalgebra::Vector4<T>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl<T: Float> From<Vec4<T>> for nalgebra::Vector4<T> {
    fn from(v: Vec4<T>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}
