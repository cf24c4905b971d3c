//! Angles in degrees and radians.

use crate::num::Float;
use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An angle that can be read in either unit.
pub trait Angle<T>: Copy {
    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees<T>;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians<T>;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> T;

    /// Returns the value of the angle in radians.
    fn radians(self) -> T;
}

/// An angle in degrees.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees<T>(pub T);

/// An angle in radians.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians<T>(pub T);

/// Converts an angle in radians to degrees.
#[inline]
pub fn radians_to_degrees<T: Float>(radians: T) -> T {
    radians * (T::from_f64_lossy(180.0) / T::PI)
}

/// Converts an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians<T: Float>(degrees: T) -> T {
    degrees * (T::PI / T::from_f64_lossy(180.0))
}

impl<T: Float> Angle<T> for Degrees<T> {
    fn as_degrees(self) -> Degrees<T> {
        self
    }

    fn as_radians(self) -> Radians<T> {
        Radians::from(self)
    }

    fn degrees(self) -> T {
        self.0
    }

    fn radians(self) -> T {
        degrees_to_radians(self.0)
    }
}

impl<T: Float> Angle<T> for Radians<T> {
    fn as_degrees(self) -> Degrees<T> {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians<T> {
        self
    }

    fn degrees(self) -> T {
        radians_to_degrees(self.0)
    }

    fn radians(self) -> T {
        self.0
    }
}

impl<T: Float> From<Radians<T>> for Degrees<T> {
    fn from(rad: Radians<T>) -> Self {
        Self(radians_to_degrees(rad.0))
    }
}

impl<T: Float> From<Degrees<T>> for Radians<T> {
    fn from(deg: Degrees<T>) -> Self {
        Self(degrees_to_radians(deg.0))
    }
}

macro_rules! impl_angle_ops {
    ($unit:ident, $other:ident) => {
        impl<T: Float> Add for $unit<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl<T: Float> Add<$other<T>> for $unit<T> {
            type Output = Self;
            fn add(self, rhs: $other<T>) -> Self {
                self + Self::from(rhs)
            }
        }

        impl<T: Float> Sub for $unit<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl<T: Float> Sub<$other<T>> for $unit<T> {
            type Output = Self;
            fn sub(self, rhs: $other<T>) -> Self {
                self - Self::from(rhs)
            }
        }

        impl<T: Float> Mul<T> for $unit<T> {
            type Output = Self;
            fn mul(self, rhs: T) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl<T: Float> Div<T> for $unit<T> {
            type Output = Self;
            fn div(self, rhs: T) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl<T: Float> Neg for $unit<T> {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl<T: Float> AbsDiffEq for $unit<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }

        impl<T: Float> RelativeEq for $unit<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
    };
}

impl_angle_ops!(Degrees, Radians);
impl_angle_ops!(Radians, Degrees);
