//! Easing curves.
//!
//! An easing remaps an interpolation parameter `t` in `[0, 1]` so that the
//! motion speeds up, slows down or overshoots. Every curve maps `0` to `0`
//! and `1` to `1`. The `Out` variant of a curve is its point reflection
//! `1 - f(1 - t)`, and `InOut` runs the `In` curve over the first half and
//! the `Out` curve over the second.

use crate::{motor::Motor3, multivector::Mvec3, num::Float, rotor::Rotor3, vector};

/// The shape of an easing curve, named by the function applied in the
/// `In` direction.
#[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    #[default]
    Linear,
    Quad,
    Cubic,
    Quart,
    Quint,
    Sine,
    Circ,
    Elastic,
    Expo,
    Back,
    Bounce,
}

/// Which end of the interval the curve eases.
#[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Starts slowly.
    #[default]
    In,
    /// Ends slowly.
    Out,
    /// Starts and ends slowly.
    InOut,
}

/// An easing curve together with its direction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Easing {
    pub curve: Curve,
    pub direction: Direction,
}

/// Types that can be linearly interpolated by a scalar parameter.
pub trait Lerp<T: Float> {
    fn lerp(&self, other: &Self, t: T) -> Self;
}

const BACK_OVERSHOOT: f64 = 1.70158;
const BOUNCE_SCALE: f64 = 7.5625;
const BOUNCE_WIDTH: f64 = 2.75;

impl Easing {
    pub const LINEAR: Self = Self::new(Curve::Linear, Direction::In);

    #[inline]
    pub const fn new(curve: Curve, direction: Direction) -> Self {
        Self { curve, direction }
    }

    /// Remaps the interpolation parameter `t`, expected in `[0, 1]`.
    pub fn apply<T: Float>(&self, t: T) -> T {
        match self.direction {
            Direction::In => ease_in(self.curve, t),
            Direction::Out => ease_out(self.curve, t),
            Direction::InOut => ease_in_out(self.curve, t),
        }
    }
}

fn c<T: Float>(value: f64) -> T {
    T::from_f64_lossy(value)
}

/// Applies the curve in the `In` direction.
pub fn ease_in<T: Float>(curve: Curve, t: T) -> T {
    match curve {
        Curve::Linear => t,
        Curve::Quad => t * t,
        Curve::Cubic => t * t * t,
        Curve::Quart => (t * t) * (t * t),
        Curve::Quint => (t * t) * (t * t) * t,
        Curve::Sine => T::ONE - (T::FRAC_PI_2 * t).cos(),
        Curve::Circ => T::ONE - (T::ONE - t * t).max(T::ZERO).sqrt(),
        Curve::Elastic => {
            if t <= T::ZERO {
                T::ZERO
            } else {
                let omega = T::TWO_PI / c(3.0);
                -T::TWO.powf(c::<T>(10.0) * t - c(10.0)) * ((c::<T>(10.0) * t - c(10.75)) * omega).sin()
            }
        }
        Curve::Expo => {
            if t <= T::ZERO {
                T::ZERO
            } else {
                T::TWO.powf(c::<T>(10.0) * t - c(10.0))
            }
        }
        Curve::Back => {
            let a = c::<T>(BACK_OVERSHOOT);
            (a + T::ONE) * t * t * t - a * t * t
        }
        Curve::Bounce => T::ONE - bounce_out(T::ONE - t),
    }
}

/// Applies the curve in the `Out` direction.
#[inline]
pub fn ease_out<T: Float>(curve: Curve, t: T) -> T {
    T::ONE - ease_in(curve, T::ONE - t)
}

/// Applies the curve in the `InOut` direction.
pub fn ease_in_out<T: Float>(curve: Curve, t: T) -> T {
    let first_half = t < T::ONE_HALF;
    let two_t = T::TWO * t;
    match curve {
        Curve::Elastic => {
            if t <= T::ZERO {
                return T::ZERO;
            }
            if t >= T::ONE {
                return T::ONE;
            }
            let omega = T::TWO_PI / c(4.5);
            let phase = ((c::<T>(20.0) * t - c(11.125)) * omega).sin();
            if first_half {
                -T::ONE_HALF * T::TWO.powf(c::<T>(20.0) * t - c(10.0)) * phase
            } else {
                T::ONE + T::ONE_HALF * T::TWO.powf(c::<T>(10.0) - c::<T>(20.0) * t) * phase
            }
        }
        Curve::Back => {
            let b = c::<T>(BACK_OVERSHOOT) + T::ONE;
            if first_half {
                T::TWO * t * t * ((b + T::ONE) * two_t - b)
            } else {
                let u = T::TWO - two_t;
                T::ONE + T::ONE_HALF * u * u * (b - (b + T::ONE) * u)
            }
        }
        _ => {
            if first_half {
                T::ONE_HALF * ease_in(curve, two_t)
            } else {
                T::ONE_HALF * (T::ONE + ease_out(curve, two_t - T::ONE))
            }
        }
    }
}

fn bounce_out<T: Float>(t: T) -> T {
    let n = c::<T>(BOUNCE_SCALE);
    let d = c::<T>(BOUNCE_WIDTH);
    if t < T::ONE / d {
        n * t * t
    } else if t < T::TWO / d {
        let u = t - c::<T>(1.5) / d;
        n * u * u + c(0.75)
    } else if t < c::<T>(2.5) / d {
        let u = t - c::<T>(2.25) / d;
        n * u * u + c(0.9375)
    } else {
        let u = t - c::<T>(2.625) / d;
        n * u * u + c(0.984375)
    }
}

/// Linearly interpolates between `a` and `b` at the eased parameter.
#[inline]
pub fn interpolate<T: Float, X: Lerp<T>>(a: &X, b: &X, t: T, easing: Easing) -> X {
    a.lerp(b, easing.apply(t))
}

macro_rules! impl_lerp_for_scalar {
    ($f:ty) => {
        impl Lerp<$f> for $f {
            #[inline]
            fn lerp(&self, other: &Self, t: $f) -> Self {
                crate::num::lerp(*self, *other, t)
            }
        }
    };
}

macro_rules! impl_lerp_by_inherent {
    ($($t:ident)::+) => {
        impl<T: Float> Lerp<T> for $($t)::+<T> {
            #[inline]
            fn lerp(&self, other: &Self, t: T) -> Self {
                $($t)::+::lerp(self, other, t)
            }
        }
    };
}

impl_lerp_for_scalar!(f32);
impl_lerp_for_scalar!(f64);
impl_lerp_by_inherent!(vector::Vec2);
impl_lerp_by_inherent!(vector::Vec3);
impl_lerp_by_inherent!(vector::Vec4);
impl_lerp_by_inherent!(Rotor3);
impl_lerp_by_inherent!(Motor3);
impl_lerp_by_inherent!(Mvec3);
