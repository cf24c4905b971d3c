//! Numbers and numerics.

use num_traits as nt;
use std::fmt;

/// Gathers traits useful for working with generic floating point types.
///
/// Every type in the crate is generic over a `Float`, and the trait is
/// implemented for [`f32`] and [`f64`].
pub trait Float:
    nt::Float
    + nt::FromPrimitive
    + nt::ToPrimitive
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
    + bytemuck::Pod
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const TWO: Self;
    const ONE_HALF: Self;
    const NEG_ONE_HALF: Self;
    const PI: Self;
    const TWO_PI: Self;
    const FRAC_PI_2: Self;
    const INFINITY: Self;

    /// Converts the given `f64` to this type, rounding to the nearest
    /// representable value.
    fn from_f64_lossy(value: f64) -> Self;
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const ONE_HALF: Self = 0.5;
            const NEG_ONE_HALF: Self = -0.5;
            const PI: Self = std::$f::consts::PI;
            const TWO_PI: Self = 2.0 * std::$f::consts::PI;
            const FRAC_PI_2: Self = std::$f::consts::FRAC_PI_2;
            const INFINITY: Self = Self::INFINITY;

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn from_f64_lossy(value: f64) -> Self {
                value as $f
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

/// Linearly interpolates between two scalars.
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_constants_are_consistent_for_f32_and_f64() {
        assert_eq!(<f32 as Float>::TWO_PI, 2.0 * std::f32::consts::PI);
        assert_eq!(<f64 as Float>::ONE_HALF * 2.0, <f64 as Float>::ONE);
        assert_eq!(<f32 as Float>::NEG_ONE_HALF, -0.5);
    }

    #[test]
    fn lossy_conversion_rounds_to_nearest() {
        assert_eq!(f32::from_f64_lossy(0.1), 0.1_f32);
        assert_eq!(f64::from_f64_lossy(1e-5), 1e-5);
    }

    #[test]
    fn scalar_lerp_hits_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0_f64, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0_f64, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0_f64, 6.0, 0.5), 4.0);
    }
}
