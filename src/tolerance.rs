//! Tolerances for deciding when a quantity is approximately zero.
//!
//! All degenerate-case branches in the crate (vanishing flats, zero-angle
//! rotors and motors) go through [`is_approx_zero`] or
//! [`is_square_approx_zero`]. The tolerance defaults to
//! [`DEFAULT_APPROX_EPSILON`] and can be overridden for the current thread
//! with [`with_approx_epsilon`].

use crate::num::Float;
use std::cell::Cell;

/// The tolerance used for quantities on the scale of a length.
pub const DEFAULT_APPROX_EPSILON: f64 = 1e-5;

thread_local! {
    static APPROX_EPSILON: Cell<f64> = const { Cell::new(DEFAULT_APPROX_EPSILON) };
}

/// Restores the previous tolerance when dropped.
#[derive(Debug)]
struct ApproxEpsilonGuard {
    previous: f64,
}

/// Returns the active tolerance for the current thread.
#[inline]
pub fn approx_epsilon<T: Float>() -> T {
    T::from_f64_lossy(APPROX_EPSILON.with(Cell::get))
}

/// Returns the square of the active tolerance, used for quantities that
/// are already sums of squares.
#[inline]
pub fn approx_epsilon_squared<T: Float>() -> T {
    let epsilon = APPROX_EPSILON.with(Cell::get);
    T::from_f64_lossy(epsilon * epsilon)
}

/// Whether `|value|` is below the active tolerance.
#[inline]
pub fn is_approx_zero<T: Float>(value: T) -> bool {
    value.abs() < approx_epsilon()
}

/// Whether `|value|` is below the square of the active tolerance.
#[inline]
pub fn is_square_approx_zero<T: Float>(value: T) -> bool {
    value.abs() < approx_epsilon_squared()
}

/// Runs the given closure with the tolerance of the current thread set to
/// `epsilon`. The previous tolerance is restored afterwards, also when the
/// closure panics.
pub fn with_approx_epsilon<R>(epsilon: f64, f: impl FnOnce() -> R) -> R {
    let _guard = ApproxEpsilonGuard::set(epsilon);
    f()
}

impl ApproxEpsilonGuard {
    fn set(epsilon: f64) -> Self {
        let previous = APPROX_EPSILON.with(|current| current.replace(epsilon));
        log::debug!("Overriding approximate-zero tolerance: {previous:e} -> {epsilon:e}");
        Self { previous }
    }
}

impl Drop for ApproxEpsilonGuard {
    fn drop(&mut self) {
        APPROX_EPSILON.with(|current| current.set(self.previous));
        log::debug!("Restored approximate-zero tolerance to {:e}", self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    fn default_tolerance_is_used_without_override() {
        assert_eq!(approx_epsilon::<f64>(), DEFAULT_APPROX_EPSILON);
        assert!(is_approx_zero(9e-6_f64));
        assert!(!is_approx_zero(2e-5_f32));
        assert!(is_square_approx_zero(-9e-11_f64));
        assert!(!is_square_approx_zero(1e-9_f64));
    }

    #[test]
    fn overriding_tolerance_applies_only_inside_closure() {
        let inside = with_approx_epsilon(1e-2, || {
            assert!(is_approx_zero(5e-3_f64));
            assert!(is_square_approx_zero(5e-5_f64));
            approx_epsilon::<f64>()
        });
        assert_eq!(inside, 1e-2);
        assert_eq!(approx_epsilon::<f64>(), DEFAULT_APPROX_EPSILON);
        assert!(!is_approx_zero(5e-3_f64));
    }

    #[test]
    fn nested_overrides_restore_in_order() {
        with_approx_epsilon(1e-3, || {
            with_approx_epsilon(1e-8, || {
                assert_eq!(approx_epsilon::<f64>(), 1e-8);
            });
            assert_eq!(approx_epsilon::<f64>(), 1e-3);
        });
        assert_eq!(approx_epsilon::<f64>(), DEFAULT_APPROX_EPSILON);
    }

    #[test]
    fn tolerance_is_restored_after_panic() {
        let result = panic::catch_unwind(|| {
            with_approx_epsilon(0.5, || panic!("inside override"));
        });
        assert!(result.is_err());
        assert_eq!(approx_epsilon::<f64>(), DEFAULT_APPROX_EPSILON);
    }
}
