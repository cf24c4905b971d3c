//! Utility macros.
//!
//! All value types in the crate are generic over a scalar `T: Float`, so
//! the operator macros below introduce that parameter themselves. Types
//! passed to them are written in terms of `T`, e.g. `Plane3<T>`.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a, T: $crate::num::Float> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<T: $crate::num::Float> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, T: $crate::num::Float> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<T: $crate::num::Float> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<T: $crate::num::Float> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<T: $crate::num::Float> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<T: $crate::num::Float> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<T: $crate::num::Float> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements `f32 * X<f32>` and `f64 * X<f64>` by forwarding to the
/// right-hand scalar multiplication, which the orphan rule prevents from
/// being written generically.
macro_rules! impl_scalar_lhs_mul {
    ($t:ident) => {
        impl_scalar_lhs_mul!(@float f32, $t);
        impl_scalar_lhs_mul!(@float f64, $t);
    };
    (@float $f:ty, $t:ident) => {
        impl ::std::ops::Mul<$t<$f>> for $f {
            type Output = $t<$f>;

            #[inline]
            fn mul(self, rhs: $t<$f>) -> Self::Output {
                rhs * self
            }
        }

        impl ::std::ops::Mul<&$t<$f>> for $f {
            type Output = $t<$f>;

            #[inline]
            fn mul(self, rhs: &$t<$f>) -> Self::Output {
                rhs * self
            }
        }
    };
}

/// Implements the `approx` comparison traits for a type exposing its
/// coefficients through a `to_array` method.
macro_rules! impl_approx_eq_by_components {
    ($t:ty) => {
        impl<T: $crate::num::Float> ::approx::AbsDiffEq for $t {
            type Epsilon = T;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<T: $crate::num::Float> ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}

/// Marks a `#[repr(C)]` struct whose fields are all of type `T` as plain
/// old data.
macro_rules! impl_pod {
    ($t:ident) => {
        // SAFETY: `$t<T>` is `#[repr(C)]` with only `T: Pod` fields, so it
        // has no padding and every bit pattern is valid.
        unsafe impl<T: $crate::num::Float> ::bytemuck::Zeroable for $t<T> {}
        // SAFETY: See above.
        unsafe impl<T: $crate::num::Float> ::bytemuck::Pod for $t<T> {}
    };
}

/// Implements the coefficient-wise vector space operations (addition,
/// subtraction, negation and scaling) for a struct whose fields are all of
/// type `T`.
macro_rules! impl_linear_ops {
    ($t:ident { $($field:ident),+ }) => {
        impl_binop!(Add, add, $t<T>, $t<T>, $t<T>, |a, b| {
            $t { $($field: a.$field + b.$field),+ }
        });

        impl_binop!(Sub, sub, $t<T>, $t<T>, $t<T>, |a, b| {
            $t { $($field: a.$field - b.$field),+ }
        });

        impl_binop!(Mul, mul, $t<T>, T, $t<T>, |a, f| {
            let f = *f;
            $t { $($field: a.$field * f),+ }
        });

        impl_binop!(Div, div, $t<T>, T, $t<T>, |a, f| {
            let f = *f;
            $t { $($field: a.$field / f),+ }
        });

        impl_unary_op!(Neg, neg, $t<T>, $t<T>, |a| {
            $t { $($field: -a.$field),+ }
        });

        impl_binop_assign!(AddAssign, add_assign, $t<T>, $t<T>, |a, b| {
            $(a.$field = a.$field + b.$field;)+
        });

        impl_binop_assign!(SubAssign, sub_assign, $t<T>, $t<T>, |a, b| {
            $(a.$field = a.$field - b.$field;)+
        });

        impl_binop_assign!(MulAssign, mul_assign, $t<T>, T, |a, f| {
            let f = *f;
            $(a.$field = a.$field * f;)+
        });

        impl_binop_assign!(DivAssign, div_assign, $t<T>, T, |a, f| {
            let f = *f;
            $(a.$field = a.$field / f;)+
        });

        impl_scalar_lhs_mul!($t);

        impl<T: $crate::num::Float> $t<T> {
            /// Returns the coefficients in declaration order.
            #[inline]
            pub fn to_array(&self) -> [T; impl_linear_ops!(@count $($field)+)] {
                [$(self.$field),+]
            }
        }

        impl_approx_eq_by_components!($t<T>);
        impl_pod!($t);
    };
    (@count $($field:ident)+) => {
        0 $(+ impl_linear_ops!(@one $field))+
    };
    (@one $field:ident) => {
        1
    };
}
