//! General multivectors of 3D projective geometric algebra.
//!
//! [`Mvec3`] stores all 16 coefficients and implements the full products
//! through hand-expanded structure-constant tables for the metric
//! `e0² = 0`, `e1² = e2² = e3² = 1`. It is the slow, general fallback for
//! expressions the specialized flat, rotor and motor types do not cover.
//!
//! The products map onto operators as follows:
//!
//! | Product     | Operator | Method                                 |
//! |-------------|----------|----------------------------------------|
//! | Geometric   | `a * b`  | [`Mvec3::geometric_product`]           |
//! | Outer       | `a ^ b`  | [`Mvec3::outer_product`] (meet)        |
//! | Regressive  | `a & b`  | [`Mvec3::regressive_product`] (join)   |
//! | Inner       | `a | b`  | [`Mvec3::inner_product`]               |

use crate::{
    flat::{Line3, Plane3, Point3},
    motor::Motor3,
    num::Float,
    rotor::Rotor3,
    vector::Vec3,
};
use std::ops::{Index, IndexMut};

/// The basis blades of the algebra, in storage order.
#[repr(usize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Basis {
    S = 0,
    E0,
    E1,
    E2,
    E3,
    E01,
    E02,
    E03,
    E12,
    E31,
    E23,
    E021,
    E013,
    E032,
    E123,
    E0123,
}

impl Basis {
    pub const ALL: [Self; 16] = [
        Self::S,
        Self::E0,
        Self::E1,
        Self::E2,
        Self::E3,
        Self::E01,
        Self::E02,
        Self::E03,
        Self::E12,
        Self::E31,
        Self::E23,
        Self::E021,
        Self::E013,
        Self::E032,
        Self::E123,
        Self::E0123,
    ];

    /// The grade (number of basis vectors) of the blade.
    pub const fn grade(self) -> usize {
        match self {
            Self::S => 0,
            Self::E0 | Self::E1 | Self::E2 | Self::E3 => 1,
            Self::E01 | Self::E02 | Self::E03 | Self::E12 | Self::E31 | Self::E23 => 2,
            Self::E021 | Self::E013 | Self::E032 | Self::E123 => 3,
            Self::E0123 => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::S => "1",
            Self::E0 => "e0",
            Self::E1 => "e1",
            Self::E2 => "e2",
            Self::E3 => "e3",
            Self::E01 => "e01",
            Self::E02 => "e02",
            Self::E03 => "e03",
            Self::E12 => "e12",
            Self::E31 => "e31",
            Self::E23 => "e23",
            Self::E021 => "e021",
            Self::E013 => "e013",
            Self::E032 => "e032",
            Self::E123 => "e123",
            Self::E0123 => "e0123",
        }
    }
}

/// A general multivector with one coefficient per [`Basis`] blade.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mvec3<T>([T; 16]);

impl<T: Float> Mvec3<T> {
    pub const ZERO: Self = Self([T::ZERO; 16]);
    pub const ONE: Self = Self::blade(Basis::S);
    /// The unit pseudoscalar `e0123`.
    pub const PSEUDOSCALAR: Self = Self::blade(Basis::E0123);
    /// The plane at infinity, with the same orientation as
    /// [`Plane3::VANISHING`].
    pub const INF_PLANE: Self = Self::from_coefficient(T::NEG_ONE, Basis::E0);

    pub const E0: Self = Self::blade(Basis::E0);
    pub const E1: Self = Self::blade(Basis::E1);
    pub const E2: Self = Self::blade(Basis::E2);
    pub const E3: Self = Self::blade(Basis::E3);
    pub const E01: Self = Self::blade(Basis::E01);
    pub const E02: Self = Self::blade(Basis::E02);
    pub const E03: Self = Self::blade(Basis::E03);
    pub const E12: Self = Self::blade(Basis::E12);
    pub const E31: Self = Self::blade(Basis::E31);
    pub const E23: Self = Self::blade(Basis::E23);
    pub const E021: Self = Self::blade(Basis::E021);
    pub const E013: Self = Self::blade(Basis::E013);
    pub const E032: Self = Self::blade(Basis::E032);
    pub const E123: Self = Self::blade(Basis::E123);
    pub const E0123: Self = Self::blade(Basis::E0123);

    #[inline]
    pub const fn new(coefficients: [T; 16]) -> Self {
        Self(coefficients)
    }

    /// The multivector with a single nonzero coefficient.
    #[inline]
    pub const fn from_coefficient(value: T, basis: Basis) -> Self {
        let mut coefficients = [T::ZERO; 16];
        coefficients[basis as usize] = value;
        Self(coefficients)
    }

    #[inline]
    pub const fn blade(basis: Basis) -> Self {
        Self::from_coefficient(T::ONE, basis)
    }

    /// Returns the coefficients in [`Basis`] order.
    #[inline]
    pub fn to_array(&self) -> [T; 16] {
        self.0
    }

    /// The plane `a·x + b·y + c·z = d`.
    #[inline]
    pub fn plane(a: T, b: T, c: T, d: T) -> Self {
        Self::from(Plane3::plane(Vec3::new(a, b, c), d))
    }

    /// The vanishing plane `plane(0, 0, 0, d)`.
    #[inline]
    pub fn vanishing_plane(d: T) -> Self {
        Self::from(Plane3::vanishing_plane(d))
    }

    /// The line through the origin with the given direction.
    #[inline]
    pub fn line(direction: Vec3<T>) -> Self {
        Self::line_plucker(direction, Vec3::ZERO)
    }

    /// The line through `point` with the given direction.
    #[inline]
    pub fn line_at(direction: Vec3<T>, point: Vec3<T>) -> Self {
        Self::from(Line3::line(direction, point))
    }

    #[inline]
    pub fn line_plucker(direction: Vec3<T>, moment: Vec3<T>) -> Self {
        Self::from(Line3::from_plucker(direction, moment))
    }

    #[inline]
    pub fn vanishing_line(direction: Vec3<T>) -> Self {
        Self::from(Line3::vanishing_line(direction))
    }

    #[inline]
    pub fn point(x: T, y: T, z: T) -> Self {
        Self::from(Point3::point(x, y, z))
    }

    #[inline]
    pub fn direction(direction: Vec3<T>) -> Self {
        Self::from(Point3::direction(direction))
    }

    /// Keeps only the part of the given grade. Grades above 4 give zero.
    pub fn grade(&self, grade: usize) -> Self {
        let mut result = Self::ZERO;
        for basis in Basis::ALL {
            if basis.grade() == grade {
                result[basis] = self[basis];
            }
        }
        result
    }

    /// The Poincaré dual, mapping each blade to its complement.
    #[inline]
    pub fn hdual(&self) -> Self {
        let mut coefficients = self.0;
        coefficients.reverse();
        Self(coefficients)
    }

    /// The reverse, negating grades 2 and 3.
    #[inline]
    pub fn rev(&self) -> Self {
        self.negate_range(Basis::E01, Basis::E123)
    }

    /// The Clifford conjugate, negating grades 1 and 2.
    #[inline]
    pub fn conj(&self) -> Self {
        self.negate_range(Basis::E0, Basis::E23)
    }

    fn negate_range(&self, first: Basis, last: Basis) -> Self {
        let mut result = *self;
        for coefficient in &mut result.0[first as usize..=last as usize] {
            *coefficient = -*coefficient;
        }
        result
    }

    /// The Euclidean norm squared, the scalar part of `self * self.rev()`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.geometric_product(&self.rev())[Basis::S]
    }

    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// The ideal norm squared, the norm of the dual.
    #[inline]
    pub fn inorm_squared(&self) -> T {
        self.hdual().norm_squared()
    }

    #[inline]
    pub fn inorm(&self) -> T {
        self.inorm_squared().sqrt()
    }

    /// Scales a plane to a unit normal.
    #[inline]
    pub fn plane_normalize(&self) -> Self {
        self / Vec3::new(self[Basis::E1], self[Basis::E2], self[Basis::E3]).length()
    }

    /// Scales a line to a unit direction.
    #[inline]
    pub fn line_normalize(&self) -> Self {
        self / Vec3::new(self[Basis::E23], self[Basis::E31], self[Basis::E12]).length()
    }

    /// Scales a vanishing line to a unit moment.
    #[inline]
    pub fn vanishing_line_normalize(&self) -> Self {
        self / Vec3::new(self[Basis::E01], self[Basis::E02], self[Basis::E03]).length()
    }

    /// Scales a finite point to unit weight.
    #[inline]
    pub fn point_normalize(&self) -> Self {
        self / self[Basis::E123]
    }

    /// Linearly interpolates the coefficients.
    #[inline]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        self + (other - self) * t
    }

    pub fn geometric_product(&self, other: &Self) -> Self {
        let (a, b) = (&self.0, &other.0);
        Self([
            a[0] * b[0] + a[2] * b[2] + a[3] * b[3] + a[4] * b[4] - a[8] * b[8] - a[9] * b[9]
                - a[10] * b[10] - a[14] * b[14],
            a[0] * b[1] + a[1] * b[0] - a[2] * b[5] - a[3] * b[6] - a[4] * b[7] + a[5] * b[2]
                + a[6] * b[3] + a[7] * b[4] + a[8] * b[11] + a[9] * b[12] + a[10] * b[13]
                + a[11] * b[8] + a[12] * b[9] + a[13] * b[10] + a[14] * b[15] - a[15] * b[14],
            a[0] * b[2] + a[2] * b[0] - a[3] * b[8] + a[4] * b[9] + a[8] * b[3] - a[9] * b[4]
                - a[10] * b[14] - a[14] * b[10],
            a[0] * b[3] + a[2] * b[8] + a[3] * b[0] - a[4] * b[10] - a[8] * b[2] - a[9] * b[14]
                + a[10] * b[4] - a[14] * b[9],
            a[0] * b[4] - a[2] * b[9] + a[3] * b[10] + a[4] * b[0] - a[8] * b[14] + a[9] * b[2]
                - a[10] * b[3] - a[14] * b[8],
            a[0] * b[5] + a[1] * b[2] - a[2] * b[1] - a[3] * b[11] + a[4] * b[12] + a[5] * b[0]
                - a[6] * b[8] + a[7] * b[9] + a[8] * b[6] - a[9] * b[7] - a[10] * b[15]
                - a[11] * b[3] + a[12] * b[4] + a[13] * b[14] - a[14] * b[13] - a[15] * b[10],
            a[0] * b[6] + a[1] * b[3] + a[2] * b[11] - a[3] * b[1] - a[4] * b[13] + a[5] * b[8]
                + a[6] * b[0] - a[7] * b[10] - a[8] * b[5] - a[9] * b[15] + a[10] * b[7]
                + a[11] * b[2] + a[12] * b[14] - a[13] * b[4] - a[14] * b[12] - a[15] * b[9],
            a[0] * b[7] + a[1] * b[4] - a[2] * b[12] + a[3] * b[13] - a[4] * b[1] - a[5] * b[9]
                + a[6] * b[10] + a[7] * b[0] - a[8] * b[15] + a[9] * b[5] - a[10] * b[6]
                + a[11] * b[14] - a[12] * b[2] + a[13] * b[3] - a[14] * b[11] - a[15] * b[8],
            a[0] * b[8] + a[2] * b[3] - a[3] * b[2] + a[4] * b[14] + a[8] * b[0] + a[9] * b[10]
                - a[10] * b[9] + a[14] * b[4],
            a[0] * b[9] - a[2] * b[4] + a[3] * b[14] + a[4] * b[2] - a[8] * b[10] + a[9] * b[0]
                + a[10] * b[8] + a[14] * b[3],
            a[0] * b[10] + a[2] * b[14] + a[3] * b[4] - a[4] * b[3] + a[8] * b[9] - a[9] * b[8]
                + a[10] * b[0] + a[14] * b[2],
            a[0] * b[11] - a[1] * b[8] + a[2] * b[6] - a[3] * b[5] + a[4] * b[15] - a[5] * b[3]
                + a[6] * b[2] - a[7] * b[14] - a[8] * b[1] + a[9] * b[13] - a[10] * b[12]
                + a[11] * b[0] + a[12] * b[10] - a[13] * b[9] + a[14] * b[7] - a[15] * b[4],
            a[0] * b[12] - a[1] * b[9] - a[2] * b[7] + a[3] * b[15] + a[4] * b[5] + a[5] * b[4]
                - a[6] * b[14] - a[7] * b[2] - a[8] * b[13] - a[9] * b[1] + a[10] * b[11]
                - a[11] * b[10] + a[12] * b[0] + a[13] * b[8] + a[14] * b[6] - a[15] * b[3],
            a[0] * b[13] - a[1] * b[10] + a[2] * b[15] + a[3] * b[7] - a[4] * b[6] - a[5] * b[14]
                - a[6] * b[4] + a[7] * b[3] + a[8] * b[12] - a[9] * b[11] - a[10] * b[1]
                + a[11] * b[9] - a[12] * b[8] + a[13] * b[0] + a[14] * b[5] - a[15] * b[2],
            a[0] * b[14] + a[2] * b[10] + a[3] * b[9] + a[4] * b[8] + a[8] * b[4] + a[9] * b[3]
                + a[10] * b[2] + a[14] * b[0],
            a[0] * b[15] + a[1] * b[14] + a[2] * b[13] + a[3] * b[12] + a[4] * b[11] + a[5] * b[10]
                + a[6] * b[9] + a[7] * b[8] + a[8] * b[7] + a[9] * b[6] + a[10] * b[5]
                - a[11] * b[4] - a[12] * b[3] - a[13] * b[2] - a[14] * b[1] + a[15] * b[0],
        ])
    }

    /// The outer (wedge) product. Between flats this is the meet.
    pub fn outer_product(&self, other: &Self) -> Self {
        let (a, b) = (&self.0, &other.0);
        Self([
            a[0] * b[0],
            a[0] * b[1] + a[1] * b[0],
            a[0] * b[2] + a[2] * b[0],
            a[0] * b[3] + a[3] * b[0],
            a[0] * b[4] + a[4] * b[0],
            a[0] * b[5] + a[1] * b[2] - a[2] * b[1] + a[5] * b[0],
            a[0] * b[6] + a[1] * b[3] - a[3] * b[1] + a[6] * b[0],
            a[0] * b[7] + a[1] * b[4] - a[4] * b[1] + a[7] * b[0],
            a[0] * b[8] + a[2] * b[3] - a[3] * b[2] + a[8] * b[0],
            a[0] * b[9] - a[2] * b[4] + a[4] * b[2] + a[9] * b[0],
            a[0] * b[10] + a[3] * b[4] - a[4] * b[3] + a[10] * b[0],
            a[0] * b[11] - a[1] * b[8] + a[2] * b[6] - a[3] * b[5] - a[5] * b[3] + a[6] * b[2]
                - a[8] * b[1] + a[11] * b[0],
            a[0] * b[12] - a[1] * b[9] - a[2] * b[7] + a[4] * b[5] + a[5] * b[4] - a[7] * b[2]
                - a[9] * b[1] + a[12] * b[0],
            a[0] * b[13] - a[1] * b[10] + a[3] * b[7] - a[4] * b[6] - a[6] * b[4] + a[7] * b[3]
                - a[10] * b[1] + a[13] * b[0],
            a[0] * b[14] + a[2] * b[10] + a[3] * b[9] + a[4] * b[8] + a[8] * b[4] + a[9] * b[3]
                + a[10] * b[2] + a[14] * b[0],
            a[0] * b[15] + a[1] * b[14] + a[2] * b[13] + a[3] * b[12] + a[4] * b[11] + a[5] * b[10]
                + a[6] * b[9] + a[7] * b[8] + a[8] * b[7] + a[9] * b[6] + a[10] * b[5]
                - a[11] * b[4] - a[12] * b[3] - a[13] * b[2] - a[14] * b[1] + a[15] * b[0],
        ])
    }

    /// The regressive (vee) product. Between flats this is the join.
    pub fn regressive_product(&self, other: &Self) -> Self {
        let (a, b) = (&self.0, &other.0);
        Self([
            a[0] * b[15] - a[1] * b[14] - a[2] * b[13] - a[3] * b[12] - a[4] * b[11] + a[5] * b[10]
                + a[6] * b[9] + a[7] * b[8] + a[8] * b[7] + a[9] * b[6] + a[10] * b[5]
                + a[11] * b[4] + a[12] * b[3] + a[13] * b[2] + a[14] * b[1] + a[15] * b[0],
            a[1] * b[15] - a[5] * b[13] - a[6] * b[12] - a[7] * b[11] - a[11] * b[7] - a[12] * b[6]
                - a[13] * b[5] + a[15] * b[1],
            a[2] * b[15] + a[5] * b[14] - a[8] * b[12] + a[9] * b[11] + a[11] * b[9] - a[12] * b[8]
                + a[14] * b[5] + a[15] * b[2],
            a[3] * b[15] + a[6] * b[14] + a[8] * b[13] - a[10] * b[11] - a[11] * b[10]
                + a[13] * b[8] + a[14] * b[6] + a[15] * b[3],
            a[4] * b[15] + a[7] * b[14] - a[9] * b[13] + a[10] * b[12] + a[12] * b[10]
                - a[13] * b[9] + a[14] * b[7] + a[15] * b[4],
            a[5] * b[15] + a[11] * b[12] - a[12] * b[11] + a[15] * b[5],
            a[6] * b[15] - a[11] * b[13] + a[13] * b[11] + a[15] * b[6],
            a[7] * b[15] + a[12] * b[13] - a[13] * b[12] + a[15] * b[7],
            a[8] * b[15] + a[11] * b[14] - a[14] * b[11] + a[15] * b[8],
            a[9] * b[15] + a[12] * b[14] - a[14] * b[12] + a[15] * b[9],
            a[10] * b[15] + a[13] * b[14] - a[14] * b[13] + a[15] * b[10],
            a[11] * b[15] + a[15] * b[11],
            a[12] * b[15] + a[15] * b[12],
            a[13] * b[15] + a[15] * b[13],
            a[14] * b[15] + a[15] * b[14],
            a[15] * b[15],
        ])
    }

    /// The symmetric inner product, keeping the grade `|i - j|` part of the
    /// geometric product of each pair of blades.
    pub fn inner_product(&self, other: &Self) -> Self {
        let (a, b) = (&self.0, &other.0);
        Self([
            a[0] * b[0] + a[2] * b[2] + a[3] * b[3] + a[4] * b[4] - a[8] * b[8] - a[9] * b[9]
                - a[10] * b[10] - a[14] * b[14],
            a[0] * b[1] + a[1] * b[0] - a[2] * b[5] - a[3] * b[6] - a[4] * b[7] + a[5] * b[2]
                + a[6] * b[3] + a[7] * b[4] + a[8] * b[11] + a[9] * b[12] + a[10] * b[13]
                + a[11] * b[8] + a[12] * b[9] + a[13] * b[10] + a[14] * b[15] - a[15] * b[14],
            a[0] * b[2] + a[2] * b[0] - a[3] * b[8] + a[4] * b[9] + a[8] * b[3] - a[9] * b[4]
                - a[10] * b[14] - a[14] * b[10],
            a[0] * b[3] + a[2] * b[8] + a[3] * b[0] - a[4] * b[10] - a[8] * b[2] - a[9] * b[14]
                + a[10] * b[4] - a[14] * b[9],
            a[0] * b[4] - a[2] * b[9] + a[3] * b[10] + a[4] * b[0] - a[8] * b[14] + a[9] * b[2]
                - a[10] * b[3] - a[14] * b[8],
            a[0] * b[5] - a[3] * b[11] + a[4] * b[12] + a[5] * b[0] - a[10] * b[15] - a[11] * b[3]
                + a[12] * b[4] - a[15] * b[10],
            a[0] * b[6] + a[2] * b[11] - a[4] * b[13] + a[6] * b[0] - a[9] * b[15] + a[11] * b[2]
                - a[13] * b[4] - a[15] * b[9],
            a[0] * b[7] - a[2] * b[12] + a[3] * b[13] + a[7] * b[0] - a[8] * b[15] - a[12] * b[2]
                + a[13] * b[3] - a[15] * b[8],
            a[0] * b[8] + a[4] * b[14] + a[8] * b[0] + a[14] * b[4],
            a[0] * b[9] + a[3] * b[14] + a[9] * b[0] + a[14] * b[3],
            a[0] * b[10] + a[2] * b[14] + a[10] * b[0] + a[14] * b[2],
            a[0] * b[11] + a[4] * b[15] + a[11] * b[0] - a[15] * b[4],
            a[0] * b[12] + a[3] * b[15] + a[12] * b[0] - a[15] * b[3],
            a[0] * b[13] + a[2] * b[15] + a[13] * b[0] - a[15] * b[2],
            a[0] * b[14] + a[14] * b[0],
            a[0] * b[15] + a[15] * b[0],
        ])
    }
}

impl<T: Float> Default for Mvec3<T> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> Index<Basis> for Mvec3<T> {
    type Output = T;

    #[inline]
    fn index(&self, basis: Basis) -> &T {
        &self.0[basis as usize]
    }
}

impl<T> IndexMut<Basis> for Mvec3<T> {
    #[inline]
    fn index_mut(&mut self, basis: Basis) -> &mut T {
        &mut self.0[basis as usize]
    }
}

impl_binop!(Add, add, Mvec3<T>, Mvec3<T>, Mvec3<T>, |a, b| {
    Mvec3(std::array::from_fn(|i| a.0[i] + b.0[i]))
});

impl_binop!(Sub, sub, Mvec3<T>, Mvec3<T>, Mvec3<T>, |a, b| {
    Mvec3(std::array::from_fn(|i| a.0[i] - b.0[i]))
});

impl_binop!(Mul, mul, Mvec3<T>, T, Mvec3<T>, |a, f| {
    Mvec3(a.0.map(|coefficient| coefficient * *f))
});

impl_binop!(Div, div, Mvec3<T>, T, Mvec3<T>, |a, f| {
    Mvec3(a.0.map(|coefficient| coefficient / *f))
});

impl_binop!(Add, add, Mvec3<T>, T, Mvec3<T>, |a, f| {
    let mut result = *a;
    result[Basis::S] = result[Basis::S] + *f;
    result
});

impl_binop!(Sub, sub, Mvec3<T>, T, Mvec3<T>, |a, f| {
    let mut result = *a;
    result[Basis::S] = result[Basis::S] - *f;
    result
});

impl_unary_op!(Neg, neg, Mvec3<T>, Mvec3<T>, |a| { Mvec3(a.0.map(|coefficient| -coefficient)) });

impl_binop!(Mul, mul, Mvec3<T>, Mvec3<T>, Mvec3<T>, |a, b| { a.geometric_product(b) });
impl_binop!(BitXor, bitxor, Mvec3<T>, Mvec3<T>, Mvec3<T>, |a, b| { a.outer_product(b) });
impl_binop!(BitAnd, bitand, Mvec3<T>, Mvec3<T>, Mvec3<T>, |a, b| { a.regressive_product(b) });
impl_binop!(BitOr, bitor, Mvec3<T>, Mvec3<T>, Mvec3<T>, |a, b| { a.inner_product(b) });

impl_binop_assign!(AddAssign, add_assign, Mvec3<T>, Mvec3<T>, |a, b| {
    *a = &*a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Mvec3<T>, Mvec3<T>, |a, b| {
    *a = &*a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Mvec3<T>, T, |a, f| {
    *a = &*a * f;
});

impl_binop_assign!(DivAssign, div_assign, Mvec3<T>, T, |a, f| {
    *a = &*a / f;
});

impl_scalar_lhs_mul!(Mvec3);

macro_rules! impl_scalar_lhs_add_sub {
    ($f:ty) => {
        impl std::ops::Add<Mvec3<$f>> for $f {
            type Output = Mvec3<$f>;

            #[inline]
            fn add(self, rhs: Mvec3<$f>) -> Self::Output {
                rhs + self
            }
        }

        impl std::ops::Sub<Mvec3<$f>> for $f {
            type Output = Mvec3<$f>;

            #[inline]
            fn sub(self, rhs: Mvec3<$f>) -> Self::Output {
                -rhs + self
            }
        }
    };
}

impl_scalar_lhs_add_sub!(f32);
impl_scalar_lhs_add_sub!(f64);

impl_approx_eq_by_components!(Mvec3<T>);
impl_pod!(Mvec3);

impl<T: Float> From<Plane3<T>> for Mvec3<T> {
    fn from(p: Plane3<T>) -> Self {
        let mut m = Self::ZERO;
        m[Basis::E0] = p.e0;
        m[Basis::E1] = p.e1;
        m[Basis::E2] = p.e2;
        m[Basis::E3] = p.e3;
        m
    }
}

impl<T: Float> From<Line3<T>> for Mvec3<T> {
    fn from(l: Line3<T>) -> Self {
        let mut m = Self::ZERO;
        m[Basis::E01] = l.e01;
        m[Basis::E02] = l.e02;
        m[Basis::E03] = l.e03;
        m[Basis::E12] = l.e12;
        m[Basis::E31] = l.e31;
        m[Basis::E23] = l.e23;
        m
    }
}

impl<T: Float> From<Point3<T>> for Mvec3<T> {
    fn from(x: Point3<T>) -> Self {
        let mut m = Self::ZERO;
        m[Basis::E021] = x.e021;
        m[Basis::E013] = x.e013;
        m[Basis::E032] = x.e032;
        m[Basis::E123] = x.e123;
        m
    }
}

impl<T: Float> From<Rotor3<T>> for Mvec3<T> {
    fn from(r: Rotor3<T>) -> Self {
        Self::from(Motor3::from_rotor(r))
    }
}

impl<T: Float> From<Motor3<T>> for Mvec3<T> {
    fn from(m: Motor3<T>) -> Self {
        let mut v = Self::ZERO;
        v[Basis::S] = m.s;
        v[Basis::E01] = m.e01;
        v[Basis::E02] = m.e02;
        v[Basis::E03] = m.e03;
        v[Basis::E12] = m.e12;
        v[Basis::E31] = m.e31;
        v[Basis::E23] = m.e23;
        v[Basis::E0123] = m.e0123;
        v
    }
}

impl<T: Float> From<Mvec3<T>> for Plane3<T> {
    fn from(m: Mvec3<T>) -> Self {
        Plane3::new(m[Basis::E1], m[Basis::E2], m[Basis::E3], m[Basis::E0])
    }
}

impl<T: Float> From<Mvec3<T>> for Line3<T> {
    fn from(m: Mvec3<T>) -> Self {
        Line3::new(
            m[Basis::E23],
            m[Basis::E31],
            m[Basis::E12],
            m[Basis::E01],
            m[Basis::E02],
            m[Basis::E03],
        )
    }
}

impl<T: Float> From<Mvec3<T>> for Point3<T> {
    fn from(m: Mvec3<T>) -> Self {
        Point3::new(m[Basis::E032], m[Basis::E013], m[Basis::E021], m[Basis::E123])
    }
}

impl<T: Float> From<Mvec3<T>> for Rotor3<T> {
    fn from(m: Mvec3<T>) -> Self {
        Rotor3::new(m[Basis::S], m[Basis::E23], m[Basis::E31], m[Basis::E12])
    }
}

impl<T: Float> From<Mvec3<T>> for Motor3<T> {
    fn from(m: Mvec3<T>) -> Self {
        Motor3::new(
            m[Basis::S],
            m[Basis::E23],
            m[Basis::E31],
            m[Basis::E12],
            m[Basis::E0123],
            m[Basis::E01],
            m[Basis::E02],
            m[Basis::E03],
        )
    }
}

impl<T: Float> std::fmt::Display for Mvec3<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut wrote_term = false;
        for basis in Basis::ALL {
            let coefficient = self[basis];
            if coefficient == T::ZERO {
                continue;
            }
            if wrote_term {
                write!(f, " + ")?;
            }
            match basis {
                Basis::S => write!(f, "{coefficient}")?,
                _ => write!(f, "{coefficient}{}", basis.name())?,
            }
            wrote_term = true;
        }
        if !wrote_term {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::flat::{Inner, Join, Meet};
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-9;

    fn general() -> Mvec3<f64> {
        Mvec3::new([
            1.0, -2.0, 0.5, 3.0, -1.5, 2.0, 0.25, -3.0, 1.0, 4.0, -0.5, 2.5, -1.0, 0.75, 3.5, -2.0,
        ])
    }

    #[test]
    fn basis_vectors_square_to_metric() {
        assert_eq!(Mvec3::<f64>::E0 * Mvec3::E0, Mvec3::ZERO);
        assert_eq!(Mvec3::<f64>::E1 * Mvec3::E1, Mvec3::ONE);
        assert_eq!(Mvec3::<f64>::E2 * Mvec3::E2, Mvec3::ONE);
        assert_eq!(Mvec3::<f64>::E3 * Mvec3::E3, Mvec3::ONE);
    }

    #[test]
    fn basis_vector_products_give_named_blades() {
        type M = Mvec3<f64>;
        assert_eq!(M::E1 * M::E2, M::E12);
        assert_eq!(M::E2 * M::E1, -M::E12);
        assert_eq!(M::E3 * M::E1, M::E31);
        assert_eq!(M::E1 * M::E2 * M::E3, M::E123);
        assert_eq!(M::E0 * M::E3 * M::E2, M::E032);
        assert_eq!(M::E0 * M::E1 * M::E2 * M::E3, M::PSEUDOSCALAR);
        assert_eq!(M::E0 ^ M::E1, M::E01);
        assert_eq!(M::E1 ^ M::E1, M::ZERO);
    }

    #[test]
    fn scalar_and_pseudoscalar_are_product_identities() {
        let x = general();
        assert_eq!(x * Mvec3::ONE, x);
        assert_eq!(Mvec3::ONE ^ x, x);
        assert_eq!(x & Mvec3::PSEUDOSCALAR, x);
        assert_eq!(Mvec3::PSEUDOSCALAR & x, x);
        assert_eq!(x | Mvec3::ONE, x);
    }

    #[test]
    fn grades_sum_to_multivector() {
        let x = general();
        let sum = (0..=4).fold(Mvec3::ZERO, |sum, grade| sum + x.grade(grade));
        assert_eq!(sum, x);
        assert_eq!(x.grade(4), Mvec3::from_coefficient(-2.0, Basis::E0123));
        assert_eq!(x.grade(5), Mvec3::ZERO);
        assert_eq!(Basis::E013.grade(), 3);
    }

    #[test]
    fn dual_reverse_and_conjugate_are_involutions() {
        let x = general();
        assert_eq!(x.hdual().hdual(), x);
        assert_eq!(x.rev().rev(), x);
        assert_eq!(x.conj().conj(), x);
        assert_eq!(Mvec3::<f64>::E0.hdual(), Mvec3::E123);
        assert_eq!(Mvec3::<f64>::ONE.hdual(), Mvec3::PSEUDOSCALAR);
        assert_eq!(x.rev()[Basis::E12], -x[Basis::E12]);
        assert_eq!(x.rev()[Basis::E1], x[Basis::E1]);
        assert_eq!(x.conj()[Basis::E1], -x[Basis::E1]);
        assert_eq!(x.conj()[Basis::E123], x[Basis::E123]);
    }

    #[test]
    fn norms_measure_weights() {
        let x = Mvec3::point(1.0_f64, 2.0, 3.0);
        assert_abs_diff_eq!(x.norm_squared(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(x.inorm_squared(), 14.0, epsilon = EPSILON);
        let p = Mvec3::plane(1.0_f64, 2.0, 2.0, 5.0);
        assert_abs_diff_eq!(p.norm(), 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(p.inorm(), 5.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizers_scale_to_unit_weight() {
        let p = Mvec3::plane(0.0_f64, 3.0, 4.0, 10.0).plane_normalize();
        assert_abs_diff_eq!(p, Mvec3::plane(0.0, 0.6, 0.8, 2.0), epsilon = EPSILON);

        let l = Mvec3::line_at(Vec3::new(1.0_f64, 2.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let normalized = l.line_normalize();
        assert_abs_diff_eq!(normalized, l / 5.0_f64.sqrt(), epsilon = EPSILON);
        assert_abs_diff_eq!(normalized.norm(), 1.0, epsilon = EPSILON);

        let v = Mvec3::vanishing_line(Vec3::new(0.0_f64, 3.0, -4.0)).vanishing_line_normalize();
        assert_abs_diff_eq!(v, Mvec3::vanishing_line(Vec3::new(0.0, 0.6, -0.8)), epsilon = EPSILON);

        let x = (Mvec3::point(1.0_f64, -2.0, 3.0) * 2.0).point_normalize();
        assert_abs_diff_eq!(x, Mvec3::point(1.0, -2.0, 3.0), epsilon = EPSILON);
    }

    #[test]
    fn constructors_match_flat_types() {
        assert_eq!(Mvec3::plane(1.0_f64, 2.0, 3.0, 4.0)[Basis::E0], -4.0);
        assert_eq!(Mvec3::vanishing_plane(4.0_f64), Mvec3::plane(0.0, 0.0, 0.0, 4.0));
        assert_eq!(Mvec3::<f64>::vanishing_plane(1.0), Mvec3::INF_PLANE);
        assert_eq!(Mvec3::from(Plane3::<f64>::VANISHING), Mvec3::INF_PLANE);
        assert_eq!(
            Mvec3::line(Vec3::new(1.0_f64, 2.0, 3.0)),
            Mvec3::from(Line3::new(1.0, 2.0, 3.0, 0.0, 0.0, 0.0))
        );
        assert_eq!(
            Mvec3::line_plucker(Vec3::new(1.0_f64, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
            Mvec3::line_at(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0))
        );
        assert_eq!(
            Mvec3::direction(Vec3::new(1.0_f64, 2.0, 3.0)),
            Mvec3::point(1.0, 2.0, 3.0) - Mvec3::E123
        );
    }

    #[test]
    fn products_of_flats_match_flat_operations() {
        let a = Plane3::plane(Vec3::new(1.0_f64, -2.0, 3.0), 5.0);
        let b = Plane3::plane(Vec3::new(4.0, 2.0, -1.0), -2.0);
        let x = Point3::point(2.0_f64, 5.0, -1.0);
        let y = Point3::point(-1.0, 0.0, 4.0);

        let meet = Mvec3::from(a) ^ Mvec3::from(b);
        assert_abs_diff_eq!(Line3::from(meet), a.meet(&b), epsilon = EPSILON);
        let join = Mvec3::from(x) & Mvec3::from(y);
        assert_abs_diff_eq!(Line3::from(join), x.join(&y), epsilon = EPSILON);
        let inner = Mvec3::from(a) | Mvec3::from(x);
        assert_abs_diff_eq!(Line3::from(inner), a.inner(&x), epsilon = EPSILON);
        assert_abs_diff_eq!(
            Mvec3::from(a) * Mvec3::from(b),
            Mvec3::from(a * b),
            epsilon = EPSILON
        );
    }

    #[test]
    fn geometric_product_of_motors_matches_motor_product() {
        let a = Motor3::from_axis_angle_translation(
            Vec3::new(0.6_f64, 0.0, 0.8),
            2.0,
            Vec3::new(1.0, -2.0, 0.5),
        );
        let b = Motor3::from_axis_angle_translation(Vec3::Y, -0.7, Vec3::new(0.0, 3.0, 1.0));
        assert_abs_diff_eq!(
            Motor3::from(Mvec3::from(a) * Mvec3::from(b)),
            a * b,
            epsilon = EPSILON
        );

        let x = Point3::point(0.3, -1.2, 2.0);
        let sandwich = Mvec3::from(a) * Mvec3::from(x) * Mvec3::from(a).rev();
        assert_abs_diff_eq!(Point3::from(sandwich), a.transform(&x), epsilon = EPSILON);
    }

    #[test]
    fn conversions_keep_matching_grade() {
        let r = Rotor3::new(1.0_f64, -2.0, 0.5, 3.0);
        assert_eq!(Rotor3::from(Mvec3::from(r)), r);
        let m = Motor3::new(1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
        assert_eq!(Motor3::from(Mvec3::from(m)), m);
        let x = general();
        assert_eq!(Mvec3::from(Plane3::from(x)), x.grade(1));
        assert_eq!(Mvec3::from(Line3::from(x)), x.grade(2));
        assert_eq!(Mvec3::from(Point3::from(x)), x.grade(3));
    }

    #[test]
    fn scalar_arithmetic_acts_on_scalar_part() {
        let x = general();
        assert_eq!((x + 2.0)[Basis::S], 3.0);
        assert_eq!((2.0 + x)[Basis::E1], 0.5);
        assert_eq!((x - 1.0)[Basis::S], 0.0);
        assert_eq!(2.0 - x, -x + 2.0);
        assert_eq!((x * 2.0)[Basis::E0123], -4.0);
        assert_eq!(2.0 * x, x * 2.0);
        assert_eq!((x / 2.0)[Basis::E3], -0.75);

        let mut y = x;
        y += x;
        y -= x * 0.5;
        y *= 2.0;
        y /= 3.0;
        assert_eq!(y, x);
    }

    #[test]
    fn indexing_by_basis_reads_and_writes_coefficients() {
        let mut x = Mvec3::<f32>::ZERO;
        x[Basis::E31] = 2.0;
        assert_eq!(x, Mvec3::E31 * 2.0);
        assert_eq!(x[Basis::E31], 2.0);
        assert_eq!(x.lerp(&Mvec3::ZERO, 0.5), Mvec3::E31);
    }

    #[test]
    fn display_lists_nonzero_terms() {
        let x = Mvec3::point(1.0_f64, 0.0, -2.0);
        assert_eq!(x.to_string(), "-2e021 + 1e032 + 1e123");
        assert_eq!(Mvec3::<f64>::ZERO.to_string(), "0");
    }
}
