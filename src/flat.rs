//! Flats (planes, lines and points) in their dual PGA representation,
//! together with the incidence operations between them.
//!
//! Binary operations between flats are expressed through the traits
//! [`Meet`], [`Join`], [`Inner`], [`IsOn`], [`Project`] and [`Reflect`],
//! each implemented for the type pairs where the operation yields a
//! meaningful result. Free functions with the same names are provided for
//! call sites that read better in prefix form.

mod incidence;
mod line;
mod plane;
mod point;
mod projection;
mod reflection;

pub use line::Line3;
pub use plane::Plane3;
pub use point::Point3;

use crate::num::Float;

/// Behavior shared by all flats.
pub trait Flat: Copy {
    type Scalar: Float;

    /// Squared magnitude of the Euclidean part of the flat.
    fn magnitude_squared(&self) -> Self::Scalar;

    /// The reversion of the flat.
    fn reverse(&self) -> Self;

    /// Whether every coefficient is approximately zero.
    fn is_approx_zero(&self) -> bool;
}

/// The outer product, intersecting two flats.
pub trait Meet<Rhs = Self> {
    type Output;

    fn meet(&self, rhs: &Rhs) -> Self::Output;
}

/// The regressive product, joining two flats into the smallest flat
/// containing both.
pub trait Join<Rhs = Self> {
    type Output;

    fn join(&self, rhs: &Rhs) -> Self::Output;
}

/// The metric contraction of two flats.
pub trait Inner<Rhs = Self> {
    type Output;

    fn inner(&self, rhs: &Rhs) -> Self::Output;
}

/// Approximate incidence of one flat on another.
pub trait IsOn<Rhs> {
    /// Whether `self` lies on (is contained in) `other`.
    fn is_on(&self, other: &Rhs) -> bool;
}

/// Orthogonal projection of a flat onto another flat, and the
/// corresponding rejection.
pub trait Project<Onto>: Sized {
    /// The projection scaled by the squared magnitude of `onto`, skipping
    /// the normalization.
    fn fast_project(&self, onto: &Onto) -> Self;

    /// The projection with the same weight as `self`.
    fn project(&self, onto: &Onto) -> Self;

    /// The rejection scaled by the squared magnitude of `from`.
    fn fast_reject(&self, from: &Onto) -> Self;

    /// The difference between `self` and its projection onto `from`. The
    /// result is a vanishing flat encoding the offset.
    fn reject(&self, from: &Onto) -> Self;
}

/// Reflection of a flat in another flat by the sandwich product.
pub trait Reflect<Mirror: Flat>: Sized + std::ops::Div<<Mirror as Flat>::Scalar, Output = Self> {
    /// The reflection without normalization by the squared magnitude of
    /// the mirror.
    fn fast_reflect(&self, mirror: &Mirror) -> Self;

    #[inline]
    fn reflect(&self, mirror: &Mirror) -> Self {
        self.fast_reflect(mirror) / mirror.magnitude_squared()
    }
}

#[inline]
pub fn meet<A: Meet<B>, B>(a: &A, b: &B) -> A::Output {
    a.meet(b)
}

#[inline]
pub fn join<A: Join<B>, B>(a: &A, b: &B) -> A::Output {
    a.join(b)
}

#[inline]
pub fn inner<A: Inner<B>, B>(a: &A, b: &B) -> A::Output {
    a.inner(b)
}

#[inline]
pub fn is_on<A: IsOn<B>, B>(a: &A, b: &B) -> bool {
    a.is_on(b)
}

#[inline]
pub fn project<A: Project<B>, B>(a: &A, onto: &B) -> A {
    a.project(onto)
}

#[inline]
pub fn fast_project<A: Project<B>, B>(a: &A, onto: &B) -> A {
    a.fast_project(onto)
}

#[inline]
pub fn reject<A: Project<B>, B>(a: &A, from: &B) -> A {
    a.reject(from)
}

#[inline]
pub fn fast_reject<A: Project<B>, B>(a: &A, from: &B) -> A {
    a.fast_reject(from)
}

#[inline]
pub fn reflect<A: Reflect<B>, B: Flat>(a: &A, mirror: &B) -> A {
    a.reflect(mirror)
}

#[inline]
pub fn fast_reflect<A: Reflect<B>, B: Flat>(a: &A, mirror: &B) -> A {
    a.fast_reflect(mirror)
}

/// The point where three planes intersect, `(a ∧ b) ∧ c`.
#[inline]
pub fn meet3<T: Float>(a: &Plane3<T>, b: &Plane3<T>, c: &Plane3<T>) -> Point3<T> {
    a.meet(b).meet(c)
}

/// The plane through three points, `(a ∨ b) ∨ c`.
#[inline]
pub fn join3<T: Float>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> Plane3<T> {
    a.join(b).join(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vec3;
    use approx::assert_abs_diff_eq;

    #[test]
    fn meeting_three_planes_gives_their_common_point() {
        let a = Plane3::plane(Vec3::new(1.0_f32, -2.0, 3.0), 5.0);
        let c = Plane3::plane(Vec3::new(4.0, 2.0, -1.0), -2.0);
        let d = Plane3::plane(Vec3::new(0.0, 1.0, 0.0), 12.0);
        assert_eq!(meet3(&a, &c, &d), Point3::new(-49.0, 156.0, 142.0, 13.0));
    }

    #[test]
    fn meeting_with_vanishing_plane_gives_ideal_point() {
        let a = Plane3::plane(Vec3::new(1.0_f32, -2.0, 3.0), 5.0);
        let b = Plane3::plane(Vec3::ZERO, -2.0);
        let c = Plane3::plane(Vec3::new(4.0, 2.0, -1.0), -2.0);
        let p = meet3(&a, &b, &c);
        assert!(p.is_vanishing());
        assert_eq!(p, Point3::direction(Vec3::new(-8.0, 26.0, 20.0)));
    }

    #[test]
    fn joining_three_points_gives_plane_containing_them() {
        let a = Point3::new(1.0_f32, 2.0, 3.0, 2.0);
        let b = Point3::new(-2.0, 1.0, 3.0, 1.0);
        let c = Point3::new(-3.0, -1.0, 0.0, 0.0);
        let d = Point3::new(3.0, 0.0, 5.0, -1.0);
        assert_eq!(join3(&a, &b, &c), Plane3::new(-3.0, 9.0, -5.0, 0.0));

        let plane = join3(&a, &b, &d);
        assert_eq!(plane, Plane3::new(3.0, -43.0, 5.0, 34.0));
        for point in [a, b, d] {
            assert_abs_diff_eq!(meet(&plane, &point), 0.0);
        }
    }

    #[test]
    fn free_functions_forward_to_traits() {
        let p = Plane3::plane(Vec3::new(0.0_f64, 0.0, 1.0), 2.0);
        let x = Point3::point(3.0, 4.0, 5.0);
        assert_eq!(meet(&p, &x), p.meet(&x));
        assert_eq!(join(&x, &p), x.join(&p));
        assert_eq!(inner(&p, &x), p.inner(&x));
        assert_eq!(project(&x, &p), x.project(&p));
        assert_eq!(reflect(&x, &p), x.reflect(&p));
        assert!(!is_on(&x, &p));
        assert!(is_on(&project(&x, &p), &p));
    }
}
