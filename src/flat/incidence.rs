//! Products and incidence tests between flats of different grades.

use crate::{
    flat::{Flat, Inner, IsOn, Join, Line3, Meet, Plane3, Point3},
    num::Float,
    tolerance::is_approx_zero,
};

#[inline]
fn plane_line_meet<T: Float>(p: &Plane3<T>, l: &Line3<T>) -> Point3<T> {
    Point3::new(
        p.e2 * l.e03 - p.e3 * l.e02 - p.e0 * l.e23,
        p.e3 * l.e01 - p.e1 * l.e03 - p.e0 * l.e31,
        p.e1 * l.e02 - p.e2 * l.e01 - p.e0 * l.e12,
        p.e1 * l.e23 + p.e2 * l.e31 + p.e3 * l.e12,
    )
}

#[inline]
fn plane_line_inner<T: Float>(p: &Plane3<T>, l: &Line3<T>) -> Plane3<T> {
    Plane3::new(
        p.e3 * l.e31 - p.e2 * l.e12,
        p.e1 * l.e12 - p.e3 * l.e23,
        p.e2 * l.e23 - p.e1 * l.e31,
        -(p.e1 * l.e01 + p.e2 * l.e02 + p.e3 * l.e03),
    )
}

#[inline]
fn line_point_join<T: Float>(l: &Line3<T>, x: &Point3<T>) -> Plane3<T> {
    Plane3::new(
        l.e01 * x.e123 + l.e31 * x.e021 - l.e12 * x.e013,
        l.e02 * x.e123 + l.e12 * x.e032 - l.e23 * x.e021,
        l.e03 * x.e123 + l.e23 * x.e013 - l.e31 * x.e032,
        -l.e01 * x.e032 - l.e02 * x.e013 - l.e03 * x.e021,
    )
}

#[inline]
fn line_point_inner<T: Float>(l: &Line3<T>, x: &Point3<T>) -> Plane3<T> {
    Plane3::new(
        -l.e23 * x.e123,
        -l.e31 * x.e123,
        -l.e12 * x.e123,
        l.e23 * x.e032 + l.e31 * x.e013 + l.e12 * x.e021,
    )
}

#[inline]
fn plane_point_inner<T: Float>(p: &Plane3<T>, x: &Point3<T>) -> Line3<T> {
    Line3::new(
        p.e1 * x.e123,
        p.e2 * x.e123,
        p.e3 * x.e123,
        p.e3 * x.e013 - p.e2 * x.e021,
        p.e1 * x.e021 - p.e3 * x.e032,
        p.e2 * x.e032 - p.e1 * x.e013,
    )
}

/// The pseudoscalar coefficient of `p ∧ x`, i.e. the signed distance of
/// the point from the plane scaled by both weights.
#[inline]
fn plane_point_meet<T: Float>(p: &Plane3<T>, x: &Point3<T>) -> T {
    p.e1 * x.e032 + p.e2 * x.e013 + p.e3 * x.e021 + p.e0 * x.e123
}

impl<T: Float> Meet<Line3<T>> for Plane3<T> {
    type Output = Point3<T>;

    #[inline]
    fn meet(&self, l: &Line3<T>) -> Point3<T> {
        plane_line_meet(self, l)
    }
}

impl<T: Float> Meet<Plane3<T>> for Line3<T> {
    type Output = Point3<T>;

    #[inline]
    fn meet(&self, p: &Plane3<T>) -> Point3<T> {
        plane_line_meet(p, self)
    }
}

impl<T: Float> Meet<Point3<T>> for Plane3<T> {
    type Output = T;

    #[inline]
    fn meet(&self, x: &Point3<T>) -> T {
        plane_point_meet(self, x)
    }
}

impl<T: Float> Meet<Plane3<T>> for Point3<T> {
    type Output = T;

    #[inline]
    fn meet(&self, p: &Plane3<T>) -> T {
        -plane_point_meet(p, self)
    }
}

impl<T: Float> Join<Point3<T>> for Line3<T> {
    type Output = Plane3<T>;

    #[inline]
    fn join(&self, x: &Point3<T>) -> Plane3<T> {
        line_point_join(self, x)
    }
}

impl<T: Float> Join<Line3<T>> for Point3<T> {
    type Output = Plane3<T>;

    #[inline]
    fn join(&self, l: &Line3<T>) -> Plane3<T> {
        line_point_join(l, self)
    }
}

impl<T: Float> Join<Point3<T>> for Plane3<T> {
    type Output = T;

    #[inline]
    fn join(&self, x: &Point3<T>) -> T {
        -plane_point_meet(self, x)
    }
}

impl<T: Float> Join<Plane3<T>> for Point3<T> {
    type Output = T;

    #[inline]
    fn join(&self, p: &Plane3<T>) -> T {
        plane_point_meet(p, self)
    }
}

impl<T: Float> Inner<Line3<T>> for Plane3<T> {
    type Output = Plane3<T>;

    #[inline]
    fn inner(&self, l: &Line3<T>) -> Plane3<T> {
        plane_line_inner(self, l)
    }
}

impl<T: Float> Inner<Plane3<T>> for Line3<T> {
    type Output = Plane3<T>;

    #[inline]
    fn inner(&self, p: &Plane3<T>) -> Plane3<T> {
        -plane_line_inner(p, self)
    }
}

impl<T: Float> Inner<Point3<T>> for Line3<T> {
    type Output = Plane3<T>;

    #[inline]
    fn inner(&self, x: &Point3<T>) -> Plane3<T> {
        line_point_inner(self, x)
    }
}

impl<T: Float> Inner<Line3<T>> for Point3<T> {
    type Output = Plane3<T>;

    #[inline]
    fn inner(&self, l: &Line3<T>) -> Plane3<T> {
        line_point_inner(l, self)
    }
}

impl<T: Float> Inner<Point3<T>> for Plane3<T> {
    type Output = Line3<T>;

    #[inline]
    fn inner(&self, x: &Point3<T>) -> Line3<T> {
        plane_point_inner(self, x)
    }
}

impl<T: Float> Inner<Plane3<T>> for Point3<T> {
    type Output = Line3<T>;

    #[inline]
    fn inner(&self, p: &Plane3<T>) -> Line3<T> {
        plane_point_inner(p, self)
    }
}

impl<T: Float> IsOn<Plane3<T>> for Point3<T> {
    #[inline]
    fn is_on(&self, plane: &Plane3<T>) -> bool {
        is_approx_zero(plane_point_meet(plane, self))
    }
}

impl<T: Float> IsOn<Line3<T>> for Point3<T> {
    #[inline]
    fn is_on(&self, line: &Line3<T>) -> bool {
        line_point_join(line, self).is_approx_zero()
    }
}

impl<T: Float> IsOn<Plane3<T>> for Line3<T> {
    #[inline]
    fn is_on(&self, plane: &Plane3<T>) -> bool {
        plane_line_meet(plane, self).is_approx_zero()
    }
}
