//! Reflection of flats in planes, lines and points.

use crate::{
    flat::{Line3, Plane3, Point3, Reflect},
    num::Float,
};

impl<T: Float> Reflect<Plane3<T>> for Point3<T> {
    #[inline]
    fn fast_reflect(&self, b: &Plane3<T>) -> Self {
        let a = self;
        let two = T::TWO;
        let (b1s, b2s, b3s) = (b.e1 * b.e1, b.e2 * b.e2, b.e3 * b.e3);
        Point3::new(
            a.e032 * (b1s - b2s - b3s)
                + two * b.e1 * (a.e013 * b.e2 + a.e021 * b.e3 + a.e123 * b.e0),
            a.e013 * (b2s - b3s - b1s)
                + two * b.e2 * (a.e032 * b.e1 + a.e021 * b.e3 + a.e123 * b.e0),
            a.e021 * (b3s - b1s - b2s)
                + two * b.e3 * (a.e032 * b.e1 + a.e013 * b.e2 + a.e123 * b.e0),
            -a.e123 * (b1s + b2s + b3s),
        )
    }
}

impl<T: Float> Reflect<Line3<T>> for Point3<T> {
    #[inline]
    fn fast_reflect(&self, b: &Line3<T>) -> Self {
        let a = self;
        let two = T::TWO;
        let (b23s, b31s, b12s) = (b.e23 * b.e23, b.e31 * b.e31, b.e12 * b.e12);
        Point3::new(
            a.e032 * (b23s - b31s - b12s)
                + two * (a.e013 * b.e23 * b.e31 + a.e021 * b.e12 * b.e23)
                + two * a.e123 * (b.e03 * b.e31 - b.e02 * b.e12),
            a.e013 * (b31s - b12s - b23s)
                + two * (a.e021 * b.e12 * b.e31 + a.e032 * b.e23 * b.e31)
                + two * a.e123 * (b.e01 * b.e12 - b.e03 * b.e23),
            a.e021 * (b12s - b23s - b31s)
                + two * (a.e013 * b.e12 * b.e31 + a.e032 * b.e12 * b.e23)
                + two * a.e123 * (b.e02 * b.e23 - b.e01 * b.e31),
            a.e123 * (b23s + b31s + b12s),
        )
    }
}

impl<T: Float> Reflect<Point3<T>> for Point3<T> {
    #[inline]
    fn fast_reflect(&self, b: &Point3<T>) -> Self {
        let a = self;
        let b123s = b.e123 * b.e123;
        let f = T::TWO * a.e123 * b.e123;
        Point3::new(
            a.e032 * b123s - f * b.e032,
            a.e013 * b123s - f * b.e013,
            a.e021 * b123s - f * b.e021,
            -a.e123 * b123s,
        )
    }
}

impl<T: Float> Reflect<Plane3<T>> for Line3<T> {
    #[inline]
    fn fast_reflect(&self, b: &Plane3<T>) -> Self {
        let a = self;
        let two = T::TWO;
        let (b1s, b2s, b3s) = (b.e1 * b.e1, b.e2 * b.e2, b.e3 * b.e3);
        Line3::new(
            a.e23 * (b1s - b2s - b3s) + two * b.e1 * (a.e12 * b.e3 + a.e31 * b.e2),
            a.e31 * (b2s - b3s - b1s) + two * b.e2 * (a.e12 * b.e3 + a.e23 * b.e1),
            a.e12 * (b3s - b1s - b2s) + two * b.e3 * (a.e31 * b.e2 + a.e23 * b.e1),
            a.e01 * (b2s + b3s - b1s)
                - two * b.e1 * (a.e02 * b.e2 + a.e03 * b.e3)
                + two * b.e0 * (a.e12 * b.e2 - a.e31 * b.e3),
            a.e02 * (b3s + b1s - b2s)
                - two * b.e2 * (a.e01 * b.e1 + a.e03 * b.e3)
                + two * b.e0 * (a.e23 * b.e3 - a.e12 * b.e1),
            a.e03 * (b1s + b2s - b3s)
                - two * b.e3 * (a.e01 * b.e1 + a.e02 * b.e2)
                + two * b.e0 * (a.e31 * b.e1 - a.e23 * b.e2),
        )
    }
}

impl<T: Float> Reflect<Line3<T>> for Line3<T> {
    #[inline]
    fn fast_reflect(&self, b: &Line3<T>) -> Self {
        let a = self;
        let two = T::TWO;
        let (b23s, b31s, b12s) = (b.e23 * b.e23, b.e31 * b.e31, b.e12 * b.e12);
        let ad = a.e23 * b.e23 + a.e31 * b.e31 + a.e12 * b.e12;
        Line3::new(
            a.e23 * (b23s - b31s - b12s) + two * b.e23 * (a.e12 * b.e12 + a.e31 * b.e31),
            a.e31 * (b31s - b23s - b12s) + two * b.e31 * (a.e23 * b.e23 + a.e12 * b.e12),
            a.e12 * (b12s - b23s - b31s) + two * b.e12 * (a.e31 * b.e31 + a.e23 * b.e23),
            a.e01 * (b23s - b31s - b12s)
                + two * b.e01 * ad
                + two * b.e02 * (a.e31 * b.e23 - a.e23 * b.e31)
                + two * b.e03 * (a.e12 * b.e23 - a.e23 * b.e12)
                + two * b.e23 * (a.e02 * b.e31 + a.e03 * b.e12),
            a.e02 * (b31s - b23s - b12s)
                + two * b.e02 * ad
                + two * b.e01 * (a.e23 * b.e31 - a.e31 * b.e23)
                + two * b.e03 * (a.e12 * b.e31 - a.e31 * b.e12)
                + two * b.e31 * (a.e01 * b.e23 + a.e03 * b.e12),
            a.e03 * (b12s - b23s - b31s)
                + two * b.e03 * ad
                + two * b.e01 * (a.e23 * b.e12 - a.e12 * b.e23)
                + two * b.e02 * (a.e31 * b.e12 - a.e12 * b.e31)
                + two * b.e12 * (a.e01 * b.e23 + a.e02 * b.e31),
        )
    }
}

impl<T: Float> Reflect<Point3<T>> for Line3<T> {
    #[inline]
    fn fast_reflect(&self, b: &Point3<T>) -> Self {
        let a = self;
        let b123s = b.e123 * b.e123;
        let f = T::TWO * b.e123;
        Line3::new(
            a.e23 * b123s,
            a.e31 * b123s,
            a.e12 * b123s,
            -a.e01 * b123s + f * (a.e12 * b.e013 - a.e31 * b.e021),
            -a.e02 * b123s + f * (a.e23 * b.e021 - a.e12 * b.e032),
            -a.e03 * b123s + f * (a.e31 * b.e032 - a.e23 * b.e013),
        )
    }
}

impl<T: Float> Reflect<Plane3<T>> for Plane3<T> {
    #[inline]
    fn fast_reflect(&self, b: &Plane3<T>) -> Self {
        let a = self;
        let two = T::TWO;
        let (b1s, b2s, b3s) = (b.e1 * b.e1, b.e2 * b.e2, b.e3 * b.e3);
        Plane3::new(
            a.e1 * (b2s + b3s - b1s) - two * b.e1 * (a.e2 * b.e2 + a.e3 * b.e3),
            a.e2 * (b1s + b3s - b2s) - two * b.e2 * (a.e1 * b.e1 + a.e3 * b.e3),
            a.e3 * (b1s + b2s - b3s) - two * b.e3 * (a.e1 * b.e1 + a.e2 * b.e2),
            a.e0 * (b1s + b2s + b3s) - two * b.e0 * (a.e1 * b.e1 + a.e2 * b.e2 + a.e3 * b.e3),
        )
    }
}

impl<T: Float> Reflect<Line3<T>> for Plane3<T> {
    #[inline]
    fn fast_reflect(&self, b: &Line3<T>) -> Self {
        let a = self;
        let two = T::TWO;
        let (b23s, b31s, b12s) = (b.e23 * b.e23, b.e31 * b.e31, b.e12 * b.e12);
        Plane3::new(
            a.e1 * (b23s - b31s - b12s) + two * b.e23 * (a.e2 * b.e31 + a.e3 * b.e12),
            a.e2 * (b31s - b12s - b23s) + two * b.e31 * (a.e1 * b.e23 + a.e3 * b.e12),
            a.e3 * (b12s - b23s - b31s) + two * b.e12 * (a.e1 * b.e23 + a.e2 * b.e31),
            a.e0 * (b23s + b31s + b12s)
                + two * a.e1 * (b.e03 * b.e31 - b.e02 * b.e12)
                + two * a.e2 * (b.e01 * b.e12 - b.e03 * b.e23)
                + two * a.e3 * (b.e02 * b.e23 - b.e01 * b.e31),
        )
    }
}

impl<T: Float> Reflect<Point3<T>> for Plane3<T> {
    #[inline]
    fn fast_reflect(&self, b: &Point3<T>) -> Self {
        let a = self;
        let b123s = b.e123 * b.e123;
        Plane3::new(
            -a.e1 * b123s,
            -a.e2 * b123s,
            -a.e3 * b123s,
            a.e0 * b123s
                + T::TWO * b.e123 * (a.e1 * b.e032 + a.e2 * b.e013 + a.e3 * b.e021),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        flat::{IsOn, Join, Meet},
        vector::Vec3,
    };
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-9;

    fn plane() -> Plane3<f64> {
        Plane3::plane(Vec3::new(1.0, -2.0, 2.0), 3.0)
    }

    fn line() -> Line3<f64> {
        Line3::line(Vec3::new(2.0, 1.0, -1.0), Vec3::new(0.0, 1.0, 3.0))
    }

    fn point() -> Point3<f64> {
        Point3::new(-1.0, 4.0, 2.0, 2.0)
    }

    #[test]
    fn reflecting_in_vanishing_plane_vanishes() {
        let a = Plane3::plane(Vec3::new(1.0_f32, -2.0, 3.0), 5.0);
        let b = Plane3::plane(Vec3::ZERO, -2.0);
        assert_eq!(a.fast_reflect(&b), Plane3::ZERO);
    }

    #[test]
    fn reflecting_point_in_coordinate_plane_flips_coordinate() {
        let x = Point3::point(1.0_f64, 2.0, 3.0);
        assert_abs_diff_eq!(
            x.reflect(&Plane3::XY),
            Point3::new(-1.0, -2.0, 3.0, -1.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            x.reflect(&Plane3::XY).normalized(),
            Point3::point(1.0, 2.0, -3.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn reflecting_point_in_point_mirrors_it_through_the_point() {
        let x = Point3::point(1.0_f64, 2.0, 3.0);
        let center = Point3::point(0.0, 1.0, 1.0);
        assert_abs_diff_eq!(
            x.reflect(&center).normalized(),
            Point3::point(-1.0, 0.0, -1.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn reflecting_point_in_line_rotates_it_half_a_turn() {
        let x = Point3::point(1.0_f64, 2.0, 3.0);
        assert_abs_diff_eq!(
            x.reflect(&Line3::Z_AXIS).normalized(),
            Point3::point(-1.0, -2.0, 3.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn reflecting_plane_in_plane_mirrors_its_normal() {
        let a = Plane3::plane(Vec3::new(1.0_f64, 1.0, 0.0), 2.0);
        let reflected = a.reflect(&Plane3::YZ);
        assert_abs_diff_eq!(
            reflected.normalized(),
            Plane3::plane(Vec3::new(-1.0, 1.0, 0.0), 2.0).normalized(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn reflected_point_lies_on_reflected_plane() {
        let x = Point3::point(2.0_f64, -1.0, 3.0);
        let a = Point3::point(0.0, 1.0, 5.0);
        let b = Point3::point(-2.0, 4.0, 1.0);
        let flat = x.join(&a).join(&b);
        assert!(x.reflect(&plane()).is_on(&flat.reflect(&plane())));
        assert!(x.reflect(&line()).is_on(&flat.reflect(&line())));
        assert!(x.reflect(&point()).is_on(&flat.reflect(&point())));
    }

    #[test]
    fn reflected_line_passes_through_reflected_points() {
        let a = Point3::point(2.0_f64, -1.0, 3.0);
        let b = Point3::point(0.0, 1.0, 5.0);
        let l = a.join(&b);
        assert!(a.reflect(&plane()).is_on(&l.reflect(&plane())));
        assert!(b.reflect(&line()).is_on(&l.reflect(&line())));
        assert!(a.reflect(&point()).is_on(&l.reflect(&point())));
    }

    #[test]
    fn reflecting_twice_restores_flat() {
        let x = Point3::point(2.0_f64, -1.0, 3.0);
        let l = Line3::line(Vec3::new(1.0, 0.0, 2.0), Vec3::new(-1.0, 3.0, 0.0));
        let p = Plane3::plane(Vec3::new(0.0, 3.0, -4.0), 1.0);

        assert_abs_diff_eq!(x.reflect(&plane()).reflect(&plane()), x, epsilon = EPSILON);
        assert_abs_diff_eq!(x.reflect(&line()).reflect(&line()), x, epsilon = EPSILON);
        assert_abs_diff_eq!(x.reflect(&point()).reflect(&point()), x, epsilon = EPSILON);
        assert_abs_diff_eq!(l.reflect(&plane()).reflect(&plane()), l, epsilon = EPSILON);
        assert_abs_diff_eq!(l.reflect(&line()).reflect(&line()), l, epsilon = EPSILON);
        assert_abs_diff_eq!(l.reflect(&point()).reflect(&point()), l, epsilon = EPSILON);
        assert_abs_diff_eq!(p.reflect(&plane()).reflect(&plane()), p, epsilon = EPSILON);
        assert_abs_diff_eq!(p.reflect(&line()).reflect(&line()), p, epsilon = EPSILON);
        assert_abs_diff_eq!(p.reflect(&point()).reflect(&point()), p, epsilon = EPSILON);
    }

    #[test]
    fn mirror_plane_meets_line_and_its_reflection_in_same_point() {
        let l = Line3::line(Vec3::new(1.0_f64, 0.0, 2.0), Vec3::new(-1.0, 3.0, 0.0));
        let hit = plane().meet(&l).normalized();
        let reflected_hit = plane().meet(&l.reflect(&plane())).normalized();
        assert_abs_diff_eq!(hit, reflected_hit, epsilon = EPSILON);
    }
}
