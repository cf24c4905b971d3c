//! Orthogonal projection and rejection.
//!
//! Projecting `a` onto `b` is `(a · b) ∘ b⁻¹`, where `∘` is the inner
//! product when projecting a flat onto a point and the outer product when
//! projecting a point onto a plane or line. Using the reverse `~b` in place
//! of `b⁻¹` gives the unnormalized ("fast") projection, which differs from
//! the projection by the positive factor `|b|²`.

use crate::{
    flat::{Inner, Line3, Meet, Plane3, Point3, Project},
    num::Float,
};

macro_rules! impl_project {
    ($t:ident onto $onto:ident by $op:ident) => {
        impl<T: Float> Project<$onto<T>> for $t<T> {
            #[inline]
            fn fast_project(&self, onto: &$onto<T>) -> Self {
                self.inner(onto).$op(&onto.reverse())
            }

            #[inline]
            fn project(&self, onto: &$onto<T>) -> Self {
                self.inner(onto).$op(&onto.inverse())
            }

            #[inline]
            fn fast_reject(&self, from: &$onto<T>) -> Self {
                self * from.magnitude_squared() - self.inner(from).$op(&from.reverse())
            }

            #[inline]
            fn reject(&self, from: &$onto<T>) -> Self {
                self - self.project(from)
            }
        }
    };
}

impl_project!(Plane3 onto Point3 by inner);
impl_project!(Line3 onto Point3 by inner);
impl_project!(Point3 onto Plane3 by meet);
impl_project!(Point3 onto Line3 by meet);
