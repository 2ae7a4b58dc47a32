//! In-place convenience operations for [`Vec3`].
//!
//! Every mutating method takes the receiver by `&mut`, updates its components in
//! place and hands back the same reference, so calls can be chained:
//!
//! ```
//! use vec_ops_core::{Vec2, Vec3, Vec3Ops};
//!
//! let mut v = Vec3::new(1.0, 2.0, 3.0);
//! v.add_vec2(&Vec2::new(4.0, 5.0)).mul_scalar(2).negate();
//! assert_eq!(v, Vec3::new(-10.0, -14.0, -6.0));
//! ```
//!
//! No method ever returns a copy. Anything else holding the vector observes
//! the change as soon as the borrow ends.

use std::cmp::Ordering;

use crate::core_types::{Scalar, Vec2, Vec3};

/// Operator-style conveniences over a mutable [`Vec3`].
///
/// Implemented for `nalgebra::Vector3<f32>`; each method delegates to the
/// matching `nalgebra` in-place primitive or to a single field update.
pub trait Vec3Ops {
    /// Multiply every component by -1.
    fn negate(&mut self) -> &mut Self;

    /// Add `other` element-wise.
    fn add_vec3(&mut self, other: &Vec3) -> &mut Self;

    /// Add `other.x` and `other.y` to x and y. z is left untouched.
    fn add_vec2(&mut self, other: &Vec2) -> &mut Self;

    /// Subtract `other` element-wise.
    fn sub_vec3(&mut self, other: &Vec3) -> &mut Self;

    /// Subtract `other.x` and `other.y` from x and y. z is left untouched.
    fn sub_vec2(&mut self, other: &Vec2) -> &mut Self;

    /// Element-wise product.
    fn mul_vec3(&mut self, other: &Vec3) -> &mut Self;

    /// Element-wise quotient.
    ///
    /// A zero component in `other` is not guarded against: the result in that
    /// component is ±infinity, or NaN for `0 / 0`.
    fn div_vec3(&mut self, other: &Vec3) -> &mut Self;

    /// Scale every component by `scalar`.
    fn mul_scalar<S: Scalar>(&mut self, scalar: S) -> &mut Self;

    /// Divide every component by `scalar`. Dividing by zero follows IEEE-754.
    fn div_scalar<S: Scalar>(&mut self, scalar: S) -> &mut Self;

    /// Add 1 to every component.
    ///
    /// This stands in for both `++v` and `v++`: the receiver is mutated directly
    /// and no snapshot is taken first, so the two forms are indistinguishable.
    fn increment(&mut self) -> &mut Self;

    /// Subtract 1 from every component. See [`Vec3Ops::increment`].
    fn decrement(&mut self) -> &mut Self;

    /// The components as an ordered `(x, y, z)` tuple.
    ///
    /// ```
    /// use vec_ops_core::{Vec3, Vec3Ops};
    ///
    /// let (x, y, z) = Vec3::new(1.0, 2.0, 3.0).components();
    /// assert_eq!((x, y, z), (1.0, 2.0, 3.0));
    /// ```
    fn components(&self) -> (f32, f32, f32);

    /// Squared length, `x² + y² + z²`.
    fn len2(&self) -> f32;

    /// Three-way comparison of squared lengths: -1, 0 or 1.
    fn compare_len2(&self, other: &Vec3) -> i32 {
        match self.cmp_len2(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// [`Ordering`] of squared lengths.
    ///
    /// A NaN length compares equal to any other NaN length and greater than
    /// every number, whatever the NaN's sign bit.
    fn cmp_len2(&self, other: &Vec3) -> Ordering;
}

impl Vec3Ops for Vec3 {
    #[inline]
    fn negate(&mut self) -> &mut Self {
        *self *= -1.0;
        self
    }

    #[inline]
    fn add_vec3(&mut self, other: &Vec3) -> &mut Self {
        *self += other;
        self
    }

    #[inline]
    fn add_vec2(&mut self, other: &Vec2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    #[inline]
    fn sub_vec3(&mut self, other: &Vec3) -> &mut Self {
        *self -= other;
        self
    }

    #[inline]
    fn sub_vec2(&mut self, other: &Vec2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    #[inline]
    fn mul_vec3(&mut self, other: &Vec3) -> &mut Self {
        self.component_mul_assign(other);
        self
    }

    #[inline]
    fn div_vec3(&mut self, other: &Vec3) -> &mut Self {
        self.component_div_assign(other);
        trace_non_finite(self, "component-wise division");
        self
    }

    #[inline]
    fn mul_scalar<S: Scalar>(&mut self, scalar: S) -> &mut Self {
        *self *= scalar.widen();
        self
    }

    #[inline]
    fn div_scalar<S: Scalar>(&mut self, scalar: S) -> &mut Self {
        *self /= scalar.widen();
        trace_non_finite(self, "scalar division");
        self
    }

    #[inline]
    fn increment(&mut self) -> &mut Self {
        self.add_scalar_mut(1.0);
        self
    }

    #[inline]
    fn decrement(&mut self) -> &mut Self {
        self.add_scalar_mut(-1.0);
        self
    }

    #[inline]
    fn components(&self) -> (f32, f32, f32) {
        (self.x, self.y, self.z)
    }

    #[inline]
    fn len2(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    fn cmp_len2(&self, other: &Vec3) -> Ordering {
        let (a, b) = (self.len2(), other.len2());
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Squared lengths are never -0.0, so this is plain numeric order.
            (false, false) => a.total_cmp(&b),
        }
    }
}

fn trace_non_finite(v: &Vec3, op: &str) {
    if !v.iter().all(|c| c.is_finite()) {
        tracing::trace!(result = ?v, "{op} produced a non-finite component");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_negate_twice_restores() {
        let mut v = Vec3::new(1.5, -2.0, 0.25);
        v.negate();
        assert_eq!(v, Vec3::new(-1.5, 2.0, -0.25));
        v.negate();
        assert_eq!(v, Vec3::new(1.5, -2.0, 0.25));
    }

    #[test]
    fn test_add_then_sub_vec3() {
        let original = Vec3::new(1.0, 2.0, 3.0);
        let w = Vec3::new(0.1, -7.3, 12.5);

        let mut v = original;
        v.add_vec3(&w);
        assert_relative_eq!(v, Vec3::new(1.1, -5.3, 15.5), epsilon = 1e-5);
        v.sub_vec3(&w);
        assert_relative_eq!(v, original, epsilon = 1e-5);
    }

    #[test]
    fn test_vec2_variants_leave_z_alone() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v.add_vec2(&Vec2::new(4.0, 5.0));
        assert_eq!(v, Vec3::new(5.0, 7.0, 3.0));

        v.sub_vec2(&Vec2::new(10.0, 1.0));
        assert_eq!(v, Vec3::new(-5.0, 6.0, 3.0));
    }

    #[test]
    fn test_component_mul_and_div() {
        let mut v = Vec3::new(2.0, 3.0, 4.0);
        v.mul_vec3(&Vec3::new(3.0, -1.0, 0.5));
        assert_eq!(v, Vec3::new(6.0, -3.0, 2.0));

        v.div_vec3(&Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(v, Vec3::new(3.0, -1.0, 0.5));
    }

    #[test]
    fn test_div_by_zero_component_is_not_an_error() {
        let mut v = Vec3::new(1.0, -1.0, 0.0);
        v.div_vec3(&Vec3::new(0.0, 0.0, 0.0));

        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn test_scalar_scale() {
        let mut v = Vec3::new(1.0, -2.0, 3.5);
        v.mul_scalar(2.0).div_scalar(2.0);
        assert_eq!(v, Vec3::new(1.0, -2.0, 3.5));

        v.mul_scalar(3).div_scalar(3);
        assert_relative_eq!(v, Vec3::new(1.0, -2.0, 3.5), epsilon = 1e-6);

        v.mul_scalar(0);
        assert_eq!(v, Vec3::zeros());
    }

    #[test]
    fn test_div_scalar_by_zero() {
        let mut v = Vec3::new(2.0, 0.0, -2.0);
        v.div_scalar(0);

        assert_eq!(v.x, f32::INFINITY);
        assert!(v.y.is_nan());
        assert_eq!(v.z, f32::NEG_INFINITY);
    }

    #[test]
    fn test_increment_decrement() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v.increment();
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v.decrement().decrement();
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_chaining_returns_same_instance() {
        let mut v = Vec3::new(1.0, 1.0, 1.0);
        let ptr: *const Vec3 = &v;
        let returned: *const Vec3 = v.increment().negate();
        assert_eq!(ptr, returned);
        assert_eq!(v, Vec3::new(-2.0, -2.0, -2.0));
    }

    #[test]
    fn test_components_order() {
        let (x, y, z) = Vec3::new(1.0, 2.0, 3.0).components();
        assert_eq!(x, 1.0);
        assert_eq!(y, 2.0);
        assert_eq!(z, 3.0);
    }

    #[test]
    fn test_compare_len2() {
        let long = Vec3::new(3.0, 4.0, 0.0);
        let unit = Vec3::new(1.0, 0.0, 0.0);

        assert_eq!(long.len2(), 25.0);
        assert_eq!(long.compare_len2(&unit), 1);
        assert_eq!(unit.compare_len2(&long), -1);
        assert_eq!(long.compare_len2(&Vec3::new(0.0, -4.0, 3.0)), 0);
        assert_eq!(long.cmp_len2(&unit), Ordering::Greater);
    }

    #[test]
    fn test_compare_len2_nan_sorts_last() {
        let mut nan = Vec3::zeros();
        nan.div_vec3(&Vec3::zeros());
        assert!(nan.len2().is_nan());

        let inf = Vec3::new(f32::INFINITY, 0.0, 0.0);
        let unit = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(nan.compare_len2(&inf), 1);
        assert_eq!(nan.compare_len2(&unit), 1);
        assert_eq!(nan.compare_len2(&Vec3::zeros()), 1);
        assert_eq!(inf.compare_len2(&nan), -1);

        // Every NaN is equal, regardless of sign bit
        let positive_nan = Vec3::new(f32::NAN, 0.0, 0.0);
        let negative_nan = Vec3::new(-f32::NAN, 0.0, 0.0);
        assert_eq!(nan.compare_len2(&positive_nan), 0);
        assert_eq!(negative_nan.compare_len2(&positive_nan), 0);
        assert_eq!(negative_nan.compare_len2(&unit), 1);
    }
}
