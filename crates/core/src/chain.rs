//! Operator syntax for in-place vector updates.
//!
//! `nalgebra` already gives `Vec3` value-returning operators (`a + b` builds a new
//! vector). [`InPlace`] borrows a vector mutably instead, and its operators write
//! into that vector and return the same handle:
//!
//! ```
//! use vec_ops_core::{in_place, Vec2, Vec3};
//!
//! let mut v = Vec3::new(1.0, 2.0, 3.0);
//! let _ = -(in_place(&mut v) + &Vec2::new(4.0, 5.0)) * 2;
//! assert_eq!(v, Vec3::new(-10.0, -14.0, -6.0));
//! ```

use std::ops::{Add, Deref, DerefMut, Div, Mul, Neg, Sub};

use crate::core_types::{Vec2, Vec3};
use crate::extensions::Vec3Ops;

/// Mutable handle whose operators update the borrowed [`Vec3`] in place.
///
/// Derefs to [`Vec3`], so every [`Vec3Ops`] method is reachable through it too.
#[derive(Debug)]
pub struct InPlace<'a>(&'a mut Vec3);

/// Borrow `v` for operator-style in-place updates.
#[inline]
pub fn in_place(v: &mut Vec3) -> InPlace<'_> {
    InPlace(v)
}

impl<'a> InPlace<'a> {
    /// Release the handle, giving back the original borrow.
    #[inline]
    pub fn into_inner(self) -> &'a mut Vec3 {
        self.0
    }
}

impl Deref for InPlace<'_> {
    type Target = Vec3;

    #[inline]
    fn deref(&self) -> &Vec3 {
        self.0
    }
}

impl DerefMut for InPlace<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Vec3 {
        self.0
    }
}

impl Neg for InPlace<'_> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.0.negate();
        self
    }
}

// Each operator forwards to the named `Vec3Ops` method and hands the handle back.
macro_rules! in_place_op {
    ($op:ident, $fn:ident, $rhs:ty, $method:ident) => {
        impl $op<$rhs> for InPlace<'_> {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: $rhs) -> Self {
                self.0.$method(rhs);
                self
            }
        }
    };
}

in_place_op!(Add, add, &Vec3, add_vec3);
in_place_op!(Add, add, &Vec2, add_vec2);
in_place_op!(Sub, sub, &Vec3, sub_vec3);
in_place_op!(Sub, sub, &Vec2, sub_vec2);
in_place_op!(Mul, mul, &Vec3, mul_vec3);
in_place_op!(Div, div, &Vec3, div_vec3);
in_place_op!(Mul, mul, f32, mul_scalar);
in_place_op!(Mul, mul, i32, mul_scalar);
in_place_op!(Div, div, f32, div_scalar);
in_place_op!(Div, div, i32, div_scalar);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_operators_mutate_borrowed_vector() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        let w = Vec3::new(0.5, 0.25, -4.0);

        let _ = in_place(&mut v) + &w - &w;
        assert_relative_eq!(v, Vec3::new(1.0, 2.0, 3.0), epsilon = 1e-6);

        let _ = in_place(&mut v) * &Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vec3::new(2.0, 4.0, 6.0));

        let _ = in_place(&mut v) / &Vec3::new(2.0, 4.0, 3.0);
        assert_eq!(v, Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_vec2_operators() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        let _ = in_place(&mut v) + &Vec2::new(4.0, 5.0);
        assert_eq!(v, Vec3::new(5.0, 7.0, 3.0));

        let _ = in_place(&mut v) - &Vec2::new(5.0, 7.0);
        assert_eq!(v, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_scalar_operators_accept_int_and_float() {
        let mut a = Vec3::new(1.0, -2.0, 3.0);
        let mut b = a;

        let _ = in_place(&mut a) * 4 / 2;
        let _ = in_place(&mut b) * 4.0 / 2.0;
        assert_eq!(a, b);
        assert_eq!(a, Vec3::new(2.0, -4.0, 6.0));
    }

    #[test]
    fn test_negation_and_deref_methods() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        let mut handle = -in_place(&mut v);
        handle.increment();
        assert_eq!(handle.components(), (0.0, -1.0, -2.0));

        let inner = handle.into_inner();
        inner.decrement();
        assert_eq!(v, Vec3::new(-1.0, -2.0, -3.0));
    }
}
