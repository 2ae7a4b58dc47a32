//! Scalar operands accepted by the uniform scale operations.

/// A value that can scale a [`Vec3`](crate::Vec3) uniformly.
///
/// Integers are widened to `f32` before use, so `v.mul_scalar(2)` and
/// `v.mul_scalar(2.0)` are the same operation.
pub trait Scalar: Copy {
    /// Widen to the vector's component type.
    fn widen(self) -> f32;
}

impl Scalar for f32 {
    #[inline(always)]
    fn widen(self) -> f32 {
        self
    }
}

impl Scalar for i32 {
    #[inline(always)]
    fn widen(self) -> f32 {
        self as f32
    }
}
