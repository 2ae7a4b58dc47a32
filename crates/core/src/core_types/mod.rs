//! Core types and utilities

pub mod numeric;
pub mod vec3;

pub use numeric::Scalar;
pub use vec3::{vec3, Vec2, Vec3};
