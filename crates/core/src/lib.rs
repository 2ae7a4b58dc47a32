//! Vector Operations Core Library
//!
//! In-place operator conveniences for `nalgebra::Vector3<f32>`: negation,
//! vector and scalar arithmetic, increment/decrement, tuple destructuring and
//! squared-length comparison.
//!
//! Everything mutates the receiver and returns that same receiver, so calls
//! chain and any other holder of the vector sees the update. Nothing here
//! allocates a new vector except construction itself.
//!
//! ## Surfaces
//!
//! - [`Vec3Ops`]: extension trait with named methods (`add_vec3`, `negate`, ...)
//! - [`InPlace`]: operator handle (`in_place(&mut v) + &w`)
//! - [`ByLen2`]: ordering wrapper for `<`, `>` and sorting
//! - [`vec3()`] and [`vec3!`]: constructors with zero defaults

// Core types and utilities
pub mod core_types;

pub mod chain;
pub mod compare;
pub mod extensions;

// Re-export core types
pub use core_types::{vec3, Scalar, Vec2, Vec3};

pub use chain::{in_place, InPlace};
pub use compare::ByLen2;
pub use extensions::Vec3Ops;
