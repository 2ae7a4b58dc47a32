//! Vector type aliases and constructors.

use nalgebra::{Vector2, Vector3};

/// 3D vector type for points and directions.
///
/// This is a simple alias for `nalgebra::Vector3<f32>`. Storage, arithmetic and
/// lifecycle all belong to `nalgebra`; this crate only adds in-place conveniences
/// on top (see [`crate::Vec3Ops`]).
pub type Vec3 = Vector3<f32>;

/// 2D vector type, used as a partial-update source for a [`Vec3`]'s x and y.
pub type Vec2 = Vector2<f32>;

/// Create a new [`Vec3`] from its three components.
///
/// Use the [`vec3!`](crate::vec3!) macro when some components should default to zero.
#[inline]
#[must_use]
pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Build a [`Vec3`], defaulting omitted components to `0.0`.
///
/// ```
/// use vec_ops_core::{vec3, Vec3};
///
/// assert_eq!(vec3!(), Vec3::zeros());
/// assert_eq!(vec3!(1.0), Vec3::new(1.0, 0.0, 0.0));
/// assert_eq!(vec3!(1.0, 2.0), Vec3::new(1.0, 2.0, 0.0));
/// assert_eq!(vec3!(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(vec3!(z = 5.0), Vec3::new(0.0, 0.0, 5.0));
/// assert_eq!(vec3!(y = 2.0, z = 5.0), Vec3::new(0.0, 2.0, 5.0));
/// ```
#[macro_export]
macro_rules! vec3 {
    () => {
        $crate::Vec3::zeros()
    };
    ($($name:ident = $value:expr),+ $(,)?) => {{
        let mut v = $crate::Vec3::zeros();
        $( v.$name = $value; )+
        v
    }};
    ($x:expr $(,)?) => {
        $crate::vec3($x, 0.0, 0.0)
    };
    ($x:expr, $y:expr $(,)?) => {
        $crate::vec3($x, $y, 0.0)
    };
    ($x:expr, $y:expr, $z:expr $(,)?) => {
        $crate::vec3($x, $y, $z)
    };
}
