use vec_ops_core::{Vec2, Vec3};

/// C-compatible 3-component vector.
/// Keep this layout stable for C/C++/C# consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VecOpsVec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// C-compatible 2-component vector, used to update only x and y of a `VecOpsVec3`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VecOpsVec2 {
    pub x: f32,
    pub y: f32,
}

impl From<VecOpsVec3> for Vec3 {
    fn from(v: VecOpsVec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for VecOpsVec3 {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<VecOpsVec2> for Vec2 {
    fn from(v: VecOpsVec2) -> Self {
        Vec2::new(v.x, v.y)
    }
}
