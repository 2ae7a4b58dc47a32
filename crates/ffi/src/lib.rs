//! C ABI for the in-place vector operations.
//!
//! Every mutating function takes a `VecOpsVec3*`, updates the pointee and returns
//! that same pointer, so C callers can chain calls the way Rust callers chain
//! `&mut` methods. A null pointer anywhere makes the call return null (or a
//! non-`Ok` code) and records a message retrievable with
//! `vec_ops_get_last_error()`.

mod error;
mod helpers;
mod vector;

pub use error::{vec_ops_get_last_error, vec_ops_get_last_error_code, VecOpsErrorCode};
pub use vector::{VecOpsVec2, VecOpsVec3};

use helpers::{clear_last_error, mutate_in_place, read_non_null, track_error};
use vec_ops_core::{Vec2, Vec3, Vec3Ops};

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Create a vector from its three components.
#[no_mangle]
pub extern "C" fn vec_ops_vec3_new(x: f32, y: f32, z: f32) -> VecOpsVec3 {
    VecOpsVec3 { x, y, z }
}

/// Create a vector with every component set to zero.
#[no_mangle]
pub extern "C" fn vec_ops_vec3_zero() -> VecOpsVec3 {
    VecOpsVec3::default()
}

// ============================================================================
// IN-PLACE OPERATIONS
// ============================================================================

/// Multiply every component of `v` by -1.
///
/// # Returns
/// `v`, or null if `v` is null.
///
/// # Safety
/// `v` must be null or a valid, writable pointer.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_negate(v: *mut VecOpsVec3) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        vec.negate();
        Ok(())
    })
}

/// Add `other` to `v` element-wise.
///
/// # Returns
/// `v`, or null if either pointer is null (`v` is left unchanged).
///
/// # Safety
/// `v` must be null or a valid, writable pointer; `other` must be null or readable.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_add_vec3(
    v: *mut VecOpsVec3,
    other: *const VecOpsVec3,
) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        let other = Vec3::from(read_non_null(other, "other")?);
        vec.add_vec3(&other);
        Ok(())
    })
}

/// Add `other.x` and `other.y` to `v`. `v.z` is unchanged.
///
/// # Returns
/// `v`, or null if either pointer is null.
///
/// # Safety
/// `v` must be null or a valid, writable pointer; `other` must be null or readable.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_add_vec2(
    v: *mut VecOpsVec3,
    other: *const VecOpsVec2,
) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        let other = Vec2::from(read_non_null(other, "other")?);
        vec.add_vec2(&other);
        Ok(())
    })
}

/// Subtract `other` from `v` element-wise.
///
/// # Returns
/// `v`, or null if either pointer is null.
///
/// # Safety
/// `v` must be null or a valid, writable pointer; `other` must be null or readable.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_sub_vec3(
    v: *mut VecOpsVec3,
    other: *const VecOpsVec3,
) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        let other = Vec3::from(read_non_null(other, "other")?);
        vec.sub_vec3(&other);
        Ok(())
    })
}

/// Subtract `other.x` and `other.y` from `v`. `v.z` is unchanged.
///
/// # Returns
/// `v`, or null if either pointer is null.
///
/// # Safety
/// `v` must be null or a valid, writable pointer; `other` must be null or readable.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_sub_vec2(
    v: *mut VecOpsVec3,
    other: *const VecOpsVec2,
) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        let other = Vec2::from(read_non_null(other, "other")?);
        vec.sub_vec2(&other);
        Ok(())
    })
}

/// Multiply `v` by `other` element-wise.
///
/// # Returns
/// `v`, or null if either pointer is null.
///
/// # Safety
/// `v` must be null or a valid, writable pointer; `other` must be null or readable.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_mul_vec3(
    v: *mut VecOpsVec3,
    other: *const VecOpsVec3,
) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        let other = Vec3::from(read_non_null(other, "other")?);
        vec.mul_vec3(&other);
        Ok(())
    })
}

/// Divide `v` by `other` element-wise.
///
/// A zero component in `other` gives infinity or NaN in that component; this is
/// not reported as an error.
///
/// # Returns
/// `v`, or null if either pointer is null.
///
/// # Safety
/// `v` must be null or a valid, writable pointer; `other` must be null or readable.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_div_vec3(
    v: *mut VecOpsVec3,
    other: *const VecOpsVec3,
) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        let other = Vec3::from(read_non_null(other, "other")?);
        vec.div_vec3(&other);
        Ok(())
    })
}

/// Scale every component of `v` by `scalar`.
///
/// # Safety
/// `v` must be null or a valid, writable pointer.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_mul_float(v: *mut VecOpsVec3, scalar: f32) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        vec.mul_scalar(scalar);
        Ok(())
    })
}

/// Scale every component of `v` by an integer, widened to float first.
///
/// # Safety
/// `v` must be null or a valid, writable pointer.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_mul_int(v: *mut VecOpsVec3, scalar: i32) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        vec.mul_scalar(scalar);
        Ok(())
    })
}

/// Divide every component of `v` by `scalar`.
///
/// # Safety
/// `v` must be null or a valid, writable pointer.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_div_float(v: *mut VecOpsVec3, scalar: f32) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        vec.div_scalar(scalar);
        Ok(())
    })
}

/// Divide every component of `v` by an integer, widened to float first.
///
/// # Safety
/// `v` must be null or a valid, writable pointer.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_div_int(v: *mut VecOpsVec3, scalar: i32) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        vec.div_scalar(scalar);
        Ok(())
    })
}

/// Add 1 to every component of `v`.
///
/// # Safety
/// `v` must be null or a valid, writable pointer.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_increment(v: *mut VecOpsVec3) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        vec.increment();
        Ok(())
    })
}

/// Subtract 1 from every component of `v`.
///
/// # Safety
/// `v` must be null or a valid, writable pointer.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_decrement(v: *mut VecOpsVec3) -> *mut VecOpsVec3 {
    mutate_in_place(v, |vec| {
        vec.decrement();
        Ok(())
    })
}

// ============================================================================
// QUERIES
// ============================================================================

/// Write the components of `v` to `out_x`, `out_y` and `out_z`.
///
/// # Returns
/// - `VecOpsErrorCode::Ok` on success
/// - `VecOpsErrorCode::NullPointer` if any pointer is null (no output is written)
///
/// # Safety
/// `v` must be null or readable; each output must be null or writable. The
/// pointers may alias one another.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_components(
    v: *const VecOpsVec3,
    out_x: *mut f32,
    out_y: *mut f32,
    out_z: *mut f32,
) -> VecOpsErrorCode {
    let vec = match read_non_null(v, "v") {
        Ok(vec) => Vec3::from(vec),
        Err(e) => return track_error(&e),
    };

    for (out, name) in [(out_x, "out_x"), (out_y, "out_y"), (out_z, "out_z")] {
        if out.is_null() {
            return track_error(&error::DefaultVecOpsError::null_pointer(name));
        }
    }

    let (x, y, z) = vec.components();
    out_x.write(x);
    out_y.write(y);
    out_z.write(z);
    clear_last_error();
    VecOpsErrorCode::Ok
}

/// Compare `a` and `b` by squared length.
///
/// `out_result` receives -1, 0 or 1 when `a` is shorter, equal or longer.
///
/// # Safety
/// `a` and `b` must be null or readable; `out_result` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn vec_ops_compare_len2(
    a: *const VecOpsVec3,
    b: *const VecOpsVec3,
    out_result: *mut i32,
) -> VecOpsErrorCode {
    if out_result.is_null() {
        return track_error(&error::DefaultVecOpsError::null_pointer("out_result"));
    }

    let (a, b) = match (read_non_null(a, "a"), read_non_null(b, "b")) {
        (Ok(a), Ok(b)) => (Vec3::from(a), Vec3::from(b)),
        (Err(e), _) | (_, Err(e)) => return track_error(&e),
    };

    *out_result = a.compare_len2(&b);
    clear_last_error();
    VecOpsErrorCode::Ok
}
