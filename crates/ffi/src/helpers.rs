use crate::error::{with_last_error_mut, DefaultVecOpsError, VecOpsError, VecOpsErrorCode};
use crate::vector::VecOpsVec3;
use std::ffi::CString;
use std::ptr;
use vec_ops_core::Vec3;

/// Set the thread-local error message and code.
/// Accepts any type implementing `VecOpsError` trait.
pub(crate) fn set_last_error(error: &impl VecOpsError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl VecOpsError) -> VecOpsErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = VecOpsErrorCode::Ok;
    });
}

/// Copy a C struct out of a pointer that must be non-null.
///
/// No reference to the pointee is created, so `ptr` may alias any other
/// argument of the same call.
///
/// # Safety
/// `ptr` must be null or valid for reads.
pub(crate) unsafe fn read_non_null<T: Copy>(
    ptr: *const T,
    param_name: &str,
) -> Result<T, DefaultVecOpsError> {
    if ptr.is_null() {
        return Err(DefaultVecOpsError::null_pointer(param_name));
    }
    Ok(ptr::read(ptr))
}

/// Apply `op` to a copy of the vector behind `v`, write it back and hand the
/// same pointer back.
///
/// The receiver is copied in and out with raw reads and writes, so operands
/// read inside `op` may point at the same vector (`v += v`).
/// On failure the error is recorded, null is returned and `v` is untouched.
///
/// # Safety
/// `v` must be null or valid for reads and writes.
pub(crate) unsafe fn mutate_in_place<F>(v: *mut VecOpsVec3, op: F) -> *mut VecOpsVec3
where
    F: FnOnce(&mut Vec3) -> Result<(), DefaultVecOpsError>,
{
    let mut vec = match read_non_null(v.cast_const(), "v") {
        Ok(target) => Vec3::from(target),
        Err(e) => {
            set_last_error(&e);
            return ptr::null_mut();
        }
    };

    if let Err(e) = op(&mut vec) {
        set_last_error(&e);
        return ptr::null_mut();
    }

    ptr::write(v, vec.into());
    clear_last_error();
    v
}
