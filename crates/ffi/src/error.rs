use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// This trait provides a unified way to handle errors across the FFI boundary,
/// pairing the code handed back to C with a diagnostic message.
///
/// For example, `DefaultVecOpsError::null_pointer("v")` has the code
/// `VecOpsErrorCode::NullPointer` and the message `Parameter 'v' cannot be null`.
pub(crate) trait VecOpsError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> VecOpsErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `VecOpsError` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultVecOpsError {
    code: VecOpsErrorCode,
    msg: String,
}

impl DefaultVecOpsError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"v"`, `"out_x"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: VecOpsErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl VecOpsError for DefaultVecOpsError {
    fn code(&self) -> VecOpsErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VecOpsErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is kept here so the pointer handed to C stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, VecOpsErrorCode)> = const { RefCell::new((None, VecOpsErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, VecOpsErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, VecOpsErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread sees only its own failures.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// if (vec_ops_negate(v) == NULL) {
///     const char* error = vec_ops_get_last_error();
///     if (error) {
///         printf("negate failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn vec_ops_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `VecOpsErrorCode::Ok` (0) if the last call on this thread succeeded.
///
/// ```rust
/// use std::ptr;
/// use vec_ops_ffi::{vec_ops_get_last_error_code, vec_ops_negate, VecOpsErrorCode};
///
/// let result = unsafe { vec_ops_negate(ptr::null_mut()) };
/// assert!(result.is_null());
/// assert_eq!(vec_ops_get_last_error_code(), VecOpsErrorCode::NullPointer);
/// ```
#[no_mangle]
pub extern "C" fn vec_ops_get_last_error_code() -> VecOpsErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
