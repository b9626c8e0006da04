//! FFI layer – C ABI entry points for hosts that link the library directly.
//!
//! Pointer helpers and the argument-guard macro shared by the sub-modules
//! live here.

use std::ffi::{c_char, c_int, CStr};
use std::path::Path;

use han_core::table::{ComponentTable, Script};

pub mod translit;


pub use translit::*;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Bytes of a NUL-terminated C string, terminator excluded. No UTF-8
/// validation is done. Returns `None` if the pointer is null.
pub(crate) unsafe fn cptr_to_bytes<'a>(ptr: *const c_char) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_bytes())
}

/// View a caller-owned output buffer of `len` units as a mutable slice.
/// A zero length yields an empty slice even for a null pointer; a null
/// pointer with a positive length yields `None`.
pub(crate) unsafe fn out_slice<'a, T>(ptr: *mut T, len: usize) -> Option<&'a mut [T]> {
    if len == 0 {
        return Some(&mut []);
    }
    if ptr.is_null() {
        return None;
    }
    Some(std::slice::from_raw_parts_mut(ptr, len))
}

/// Convert a C capacity argument to a unit count. Negative values count as
/// zero.
pub(crate) fn capacity(len: c_int) -> usize {
    usize::try_from(len).unwrap_or(0)
}

/// Convert a length to the C return type, saturating at `c_int::MAX`.
pub(crate) fn to_c_len(len: usize) -> c_int {
    c_int::try_from(len).unwrap_or(c_int::MAX)
}

// ---------------------------------------------------------------------------
// FFI boilerplate-reduction macro (crate-internal)
// ---------------------------------------------------------------------------

/// Validate one or more FFI arguments and bind them as safe Rust values,
/// returning `$on_err` from the **calling** function if any check fails.
///
/// # Supported argument forms
///
/// | Syntax | What it does |
/// |--------|--------------|
/// | `str: $name = $ptr` | Null-check `$ptr: *const c_char`, convert via [`cptr_to_str`] to `&str`, bind as `$name`. |
/// | `bytes: $name = $ptr` | Null-check `$ptr: *const c_char`, bind its bytes up to the terminator as `$name: &[u8]`. |
/// | `buf: $name = ($ptr, $len)` | Bind `$len` units at `$ptr: *mut T` as `$name: &mut [T]` via [`out_slice`]. |
///
/// # Examples
///
/// ```ignore
/// ffi_guard!(-1;
///     bytes: input = input_ptr,
///     buf:   out   = (out_ptr as *mut u8, capacity(out_len)),
/// );
/// ```
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; bytes: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_bytes($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; buf: $name:ident = ($ptr:expr, $len:expr) , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::out_slice($ptr, $len) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

// Make the macro available to sub-modules.
pub(crate) use ffi_guard;

// --- Top-level FFI functions ---

#[no_mangle]
pub extern "C" fn han_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Install a custom component table for `script` (0 = Latin, 1 = Cyrillic)
/// from the TOML file at `path`. Must run before the first transliteration
/// in that script. Returns 0 on success, -1 on any error.
#[no_mangle]
pub extern "C" fn han_tables_load_config(script: u8, path: *const c_char) -> c_int {
    ffi_guard!(-1;
        str: path_str = path,
    );
    let Some(script) = Script::from_id(script) else {
        return -1;
    };
    let Ok(content) = std::fs::read_to_string(path_str) else {
        return -1;
    };
    match ComponentTable::init_custom(script, content) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn han_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}
