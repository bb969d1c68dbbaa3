//! The seam between Rust and the C routines in `native/`.
//!
//! The C side reports failure the C way, through `errno`. Every call clears
//! `errno`, makes the call, and turns a nonzero `errno` into a
//! [`NativeError`].

use std::ffi::c_int;
use std::fmt;
use std::io;

unsafe extern "C" {
    // Prints "Hello World" to stdout.
    #[link_name = "Hello"]
    fn native_hello();

    // Returns the sum of two integers, ERANGE on overflow.
    #[link_name = "sum"]
    fn native_sum(a: c_int, b: c_int) -> c_int;
}

/// The native routines the bindings call into.
pub trait Native {
    fn hello(&self) -> Result<(), NativeError>;
    fn sum(&self, a: c_int, b: c_int) -> Result<c_int, NativeError>;
}

/// The routines compiled from `native/` and linked by the build script.
#[derive(Debug, Default, Clone, Copy)]
pub struct CNative;

impl Native for CNative {
    fn hello(&self) -> Result<(), NativeError> {
        clear_errno();
        unsafe { native_hello() };
        check_errno()
    }

    fn sum(&self, a: c_int, b: c_int) -> Result<c_int, NativeError> {
        clear_errno();
        let sum = unsafe { native_sum(a, b) };
        check_errno()?;
        Ok(sum)
    }
}

/// Why a native call failed.
#[derive(Debug)]
pub struct NativeError(io::Error);

impl NativeError {
    pub fn from_errno(code: c_int) -> Self {
        Self(io::Error::from_raw_os_error(code))
    }

    /// The `errno` value the call left behind, if the failure came from C.
    pub fn errno(&self) -> Option<c_int> {
        self.0.raw_os_error()
    }
}

impl From<io::Error> for NativeError {
    fn from(err: io::Error) -> Self {
        Self(err)
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for NativeError {}

fn clear_errno() {
    // errno is thread local and its location is always valid
    unsafe { *errno_location() = 0 };
}

// Must run before anything else that can touch errno, logging included.
fn check_errno() -> Result<(), NativeError> {
    let err = io::Error::last_os_error();
    match err.raw_os_error() {
        None | Some(0) => Ok(()),
        Some(_) => Err(NativeError(err)),
    }
}

#[cfg(any(target_os = "linux", target_os = "emscripten"))]
unsafe fn errno_location() -> *mut c_int {
    unsafe { libc::__errno_location() }
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
unsafe fn errno_location() -> *mut c_int {
    unsafe { libc::__error() }
}

#[cfg(any(target_os = "android", target_os = "netbsd", target_os = "openbsd"))]
unsafe fn errno_location() -> *mut c_int {
    unsafe { libc::__errno() }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "emscripten",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "android",
    target_os = "netbsd",
    target_os = "openbsd"
)))]
compile_error!("unsupported target: no known errno location for native calls");
