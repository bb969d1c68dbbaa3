//! # native-hello
//!
//! Calls two C routines from Rust: a greeting that prints `Hello World` and
//! an adder. Each is wrapped in a function that converts its operands
//! across the boundary and turns a native failure into a Rust error, so
//! callers never deal with `c_int` or `errno`.
//!
//! ```no_run
//! use native_hello::{CNative, binding};
//!
//! binding::hello(&CNative).unwrap();
//! let sum = binding::make_sum(&CNative, 5, 4).unwrap();
//! assert_eq!(sum, 9);
//! ```
//!
//! The C sources live under `native/` and are compiled by the build script.

pub mod app;
pub mod binding;
pub mod native;

#[cfg(test)]
mod fake;

pub use app::run;
pub use binding::BindingError;
pub use native::{CNative, Native, NativeError};
