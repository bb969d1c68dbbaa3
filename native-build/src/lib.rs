//! # native-build
//!
//! Compiles a small C library from `build.rs` without CMake or any other
//! build system, only a C compiler and `ar`.
//!
//! The sources are listed in a `native.json` manifest next to them:
//!
//! ```json
//! { "library": "hellosum", "sources": ["hello.c", "sum.c"], "flags": ["-std=c99"] }
//! ```
//!
//! The compiler is taken from `$CC` when set, otherwise the first of `cc`,
//! `gcc` or `clang` on `PATH`. The archiver is `$AR` or `ar`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use native_build::Cmd;
//!
//! let out_dir = std::env::var("OUT_DIR").unwrap();
//!
//! let library = Cmd::default()
//!     .set_path("native")
//!     .set_output_path(format!("{}/native-out", out_dir))
//!     .add_define("NDEBUG")
//!     .build()
//!     .unwrap();
//!
//! println!("cargo::rustc-link-search=native={}", library.dir().display());
//! println!("cargo::rustc-link-lib=static={}", library.name());
//! ```

pub mod cmd;
pub mod manifest;

pub use cmd::{Cmd, ExecResult, Library};
pub use manifest::NativeManifest;
