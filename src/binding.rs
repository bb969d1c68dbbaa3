//! Rust-facing wrappers over the native routines.
//!
//! Callers use [`hello`] and [`make_sum`] without knowing a C function sits
//! behind them: operands go in as `i64`, results come back as `i64`, and a
//! native failure comes back as a [`BindingError`].

use std::ffi::c_int;
use std::fmt;

use log::debug;

use crate::native::{Native, NativeError};

#[derive(Debug)]
pub enum BindingError {
    /// The native greeting failed.
    Hello(NativeError),
    /// The native addend failed.
    Sum(NativeError),
    /// An operand does not fit in a C `int`; nothing was called.
    Operand { value: i64 },
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::Hello(err) => write!(f, "error calling Hello function: {}", err),
            BindingError::Sum(err) => write!(f, "error calling Sum function: {}", err),
            BindingError::Operand { value } => {
                write!(f, "operand {} does not fit in a native int", value)
            }
        }
    }
}

impl std::error::Error for BindingError {}

/// Calls the native greeting, which prints its line itself.
pub fn hello<N>(native: &N) -> Result<(), BindingError>
where
    N: Native + ?Sized, {
    debug!("calling native Hello");
    native.hello().map_err(BindingError::Hello)
}

/// Adds `a` and `b` with the native addend.
pub fn make_sum<N>(native: &N, a: i64, b: i64) -> Result<i64, BindingError>
where
    N: Native + ?Sized, {
    let a_c = to_native(a)?;
    let b_c = to_native(b)?;

    debug!("calling native sum({}, {})", a_c, b_c);
    let sum = native.sum(a_c, b_c).map_err(BindingError::Sum)?;

    Ok(i64::from(sum))
}

fn to_native(value: i64) -> Result<c_int, BindingError> {
    c_int::try_from(value).map_err(|_| BindingError::Operand { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeNative;

    #[test]
    fn sum_matches_host_addition() {
        let native = FakeNative::default();
        let max = i64::from(c_int::MAX);
        let min = i64::from(c_int::MIN);
        let pairs = [
            (5, 4),
            (0, 0),
            (-5, 4),
            (-1, -1),
            (max, 0),
            (min, 0),
            (max, min),
            (max - 10, 10),
            (min + 10, -10),
            (123_456, -654_321),
        ];

        for (a, b) in pairs {
            assert_eq!(make_sum(&native, a, b).unwrap(), a + b, "{} + {}", a, b);
        }
        assert_eq!(native.sum_calls(), pairs.len());
    }

    #[test]
    fn sum_failure_carries_prefix_and_reason() {
        let native = FakeNative::failing_sum("adder exploded");

        let err = make_sum(&native, 5, 4).unwrap_err();
        assert!(matches!(err, BindingError::Sum(_)));
        assert_eq!(err.to_string(), "error calling Sum function: adder exploded");
    }

    #[test]
    fn hello_failure_carries_prefix_and_reason() {
        let native = FakeNative::failing_hello("stdout closed");

        let err = hello(&native).unwrap_err();
        assert!(matches!(err, BindingError::Hello(_)));
        assert_eq!(err.to_string(), "error calling Hello function: stdout closed");
    }

    #[test]
    fn no_error_without_native_failure() {
        let native = FakeNative::default();
        assert!(hello(&native).is_ok());
        assert!(make_sum(&native, 1, 2).is_ok());

        let native = FakeNative::failing_hello("boom");
        assert!(make_sum(&native, 1, 2).is_ok());

        let native = FakeNative::failing_sum("boom");
        assert!(hello(&native).is_ok());
    }

    #[test]
    fn out_of_range_operand_skips_native_call() {
        let native = FakeNative::default();
        let too_big = i64::from(c_int::MAX) + 1;

        let err = make_sum(&native, too_big, 1).unwrap_err();
        assert!(matches!(err, BindingError::Operand { value } if value == too_big));

        let err = make_sum(&native, 1, i64::from(c_int::MIN) - 1).unwrap_err();
        assert!(matches!(err, BindingError::Operand { .. }));

        assert_eq!(native.sum_calls(), 0);
    }

    #[test]
    fn native_overflow_surfaces_as_sum_error() {
        let native = FakeNative::default();
        let err = make_sum(&native, i64::from(c_int::MAX), 1).unwrap_err();
        match err {
            BindingError::Sum(reason) => assert_eq!(reason.errno(), Some(libc::ERANGE)),
            other => panic!("unexpected error: {}", other),
        }
    }
}
