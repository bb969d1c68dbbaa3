use std::cell::Cell;
use std::ffi::c_int;
use std::io;

use crate::native::{Native, NativeError};

/// Stands in for the C routines: counts calls and fails on request.
#[derive(Default)]
pub(crate) struct FakeNative {
    fail_hello: Option<&'static str>,
    fail_sum: Option<&'static str>,
    hello_calls: Cell<usize>,
    sum_calls: Cell<usize>,
}

impl FakeNative {
    pub(crate) fn failing_hello(reason: &'static str) -> Self {
        Self {
            fail_hello: Some(reason),
            ..Self::default()
        }
    }

    pub(crate) fn failing_sum(reason: &'static str) -> Self {
        Self {
            fail_sum: Some(reason),
            ..Self::default()
        }
    }

    pub(crate) fn hello_calls(&self) -> usize {
        self.hello_calls.get()
    }

    pub(crate) fn sum_calls(&self) -> usize {
        self.sum_calls.get()
    }
}

impl Native for FakeNative {
    fn hello(&self) -> Result<(), NativeError> {
        self.hello_calls.set(self.hello_calls.get() + 1);
        match self.fail_hello {
            Some(reason) => Err(io::Error::other(reason).into()),
            None => Ok(()),
        }
    }

    fn sum(&self, a: c_int, b: c_int) -> Result<c_int, NativeError> {
        self.sum_calls.set(self.sum_calls.get() + 1);
        if let Some(reason) = self.fail_sum {
            return Err(io::Error::other(reason).into());
        }
        a.checked_add(b).ok_or_else(|| NativeError::from_errno(libc::ERANGE))
    }
}
