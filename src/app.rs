use std::io::Write;

use anyhow::{Context, Result};
use log::debug;

use crate::binding::{hello, make_sum};
use crate::native::Native;

pub const LEFT: i64 = 5;
pub const RIGHT: i64 = 4;

/// Greets, then adds [`LEFT`] and [`RIGHT`] and writes the sum to `out`.
///
/// Stops at the first failing step; the sum line is only written once both
/// native calls succeeded.
pub fn run<N, W>(native: &N, out: &mut W) -> Result<()>
where
    N: Native + ?Sized,
    W: Write, {
    hello(native)?;

    let res = make_sum(native, LEFT, RIGHT)?;
    debug!("native sum returned {}", res);

    writeln!(out, "Sum of {} + {} is {}", LEFT, RIGHT, res).context("failed to write the sum")?;
    out.flush().context("failed to flush the sum")?;

    Ok(())
}
