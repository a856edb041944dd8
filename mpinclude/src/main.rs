//! Main binary entry point for `mpinclude`.
//!
//! Delegates to `entry_point::run_with_args()` so the binary and the
//! integration tests share one code path.

use anyhow::Result;

fn main() -> Result<()> {
    let code = mpinclude::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
