//! Logger setup for the binary.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Send diagnostics to stderr so they never interleave with the menu on
/// stdout. `RUST_LOG` overrides the default `warn` level.
pub fn init() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .context("failed to initialise logging")
}
