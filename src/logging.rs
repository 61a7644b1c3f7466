//! Log setup for the binary.
//!
//! The terminal is in raw mode on the alternate screen while the game runs, so
//! logs never go to stderr. They go to a file when one is configured and are
//! dropped otherwise.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global logger. A `None` path leaves logging disabled.
pub fn init(log_path: Option<&Path>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;

    log::info!("logging to {}", path.display());
    Ok(())
}
