//! Log setup.
//!
//! The terminal is busy showing the board, so logs only go to a file, and only
//! when a log path is configured. `RUST_LOG` filters as usual (default `info`).

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file subscriber for `path`. Without a path, logging stays off.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
