//! Diagnostic logging.
//!
//! The chat screen owns stdout, so log records only ever go to a file named on
//! the command line. Without one, no subscriber is installed and `tracing`
//! macros are no-ops.

use std::error::Error;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn open_log_file(path: &Path) -> Result<File, Box<dyn Error>> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open log file {}: {e}", path.display()).into())
}

/// `RUST_LOG` wins when set and valid; otherwise `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to `log_file`. Returns whether one
/// was installed.
pub fn init_logging(log_file: Option<&Path>) -> Result<bool, Box<dyn Error>> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| -> Box<dyn Error> { e })?;

    tracing::info!(log_file = %path.display(), "logging started");
    Ok(true)
}
