//! Configuration constants and utilities for hexitor
//!
//! Screen layout constants plus the environment variables that control logging.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Column where the hex pane starts
pub const HEX_PANE_LEFT: usize = 10;

/// Row where the hex pane starts; the status line sits just above it
pub const HEX_PANE_TOP: usize = 3;

/// Columns left free around both panes
pub const HORIZONTAL_MARGIN: usize = 20;

/// Rows between the hex pane and the detail pane
pub const DETAIL_PANE_GAP: usize = 3;

/// Detail pane rows: nine value lines plus the box border
pub const DETAIL_PANE_HEIGHT: usize = 11;

/// Default log file, written to the working directory
pub const DEFAULT_LOG_PATH: &str = "hexitor.log";

/// Environment variable name for overriding the log file path
pub const LOG_PATH_ENV_VAR: &str = "HEXITOR_LOG_FILE";

/// Environment variable name for the log filter directive
pub const LOG_LEVEL_ENV_VAR: &str = "HEXITOR_LOG_LEVEL";

/// Get the log file path, checking environment variable first.
///
/// Returns `None` when logging is not requested at all.
pub fn get_log_path(verbose: bool) -> Option<PathBuf> {
    match std::env::var_os(LOG_PATH_ENV_VAR) {
        Some(val) if !val.is_empty() => Some(PathBuf::from(val)),
        _ if verbose => Some(PathBuf::from(DEFAULT_LOG_PATH)),
        _ => None,
    }
}

/// Get the log filter directive, defaulting by verbosity
pub fn get_log_level(verbose: bool) -> String {
    std::env::var(LOG_LEVEL_ENV_VAR)
        .ok()
        .filter(|level| !level.trim().is_empty())
        .unwrap_or_else(|| if verbose { "info" } else { "error" }.to_string())
        .to_lowercase()
}

/// Install the file-backed tracing subscriber.
///
/// The terminal belongs to the editor while it runs, so logs only go to a file.
/// Returns whether this call installed the subscriber.
pub fn init_tracing(verbose: bool) -> Result<bool> {
    let Some(path) = get_log_path(verbose) else {
        return Ok(false);
    };

    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_new(get_log_level(verbose)).unwrap_or_else(|_| EnvFilter::new("error"));

    // A second initialisation (e.g. from tests) keeps the first subscriber
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Logging to {}", path.display());
    }
    Ok(installed)
}
