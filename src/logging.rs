//! Logging setup
//!
//! The terminal owns stdout, so `tracing` output goes to a file next to the
//! config. The filter comes from `BISTRO_LOG`, falling back to the configured
//! level.

use crate::config::Config;
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BISTRO_LOG";

pub fn log_path() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join("bistro-tui.log"))
}

/// Install the global subscriber
///
/// Returns the log file path, or `None` when no file could be opened (logging
/// is then disabled).
pub fn init(default_level: &str) -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = File::create(&path).ok()?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(path)
}
