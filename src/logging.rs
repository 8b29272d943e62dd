//! Logging configuration for dbsql-bridge.
//!
//! Stdout carries the MCP protocol stream, so logs must never go there.
//! Default is stderr (MCP clients capture it); a file target is available
//! for clients that discard stderr.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Initializes logging to stderr.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Initializes logging to the given file.
///
/// Falls back to no logging if the file cannot be created, rather than
/// writing to stdout and corrupting the protocol stream.
pub fn init_file_logging(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return;
        }
    }

    let log_file = match File::create(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file: {e}");
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();
}

/// Returns the default log file path.
///
/// Uses the XDG state directory on Linux (`~/.local/state/dbsql-bridge/`),
/// falling back to the config directory, then the temp directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("dbsql-bridge").join("dbsql-bridge.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("dbsql-bridge").join("dbsql-bridge.log");
    }

    std::env::temp_dir().join("dbsql-bridge.log")
}
