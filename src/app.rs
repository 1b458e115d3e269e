//! Application startup and utilities.
//!
//! This module contains exit codes and tracing setup that support the main
//! entry point.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0) - options accepted or help printed.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid option or value, or a
    /// filesystem failure while validating one.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to `log_file` when given (without ANSI colors), otherwise to
/// stderr. `RUST_LOG` overrides the level chosen from `verbose`.
pub fn setup_tracing(verbose: bool, log_file: Option<&Path>) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let file = log_file.and_then(|path| match OpenOptions::new().append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Cannot open log file '{}': {e}", path.display());
            None
        }
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match file {
        Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
}
