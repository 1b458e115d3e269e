//! drive-sync: directory synchronization front end
//!
//! Entry point for the drive-sync application.

use std::io;
use std::process::ExitCode;

use drive_sync::config::{ParseOutcome, parse_args};

mod app;

use app::{exit_code, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let outcome = parse_args(&args, &mut io::stdout().lock());

    match outcome {
        Ok(ParseOutcome::Run(options)) => {
            setup_tracing(options.verbose(), options.log_file());
            // Parse-time events are emitted before the subscriber exists.
            tracing::debug!(arguments = args.len(), "Command line accepted");
            tracing::info!("{options}");
            // The synchronization engine takes over from here.
            exit_code::SUCCESS
        }
        Ok(ParseOutcome::Help) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            exit_code::CONFIG_ERROR
        }
    }
}
