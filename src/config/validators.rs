//! Per-option coercion and validation.
//!
//! Numeric validators take the option token as well as the value so that
//! their errors name the option the user typed.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::defaults;
use super::error::CliError;

#[cfg(test)]
#[path = "validators_tests.rs"]
mod tests;

/// Validates the local root directory: it must exist, be readable and be a
/// directory, checked in that order.
///
/// # Errors
///
/// Returns `InvalidParameter` naming the path and the violated condition.
pub fn local_root_dir(value: &str) -> Result<PathBuf, CliError> {
    let path = PathBuf::from(value);

    let metadata = fs::metadata(&path)
        .map_err(|_| CliError::invalid(format!("'{value}' does not exist.")))?;

    if !is_readable(&path, metadata.is_dir()) {
        return Err(CliError::invalid(format!("Directory '{value}' is not readable.")));
    }

    if !metadata.is_dir() {
        return Err(CliError::invalid(format!("'{value}' is not a directory.")));
    }

    Ok(path)
}

fn is_readable(path: &Path, is_dir: bool) -> bool {
    if is_dir {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}

/// Parses the maximum file size in megabytes and converts it to bytes.
///
/// # Errors
///
/// Returns `InvalidParameter` if the value is not an integer, is not
/// positive, or overflows when converted to bytes.
pub fn max_file_size(option: &str, value: &str) -> Result<u64, CliError> {
    let megabytes = parse_i64(option, value)?;
    if megabytes <= 0 {
        return Err(CliError::out_of_range(option, "must be greater than 0"));
    }
    megabytes_to_bytes(option, megabytes)
}

/// Parses the HTTP chunk size in megabytes and converts it to bytes, rounded
/// down to a multiple of 256.
///
/// # Errors
///
/// Returns `InvalidParameter` if the value is not an integer or not positive.
pub fn http_chunk_size(option: &str, value: &str) -> Result<u64, CliError> {
    let megabytes = parse_i64(option, value)?;
    if megabytes <= 0 {
        return Err(CliError::out_of_range(option, "must be greater than 0"));
    }
    let bytes = megabytes_to_bytes(option, megabytes)?;
    Ok(bytes / defaults::HTTP_CHUNK_ALIGNMENT * defaults::HTTP_CHUNK_ALIGNMENT)
}

/// Parses the number of network attempts. Zero is allowed.
///
/// # Errors
///
/// Returns `InvalidParameter` if the value is not an integer or negative.
pub fn network_number_of_attempts(option: &str, value: &str) -> Result<u32, CliError> {
    let attempts = parse_i32(option, value)?;
    u32::try_from(attempts).map_err(|_| CliError::out_of_range(option, "must not be negative"))
}

/// Parses the pause between network attempts in seconds and returns it in
/// milliseconds.
///
/// # Errors
///
/// Returns `InvalidParameter` if the value is not an integer or not positive.
pub fn network_sleep_between_attempts(option: &str, value: &str) -> Result<u64, CliError> {
    let seconds = parse_i32(option, value)?;
    if seconds <= 0 {
        return Err(CliError::out_of_range(option, "must be greater than 0"));
    }
    Ok(u64::from(seconds.unsigned_abs()) * 1000)
}

/// Validates the log file path, creating an empty file if it is missing.
///
/// # Errors
///
/// Returns `InvalidParameter` if the path is a directory, and `Io` if the
/// file cannot be created or is not writable.
pub fn log_file(option: &str, value: &str) -> Result<PathBuf, CliError> {
    let path = PathBuf::from(value);

    if path.is_dir() {
        return Err(CliError::invalid(format!(
            "Argument for option '{option}' is a directory, not a file."
        )));
    }

    if !path.exists() {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| CliError::Io {
                message: format!("Failed to create log file '{}': {e}", path.display()),
                source: Some(e),
            })?;
        tracing::debug!(path = %path.display(), "Created log file");
    }

    if OpenOptions::new().append(true).open(&path).is_err() {
        return Err(CliError::Io {
            message: format!("Log file '{}' is not writable.", path.display()),
            source: None,
        });
    }

    Ok(path)
}

/// Loads the ignore file, returning its lines verbatim and in order.
///
/// Lines end at `\r\n`, `\n` or a lone `\r`; terminators are stripped and
/// no other filtering is applied.
///
/// # Errors
///
/// Returns `InvalidParameter` if the file does not exist or cannot be read
/// as text.
pub fn ignore_file(value: &str) -> Result<Vec<String>, CliError> {
    let path = Path::new(value);

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CliError::invalid(format!("'{value}' does not exist.")),
        _ => CliError::invalid(format!("Failed to read file '{value}': {e}")),
    })?;

    Ok(split_lines(&content))
}

fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while let Some(end) = rest.find(['\r', '\n']) {
        lines.push(rest[..end].to_string());
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_string());
    }

    lines
}

/// Canonicalizes a remote directory: trims surrounding whitespace and control
/// characters (anything up to and including a space), turns
/// backslashes into forward slashes and strips one leading slash.
///
/// Applying it to an already normalized value returns the value unchanged.
#[must_use]
pub fn normalize_remote_root_dir(value: &str) -> String {
    let normalized = value.trim_matches(|c: char| c <= ' ').replace('\\', "/");
    match normalized.strip_prefix('/') {
        Some(rest) => rest.to_string(),
        None => normalized,
    }
}

fn parse_i64(option: &str, value: &str) -> Result<i64, CliError> {
    value
        .parse::<i64>()
        .map_err(|_| CliError::not_an_integer(option))
}

fn parse_i32(option: &str, value: &str) -> Result<i32, CliError> {
    value
        .parse::<i32>()
        .map_err(|_| CliError::not_an_integer(option))
}

fn megabytes_to_bytes(option: &str, megabytes: i64) -> Result<u64, CliError> {
    u64::try_from(megabytes)
        .ok()
        .and_then(|mb| mb.checked_mul(defaults::MB))
        .ok_or_else(|| CliError::out_of_range(option, "is too large"))
}
