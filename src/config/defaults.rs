//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::path::PathBuf;
use std::time::Duration;

/// Number of bytes in one (binary) megabyte.
pub const MB: u64 = 1024 * 1024;

/// HTTP upload chunks must be a multiple of this many bytes.
pub const HTTP_CHUNK_ALIGNMENT: u64 = 256;

/// Default HTTP chunk size in megabytes.
pub const HTTP_CHUNK_SIZE_MB: u64 = 10;

/// Default number of attempts for a failed network request.
pub const NETWORK_NUMBER_OF_ATTEMPTS: u32 = 3;

/// Default pause between network attempts in seconds.
pub const NETWORK_SLEEP_BETWEEN_ATTEMPTS_SECS: u64 = 10;

/// Export/import format for documents.
pub const DOC_MIME_TYPE: &str = "application/vnd.oasis.opendocument.text";

/// Export/import format for spreadsheets.
pub const SHEET_MIME_TYPE: &str = "application/x-vnd.oasis.opendocument.spreadsheet";

/// Export/import format for presentations.
pub const SLIDES_MIME_TYPE: &str = "application/vnd.oasis.opendocument.presentation";

/// Export/import format for drawings.
pub const DRAWING_MIME_TYPE: &str = "image/jpeg";

/// File name of the authentication file inside the home directory.
pub const AUTHENTICATION_FILE_NAME: &str = ".drive-sync";

/// Default HTTP chunk size in bytes.
#[must_use]
pub const fn http_chunk_size_bytes() -> u64 {
    HTTP_CHUNK_SIZE_MB * MB
}

/// Default pause between network attempts in milliseconds.
#[must_use]
pub const fn network_sleep_between_attempts_ms() -> u64 {
    NETWORK_SLEEP_BETWEEN_ATTEMPTS_SECS * 1000
}

/// Default pause between network attempts as Duration.
#[must_use]
pub const fn network_sleep() -> Duration {
    Duration::from_secs(NETWORK_SLEEP_BETWEEN_ATTEMPTS_SECS)
}

/// Default authentication file (`~/.drive-sync`).
///
/// Returns `None` when the home directory cannot be determined.
#[must_use]
pub fn authentication_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(AUTHENTICATION_FILE_NAME))
}
