//! The validated synchronization options and the builder that accumulates them.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::defaults;
use super::error::CliError;
use super::validators::normalize_remote_root_dir;

/// Direction in which files are synchronized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncDirection {
    /// Local to remote
    #[default]
    Up,
    /// Remote to local
    Down,
}

impl fmt::Display for SyncDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// Fully validated options handed to the synchronization engine.
///
/// Only produced by [`parse_args`](super::parse_args) once every token has
/// been consumed, the local directory is known and the remote directory has
/// been normalized. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct SyncOptions {
    sync_direction: SyncDirection,
    local_root_dir: PathBuf,
    remote_root_dir: Option<String>,
    authentication_file: Option<String>,
    dry_run: bool,
    delete_files: bool,
    no_delete: bool,
    use_checksum: bool,
    verbose: bool,
    html_report: bool,
    ignore_patterns: Vec<String>,
    max_file_size: Option<u64>,
    http_chunk_size: u64,
    network_number_of_attempts: u32,
    network_sleep_between_attempts_ms: u64,
    log_file: Option<PathBuf>,
    doc_mime_type: Option<String>,
    drawing_mime_type: Option<String>,
}

impl SyncOptions {
    /// Direction of the synchronization.
    #[must_use]
    pub const fn sync_direction(&self) -> SyncDirection {
        self.sync_direction
    }

    /// Local directory to synchronize.
    #[must_use]
    pub fn local_root_dir(&self) -> &Path {
        &self.local_root_dir
    }

    /// Remote directory to synchronize, normalized (no leading slash,
    /// forward slashes only).
    #[must_use]
    pub fn remote_root_dir(&self) -> Option<&str> {
        self.remote_root_dir.as_deref()
    }

    /// Authentication file as given on the command line.
    #[must_use]
    pub fn authentication_file(&self) -> Option<&str> {
        self.authentication_file.as_deref()
    }

    /// Authentication file, falling back to `~/.drive-sync`.
    #[must_use]
    pub fn authentication_file_or_default(&self) -> Option<PathBuf> {
        self.authentication_file
            .as_ref()
            .map(PathBuf::from)
            .or_else(defaults::authentication_file)
    }

    /// Simulate all operations.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Delete files instead of moving them to the trash.
    #[must_use]
    pub const fn delete_files(&self) -> bool {
        self.delete_files
    }

    /// Never delete files.
    #[must_use]
    pub const fn no_delete(&self) -> bool {
        self.no_delete
    }

    /// Compare by checksum instead of modification time.
    #[must_use]
    pub const fn use_checksum(&self) -> bool {
        self.use_checksum
    }

    /// Verbose output.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Produce an HTML report.
    #[must_use]
    pub const fn html_report(&self) -> bool {
        self.html_report
    }

    /// Raw ignore patterns, one per line of the ignore file.
    #[must_use]
    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignore_patterns
    }

    /// Maximum file size in bytes.
    #[must_use]
    pub const fn max_file_size(&self) -> Option<u64> {
        self.max_file_size
    }

    /// Chunk size for chunked uploads in bytes (a multiple of 256).
    #[must_use]
    pub const fn http_chunk_size(&self) -> u64 {
        self.http_chunk_size
    }

    /// Number of attempts for a failed network request.
    #[must_use]
    pub const fn network_number_of_attempts(&self) -> u32 {
        self.network_number_of_attempts
    }

    /// Pause between network attempts in milliseconds.
    #[must_use]
    pub const fn network_sleep_between_attempts_ms(&self) -> u64 {
        self.network_sleep_between_attempts_ms
    }

    /// Pause between network attempts.
    #[must_use]
    pub const fn network_sleep_between_attempts(&self) -> Duration {
        Duration::from_millis(self.network_sleep_between_attempts_ms)
    }

    /// Log file, already created and writable.
    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Export format shared by documents, spreadsheets and presentations.
    ///
    /// `--doc`, `--sheet` and `--slides` all write this value; the last one
    /// on the command line wins.
    #[must_use]
    pub fn doc_mime_type(&self) -> Option<&str> {
        self.doc_mime_type.as_deref()
    }

    /// Export format for drawings.
    #[must_use]
    pub fn drawing_mime_type(&self) -> Option<&str> {
        self.drawing_mime_type.as_deref()
    }

    /// Effective document export format.
    #[must_use]
    pub fn effective_doc_mime_type(&self) -> &str {
        self.doc_mime_type().unwrap_or(defaults::DOC_MIME_TYPE)
    }

    /// Effective spreadsheet export format.
    #[must_use]
    pub fn effective_sheet_mime_type(&self) -> &str {
        self.doc_mime_type().unwrap_or(defaults::SHEET_MIME_TYPE)
    }

    /// Effective presentation export format.
    #[must_use]
    pub fn effective_slides_mime_type(&self) -> &str {
        self.doc_mime_type().unwrap_or(defaults::SLIDES_MIME_TYPE)
    }

    /// Effective drawing export format.
    #[must_use]
    pub fn effective_drawing_mime_type(&self) -> &str {
        self.drawing_mime_type().unwrap_or(defaults::DRAWING_MIME_TYPE)
    }
}

impl fmt::Display for SyncOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let log_file_str = self
            .log_file
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Options {{ direction: {}, local: {}, remote: {}, dry_run: {}, delete: {}, \
             no_delete: {}, checksum: {}, ignore_patterns: {}, max_file_size: {}, \
             chunk: {}B, retries: {}x/{}ms, log_file: {} }}",
            self.sync_direction,
            self.local_root_dir.display(),
            self.remote_root_dir.as_deref().unwrap_or("/"),
            self.dry_run,
            self.delete_files,
            self.no_delete,
            self.use_checksum,
            self.ignore_patterns.len(),
            self.max_file_size
                .map_or_else(|| "none".to_string(), |size| format!("{size}B")),
            self.http_chunk_size,
            self.network_number_of_attempts,
            self.network_sleep_between_attempts_ms,
            log_file_str,
        )
    }
}

/// In-progress options, exclusively owned by the dispatcher during the scan.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub(super) struct OptionsBuilder {
    pub sync_direction: SyncDirection,
    pub local_root_dir: Option<PathBuf>,
    pub remote_root_dir: Option<String>,
    pub authentication_file: Option<String>,
    pub dry_run: bool,
    pub delete_files: bool,
    pub no_delete: bool,
    pub use_checksum: bool,
    pub verbose: bool,
    pub html_report: bool,
    pub ignore_patterns: Vec<String>,
    pub max_file_size: Option<u64>,
    pub http_chunk_size: u64,
    pub network_number_of_attempts: u32,
    pub network_sleep_between_attempts_ms: u64,
    pub log_file: Option<PathBuf>,
    pub doc_mime_type: Option<String>,
    pub drawing_mime_type: Option<String>,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self {
            sync_direction: SyncDirection::default(),
            local_root_dir: None,
            remote_root_dir: None,
            authentication_file: None,
            dry_run: false,
            delete_files: false,
            no_delete: false,
            use_checksum: false,
            verbose: false,
            html_report: false,
            ignore_patterns: Vec::new(),
            max_file_size: None,
            http_chunk_size: defaults::http_chunk_size_bytes(),
            network_number_of_attempts: defaults::NETWORK_NUMBER_OF_ATTEMPTS,
            network_sleep_between_attempts_ms: defaults::network_sleep_between_attempts_ms(),
            log_file: None,
            doc_mime_type: None,
            drawing_mime_type: None,
        }
    }
}

impl OptionsBuilder {
    /// Checks mandatory fields, normalizes the remote directory and freezes
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if no local directory was given.
    pub fn build(self) -> Result<SyncOptions, CliError> {
        let local_root_dir = self.local_root_dir.ok_or_else(|| {
            CliError::invalid("Please specify the local directory to synchronize.")
        })?;

        Ok(SyncOptions {
            sync_direction: self.sync_direction,
            local_root_dir,
            remote_root_dir: self.remote_root_dir.as_deref().map(normalize_remote_root_dir),
            authentication_file: self.authentication_file,
            dry_run: self.dry_run,
            delete_files: self.delete_files,
            no_delete: self.no_delete,
            use_checksum: self.use_checksum,
            verbose: self.verbose,
            html_report: self.html_report,
            ignore_patterns: self.ignore_patterns,
            max_file_size: self.max_file_size,
            http_chunk_size: self.http_chunk_size,
            network_number_of_attempts: self.network_number_of_attempts,
            network_sleep_between_attempts_ms: self.network_sleep_between_attempts_ms,
            log_file: self.log_file,
            doc_mime_type: self.doc_mime_type,
            drawing_mime_type: self.drawing_mime_type,
        })
    }
}
