//! The closed catalog of recognized command-line options.
//!
//! Each option is one [`OptionDescriptor`] row in [`CATALOG`]. The table
//! order is also the order in which help text is emitted.

use std::fmt;

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;

/// Identity of a recognized option, used to dispatch its behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionId {
    Help,
    LocalRootDir,
    RemoteRootDir,
    AuthenticationFile,
    DryRun,
    Delete,
    Checksum,
    IgnoreFile,
    SyncUp,
    SyncDown,
    HtmlReport,
    MaxFileSize,
    HttpChunkSize,
    NetworkNumberOfRetries,
    NetworkSleepBetweenRetries,
    Verbose,
    LogFile,
    NoDelete,
    Doc,
    Sheet,
    Slides,
    Drawing,
}

/// One recognized option.
///
/// At least one of `short` and `long` is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Dispatch tag
    pub id: OptionId,
    /// Short form, e.g. `-l`
    pub short: Option<&'static str>,
    /// Long form, e.g. `--local-dir`
    pub long: Option<&'static str>,
    /// One-line description shown in help
    pub description: &'static str,
    /// Placeholder for the value; presence means the option takes a value
    pub placeholder: Option<&'static str>,
}

impl OptionDescriptor {
    const fn flag(
        id: OptionId,
        short: Option<&'static str>,
        long: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            short,
            long: Some(long),
            description,
            placeholder: None,
        }
    }

    const fn with_value(
        id: OptionId,
        short: Option<&'static str>,
        long: &'static str,
        description: &'static str,
        placeholder: &'static str,
    ) -> Self {
        Self {
            id,
            short,
            long: Some(long),
            description,
            placeholder: Some(placeholder),
        }
    }

    /// Returns true if `token` is exactly this option's short or long form.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.short == Some(token) || self.long == Some(token)
    }

    /// Returns true if the option consumes the following token as its value.
    #[must_use]
    pub const fn takes_value(&self) -> bool {
        self.placeholder.is_some()
    }
}

/// Renders the usage line, e.g. `-l,--local-dir <local-dir>`.
impl fmt::Display for OptionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.short, self.long) {
            (Some(short), Some(long)) => write!(f, "{short},{long}")?,
            (Some(form), None) | (None, Some(form)) => f.write_str(form)?,
            (None, None) => {}
        }
        if let Some(placeholder) = self.placeholder {
            write!(f, " {placeholder}")?;
        }
        Ok(())
    }
}

use OptionDescriptor as D;
use OptionId as Id;

/// All recognized options, in help order.
pub static CATALOG: &[OptionDescriptor] = &[
    D::flag(Id::Help, Some("-h"), "--help", "Prints this help."),
    D::with_value(
        Id::LocalRootDir,
        Some("-l"),
        "--local-dir",
        "Provides the local directory that should be synchronized.",
        "<local-dir>",
    ),
    D::with_value(
        Id::RemoteRootDir,
        Some("-r"),
        "--remote-dir",
        "Provides the remote directory that should be synchronized.",
        "<remote-dir>",
    ),
    D::with_value(
        Id::AuthenticationFile,
        Some("-a"),
        "--authentication-file",
        "Use the given authentication file instead of the default one (~/.drive-sync).",
        "<auth-file>",
    ),
    D::flag(Id::DryRun, None, "--dry-run", "Simulates all synchronization operations (dry run)."),
    D::flag(
        Id::Delete,
        None,
        "--delete",
        "Deletes all files instead of moving them to the trash.",
    ),
    D::flag(
        Id::Checksum,
        Some("-c"),
        "--checksum",
        "Uses MD5 checksums instead of the file's last modification timestamp.",
    ),
    D::with_value(
        Id::IgnoreFile,
        Some("-i"),
        "--ignore-file",
        "Provides a file with newline separated file and/or path name patterns that should be ignored.",
        "<ignore-file>",
    ),
    D::flag(
        Id::SyncUp,
        Some("-u"),
        "--up",
        "Synchronization is performed from the local to the remote side (default).",
    ),
    D::flag(
        Id::SyncDown,
        Some("-d"),
        "--down",
        "Synchronization is performed from the remote to the local side.",
    ),
    D::flag(
        Id::HtmlReport,
        None,
        "--html-report",
        "Creates an HTML report of the synchronization.",
    ),
    D::with_value(
        Id::MaxFileSize,
        Some("-m"),
        "--max-file-size",
        "Provides the maximum file size in MB.",
        "<maxFileSize>",
    ),
    D::with_value(
        Id::HttpChunkSize,
        None,
        "--http-chunk-size",
        "The size of a chunk in MB used for chunked uploads (default: 10MB).",
        "<httpChunkSize>",
    ),
    D::with_value(
        Id::NetworkNumberOfRetries,
        None,
        "--network-number-of-retries",
        "The number of times a request is retried (default: 3).",
        "<retries>",
    ),
    D::with_value(
        Id::NetworkSleepBetweenRetries,
        None,
        "--network-sleep-between-retries",
        "The number of seconds to sleep between retries (default: 10).",
        "<seconds>",
    ),
    D::flag(Id::Verbose, Some("-v"), "--verbose", "Verbose output"),
    D::with_value(
        Id::LogFile,
        None,
        "--log-file",
        "The location of the log file.",
        "<log-file>",
    ),
    D::flag(Id::NoDelete, None, "--no-delete", "Do not delete files."),
    D::with_value(
        Id::Doc,
        None,
        "--doc",
        "Export/import format for documents (default: OpenDocument text).",
        "<mime-type>",
    ),
    D::with_value(
        Id::Sheet,
        None,
        "--sheet",
        "Export/import format for spreadsheets (default: OpenDocument spreadsheet).",
        "<mime-type>",
    ),
    D::with_value(
        Id::Slides,
        None,
        "--slides",
        "Export/import format for presentations (default: OpenDocument presentation).",
        "<mime-type>",
    ),
    D::with_value(
        Id::Drawing,
        None,
        "--drowing",
        "Export/import format for drawings (default: JPEG).",
        "<mime-type>",
    ),
];

/// First line of the help output.
pub const HELP_HEADER: &str = "Available options:";

/// Looks up the descriptor whose short or long form equals `token`.
///
/// Matching is exact: no prefixes, no case folding.
#[must_use]
pub fn resolve(token: &str) -> Option<&'static OptionDescriptor> {
    CATALOG.iter().find(|descriptor| descriptor.matches(token))
}

/// Renders the help text, one entry per option in catalog order.
///
/// Each entry is the usage line followed by a tab-indented description line.
#[must_use]
pub fn render_help() -> Vec<String> {
    std::iter::once(HELP_HEADER.to_string())
        .chain(
            CATALOG
                .iter()
                .map(|descriptor| format!("{descriptor}\n\t{}", descriptor.description)),
        )
        .collect()
}
