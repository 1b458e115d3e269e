//! Error types for command-line parsing and validation.

use std::process::ExitCode;

use thiserror::Error;

/// Discriminator for the ways a parse can end without a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Unknown option, missing or malformed value, or a supplied path that
    /// failed validation.
    InvalidCliParameter,
    /// A filesystem operation failed for reasons unrelated to input validity.
    IoFailure,
    /// Intentional successful early exit (help was printed).
    NormalTermination,
}

impl Reason {
    /// Process exit code the binary reports for this reason.
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::NormalTermination => ExitCode::SUCCESS,
            Self::InvalidCliParameter | Self::IoFailure => ExitCode::FAILURE,
        }
    }

    /// Returns true if the process should exit successfully.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::NormalTermination)
    }
}

/// Error type for command-line parsing.
///
/// Any error aborts the parse; no partially built configuration is exposed.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line itself is invalid.
    #[error("{message}")]
    InvalidParameter {
        /// Human-readable description, naming the offending token or path
        message: String,
    },

    /// A filesystem operation needed to validate an option failed.
    #[error("{message}")]
    Io {
        /// Human-readable description, naming the path involved
        message: String,
        /// Underlying I/O error, if any
        #[source]
        source: Option<std::io::Error>,
    },
}

impl CliError {
    /// Creates an `InvalidParameter` error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates the error reported when an option's value is absent.
    #[must_use]
    pub fn missing_argument(option: &str) -> Self {
        Self::invalid(format!("Missing argument for option '{option}'."))
    }

    /// Creates the error reported when an option's value is not an integer.
    #[must_use]
    pub fn not_an_integer(option: &str) -> Self {
        Self::invalid(format!("Argument for option '{option}' is not an integer."))
    }

    /// Creates the error reported when an option's value is out of range.
    #[must_use]
    pub fn out_of_range(option: &str, constraint: &str) -> Self {
        Self::invalid(format!("Argument for option '{option}' {constraint}."))
    }

    /// Returns the reason tag for this error.
    #[must_use]
    pub const fn reason(&self) -> Reason {
        match self {
            Self::InvalidParameter { .. } => Reason::InvalidCliParameter,
            Self::Io { .. } => Reason::IoFailure,
        }
    }
}
