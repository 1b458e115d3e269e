//! Command-line layer for drive-sync.
//!
//! This module provides:
//! - The catalog of recognized options ([`catalog`])
//! - The single-pass parser ([`parse_args`], [`ParseOutcome`])
//! - Per-option validators ([`validators`])
//! - The validated result ([`SyncOptions`])
//! - Default values ([`defaults`])
//!
//! # Parsing model
//!
//! Tokens are matched exactly against the catalog. Options that take a value
//! consume the following token, which must not itself be a recognized option.
//! Flags are idempotent; for `--up`/`--down` the last one wins.
//!
//! After all tokens are consumed the local directory is checked for presence
//! and the remote directory is normalized. The parse then yields
//! [`ParseOutcome::Run`].
//!
//! # Help
//!
//! `-h`/`--help` writes the catalog to the caller's output sink and yields
//! [`ParseOutcome::Help`]. Tokens after it are ignored. This is not an error:
//! the caller should exit successfully.
//!
//! # Export formats
//!
//! `--doc`, `--sheet` and `--slides` all write the same export format field;
//! only `--drowing` has its own. The last value given wins.

pub mod catalog;
mod cursor;
pub mod defaults;
mod error;
mod options;
mod parser;
pub mod validators;

pub use cursor::ArgCursor;
pub use error::{CliError, Reason};
pub use options::{SyncDirection, SyncOptions};
pub use parser::{ParseOutcome, parse_args};
