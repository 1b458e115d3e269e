//! Single-pass dispatcher turning argument tokens into [`SyncOptions`].
//!
//! Tokens are consumed left to right. A value-bearing option takes the next
//! token as its value, provided that token is not itself a recognized option.
//! Any unknown token or failed validation aborts the whole parse.
//!
//! Resolution and value fetches are reported through `tracing` at debug and
//! trace level. They reach a subscriber only if the caller installed one
//! before parsing; the `drive-sync` binary sets up logging afterwards, once
//! `--verbose` and `--log-file` are known.

use std::io::Write;

use super::catalog::{self, OptionId};
use super::cursor::ArgCursor;
use super::error::{CliError, Reason};
use super::options::{OptionsBuilder, SyncDirection, SyncOptions};
use super::validators;

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

/// Successful result of a parse.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Options were parsed and validated; the engine should run.
    Run(SyncOptions),
    /// Help was written to the output sink; the process should exit
    /// successfully without running anything.
    Help,
}

impl ParseOutcome {
    /// Reason tag when the outcome ends the process early.
    #[must_use]
    pub const fn termination(&self) -> Option<Reason> {
        match self {
            Self::Run(_) => None,
            Self::Help => Some(Reason::NormalTermination),
        }
    }
}

/// Parses `args` (without the program name) into validated options.
///
/// Help text is written to `out` when `-h`/`--help` is encountered; nothing
/// else is written.
///
/// # Errors
///
/// Returns `InvalidParameter` for unknown options, missing or malformed
/// values, failed path checks, or a missing local directory. Returns `Io`
/// when the log file cannot be created or written, or when help cannot be
/// written to `out`.
pub fn parse_args<S, W>(args: &[S], out: &mut W) -> Result<ParseOutcome, CliError>
where
    S: AsRef<str>,
    W: Write,
{
    let mut cursor = ArgCursor::new(args);
    let mut builder = OptionsBuilder::default();

    while let Some(token) = cursor.next_token() {
        let descriptor = catalog::resolve(token)
            .ok_or_else(|| CliError::invalid(format!("Parameter '{token}' is not available.")))?;
        tracing::debug!(option = token, id = ?descriptor.id, "Resolved option");

        if descriptor.id == OptionId::Help {
            print_help(out)?;
            return Ok(ParseOutcome::Help);
        }

        apply(&mut builder, descriptor.id, token, &mut cursor)?;
    }

    builder.build().map(ParseOutcome::Run)
}

/// Takes the value following a value-bearing option.
///
/// A recognized option is never accepted as another option's value.
fn fetch_value<'a, S: AsRef<str>>(
    option: &str,
    cursor: &mut ArgCursor<'a, S>,
) -> Result<&'a str, CliError> {
    match cursor.next_token() {
        Some(value) if catalog::resolve(value).is_none() => {
            tracing::trace!(option, value, "Fetched option value");
            Ok(value)
        }
        _ => Err(CliError::missing_argument(option)),
    }
}

/// Applies one resolved option to the builder, consuming its value if it
/// takes one.
fn apply<S: AsRef<str>>(
    builder: &mut OptionsBuilder,
    id: OptionId,
    option: &str,
    cursor: &mut ArgCursor<'_, S>,
) -> Result<(), CliError> {
    let mut value = || fetch_value(option, cursor);

    match id {
        // Handled by the caller before any value is consumed.
        OptionId::Help => {}
        OptionId::LocalRootDir => {
            builder.local_root_dir = Some(validators::local_root_dir(value()?)?);
        }
        OptionId::RemoteRootDir => builder.remote_root_dir = Some(value()?.to_string()),
        OptionId::AuthenticationFile => {
            builder.authentication_file = Some(value()?.to_string());
        }
        OptionId::DryRun => builder.dry_run = true,
        OptionId::Delete => builder.delete_files = true,
        OptionId::Checksum => builder.use_checksum = true,
        OptionId::IgnoreFile => builder.ignore_patterns = validators::ignore_file(value()?)?,
        OptionId::SyncUp => builder.sync_direction = SyncDirection::Up,
        OptionId::SyncDown => builder.sync_direction = SyncDirection::Down,
        OptionId::HtmlReport => builder.html_report = true,
        OptionId::MaxFileSize => {
            builder.max_file_size = Some(validators::max_file_size(option, value()?)?);
        }
        OptionId::HttpChunkSize => {
            builder.http_chunk_size = validators::http_chunk_size(option, value()?)?;
        }
        OptionId::NetworkNumberOfRetries => {
            builder.network_number_of_attempts =
                validators::network_number_of_attempts(option, value()?)?;
        }
        OptionId::NetworkSleepBetweenRetries => {
            builder.network_sleep_between_attempts_ms =
                validators::network_sleep_between_attempts(option, value()?)?;
        }
        OptionId::Verbose => builder.verbose = true,
        OptionId::LogFile => builder.log_file = Some(validators::log_file(option, value()?)?),
        OptionId::NoDelete => builder.no_delete = true,
        // Sheets and slides share the document export field.
        OptionId::Doc | OptionId::Sheet | OptionId::Slides => {
            builder.doc_mime_type = Some(value()?.to_string());
        }
        OptionId::Drawing => builder.drawing_mime_type = Some(value()?.to_string()),
    }
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<(), CliError> {
    let write_all = |out: &mut W| -> std::io::Result<()> {
        for line in catalog::render_help() {
            writeln!(out, "{line}")?;
        }
        out.flush()
    };

    write_all(out).map_err(|e| CliError::Io {
        message: format!("Failed to write help: {e}"),
        source: Some(e),
    })
}
