//! Shared plumbing for the `regoverviews` and `regdetails` binaries.
//!
//! Each binary parses its own arguments, then hands off to a command here.
//! Commands write their report to any writer and return a [`CliError`];
//! turning that into a status line and exit code is [`report_failure`]'s job.

pub mod commands;
pub mod error;
pub mod logging;
pub mod settings;

use std::process::ExitCode;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

pub use error::CliError;

/// The name this program was invoked as, for error messages.
pub fn program_name(fallback: &str) -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string())
}

/// Print `<prog>: <message>` to stderr and return the failure exit code.
pub fn report_failure(program: &str, err: &CliError) -> ExitCode {
    log::debug!("{:?}", err);
    eprintln!(
        "{}: {}",
        program.if_supports_color(Stderr, |t| t.bold()),
        err
    );
    ExitCode::FAILURE
}
