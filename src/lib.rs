//! Core library for the `slate` task manager CLI.
//!
//! The canonical task list lives in [`store::TaskStore`]; display is a pure
//! projection ([`view::project`]) plus summary counters. All external
//! boundaries (time, storage, IDs) are port traits in [`ports`] with live
//! adapters in [`adapters`], bundled by [`context::ServiceContext`].

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod ports;
pub mod store;
pub mod task;
pub mod view;

#[cfg(test)]
mod test_support;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed; real parse
/// failures and command errors come back as error strings.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => return Err(err.to_string()),
        Err(err) => {
            print!("{err}");
            return Ok(());
        }
    };
    commands::dispatch(&cli.command)
}
