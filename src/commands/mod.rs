//! Command dispatch and handlers.

pub mod add;
pub mod clear;
pub mod done;
pub mod edit;
pub mod list;
pub mod rm;
pub mod show;
pub mod stats;

use std::env;
use std::path::PathBuf;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler with a live context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    let root = store_root();
    match command {
        Command::Add(args) => add::run(ctx, &root, args),
        Command::List(args) => list::run(ctx, &root, args),
        Command::Show { id } => show::run(ctx, &root, id),
        Command::Edit(args) => edit::run(ctx, &root, args),
        Command::Done { id } => done::run(ctx, &root, id),
        Command::Rm { id } => rm::run(ctx, &root, id),
        Command::Stats => stats::run(ctx, &root),
        Command::Clear { yes } => clear::run(ctx, &root, *yes),
    }
}

/// Resolves the store root: `SLATE_STORE` when set, `.slate` otherwise.
#[must_use]
pub fn store_root() -> PathBuf {
    env::var("SLATE_STORE").map_or_else(|_| PathBuf::from(".slate"), PathBuf::from)
}
