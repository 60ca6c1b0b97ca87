//! Service context bundling all port trait objects.

use crate::adapters::live::{LiveClock, LiveFileSystem, LiveIdGenerator};
use crate::ports::{Clock, FileSystem, IdGenerator};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Commands construct
/// a live context once per invocation; tests build the struct directly with
/// deterministic adapters.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem holding the persisted task list and config.
    pub fs: Box<dyn FileSystem>,
    /// ID generator for unique task identifiers.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context backed by the system clock, real disk I/O,
    /// and random UUIDs.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            id_gen: Box::new(LiveIdGenerator::new()),
        }
    }
}
