//! Shared deterministic adapters for unit tests.
//!
//! Consolidates the doubles used across the store, config, and command
//! tests: an in-memory filesystem, a settable clock, and a sequential id
//! generator.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::context::ServiceContext;
use crate::ports::{Clock, FileSystem, IdGenerator};

/// In-memory filesystem. Clones share the same file map, so a test can
/// hold a handle for assertions while the context owns another.
#[derive(Clone, Default)]
pub struct MemFs {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    fail_writes: bool,
}

impl MemFs {
    /// A filesystem whose writes always fail, for exercising the
    /// persistence-failure path.
    pub fn failing_writes() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    /// Puts a file in place directly, bypassing the `FileSystem` trait.
    pub fn seed(&self, path: impl Into<PathBuf>, contents: &str) {
        self.files.lock().unwrap().insert(path.into(), contents.to_string());
    }

    /// Reads a file back for assertions.
    pub fn read(&self, path: impl Into<PathBuf>) -> Option<String> {
        self.files.lock().unwrap().get(&path.into()).cloned()
    }
}

impl FileSystem for MemFs {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail_writes {
            return Err("simulated storage failure".into());
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

/// Settable clock. Clones share the same instant, which tests can advance.
#[derive(Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    /// A clock frozen at the given instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Arc::new(Mutex::new(now)) }
    }

    /// Moves the clock forward.
    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().unwrap();
        *now += chrono::Duration::seconds(secs);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Sequential id generator: `task-1`, `task-2`, ...
#[derive(Clone, Default)]
pub struct SeqIds {
    next: Arc<Mutex<u32>>,
}

impl IdGenerator for SeqIds {
    fn generate_id(&self) -> String {
        let mut next = self.next.lock().unwrap();
        *next += 1;
        format!("task-{next}")
    }
}

/// The instant used by [`fixed_context`]: 2024-06-15 10:00:00 UTC.
pub fn default_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()
}

/// Context with deterministic adapters and the clock at
/// [`default_instant`].
pub fn fixed_context(fs: MemFs) -> ServiceContext {
    context_at(fs, FixedClock::at(default_instant()))
}

/// Context with deterministic adapters and the given clock.
pub fn context_at(fs: MemFs, clock: FixedClock) -> ServiceContext {
    ServiceContext {
        clock: Box::new(clock),
        fs: Box::new(fs),
        id_gen: Box::new(SeqIds::default()),
    }
}
