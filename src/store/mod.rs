//! Task store — the canonical task list and its durable persistence.
//!
//! The store owns the authoritative `Vec<Task>`. Every mutation rewrites
//! the whole list to `<root>/todos.json` through the `FileSystem` port.
//! A failed write is reported as a warning and the in-memory list stays
//! authoritative for the rest of the session; a mutation either fully
//! applies in memory or is rejected before any field changes.

mod records;

use std::path::{Path, PathBuf};

use crate::context::ServiceContext;
use crate::task::{Task, TaskDraft, TaskPatch};

/// File name of the persisted task list inside the store root.
const TASKS_FILE: &str = "todos.json";

/// Canonical task list with write-through persistence.
///
/// All clock, id, and filesystem access goes through the injected context;
/// there is no ambient state.
pub struct TaskStore<'a> {
    ctx: &'a ServiceContext,
    root: PathBuf,
    tasks: Vec<Task>,
}

impl<'a> TaskStore<'a> {
    /// Opens the store rooted at `root`, loading any persisted tasks.
    ///
    /// Load failures are downgraded to warnings and yield an empty list,
    /// so opening never fails. Individually invalid records are dropped
    /// with a warning rather than poisoning the load.
    #[must_use]
    pub fn open(ctx: &'a ServiceContext, root: &Path) -> Self {
        let mut store = Self { ctx, root: root.to_path_buf(), tasks: Vec::new() };
        let path = store.tasks_path();
        if !ctx.fs.exists(&path) {
            return store;
        }
        match ctx.fs.read_to_string(&path) {
            Ok(contents) => match records::decode(&contents) {
                Ok(decoded) => {
                    if decoded.dropped > 0 {
                        eprintln!(
                            "Warning: dropped {} invalid task record(s) from {}",
                            decoded.dropped,
                            path.display()
                        );
                    }
                    store.load_all(decoded.tasks);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: failed to load {}: {e}; starting with an empty list",
                        path.display()
                    );
                }
            },
            Err(e) => {
                eprintln!(
                    "Warning: failed to read {}: {e}; starting with an empty list",
                    path.display()
                );
            }
        }
        store
    }

    /// Replaces the entire list. Initialization only: never merges and
    /// never writes back.
    pub fn load_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// The canonical task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Creates a task from `draft` and appends it to the list.
    ///
    /// The id comes from the context's generator and both timestamps from
    /// its clock. Returns the created task.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft title is empty after trimming; the
    /// list is left unchanged.
    pub fn add(&mut self, draft: TaskDraft) -> Result<Task, String> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err("Title must not be empty".to_string());
        }
        let now = self.ctx.clock.now();
        let task = Task {
            id: self.ctx.id_gen.generate_id(),
            title,
            description: draft.description.filter(|d| !d.trim().is_empty()),
            completed: false,
            category: draft.category,
            priority: draft.priority,
            due_date: draft.due_date,
            created_at: now,
            updated_at: now,
        };
        self.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    /// Merges `patch` into the task matching `id` and refreshes its
    /// `updated_at`. Returns `Ok(false)` when no task matches (a stale
    /// reference, not a failure).
    ///
    /// # Errors
    ///
    /// Returns an error if the patch carries a title that is empty after
    /// trimming; the task is left untouched.
    pub fn update(&mut self, id: &str, patch: &TaskPatch) -> Result<bool, String> {
        let title = match &patch.title {
            Some(title) => {
                let trimmed = title.trim();
                if trimmed.is_empty() {
                    return Err("Title must not be empty".to_string());
                }
                Some(trimmed.to_string())
            }
            None => None,
        };
        let now = self.ctx.clock.now();
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = &patch.description {
            task.description = if description.trim().is_empty() {
                None
            } else {
                Some(description.clone())
            };
        }
        if let Some(category) = &patch.category {
            task.category = category.clone();
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if patch.clear_due_date {
            task.due_date = None;
        } else if let Some(due) = patch.due_date {
            task.due_date = Some(due);
        }
        task.updated_at = now.max(task.created_at);
        self.persist();
        Ok(true)
    }

    /// Deletes the task matching `id` permanently. Returns `false` when no
    /// task matches.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Flips the completion flag of the task matching `id` and refreshes
    /// its `updated_at`. Returns `false` when no task matches.
    pub fn toggle_completed(&mut self, id: &str) -> bool {
        let now = self.ctx.clock.now();
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        task.updated_at = now.max(task.created_at);
        self.persist();
        true
    }

    /// Empties the list.
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.persist();
    }

    fn tasks_path(&self) -> PathBuf {
        self.root.join(TASKS_FILE)
    }

    /// Writes the whole list back to storage. Failures are warnings: the
    /// in-memory list remains authoritative for the rest of the session.
    fn persist(&self) {
        let path = self.tasks_path();
        let json = match records::encode(&self.tasks) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Warning: {e}; changes kept in memory only");
                return;
            }
        };
        if let Err(e) = self.ctx.fs.write(&path, &json) {
            eprintln!(
                "Warning: failed to write {}: {e}; changes kept in memory only",
                path.display()
            );
        }
    }
}
