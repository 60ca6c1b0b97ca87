//! `slate done` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::store::TaskStore;

/// Execute the `done` command.
///
/// Toggles the task between pending and done, so running it twice restores
/// the original state. A missing id is reported informationally.
///
/// # Errors
///
/// Currently infallible; the signature matches the other handlers.
pub fn run(ctx: &ServiceContext, root: &Path, id: &str) -> Result<(), String> {
    let mut store = TaskStore::open(ctx, root);
    if store.toggle_completed(id) {
        let state = store.get(id).map_or("done", |task| {
            if task.completed {
                "done"
            } else {
                "pending"
            }
        });
        println!("Task {id} is now {state}.");
    } else {
        println!("No task found with ID {id}.");
    }
    Ok(())
}
