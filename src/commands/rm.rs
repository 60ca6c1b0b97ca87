//! `slate rm` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::store::TaskStore;

/// Execute the `rm` command.
///
/// Deletion is permanent; there is no soft delete or undo. A missing id is
/// reported informationally and leaves the list untouched.
///
/// # Errors
///
/// Currently infallible; the signature matches the other handlers.
pub fn run(ctx: &ServiceContext, root: &Path, id: &str) -> Result<(), String> {
    let mut store = TaskStore::open(ctx, root);
    if store.remove(id) {
        println!("Deleted task {id}.");
    } else {
        println!("No task found with ID {id}.");
    }
    Ok(())
}
