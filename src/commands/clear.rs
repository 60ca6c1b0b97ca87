//! `slate clear` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::store::TaskStore;

/// Execute the `clear` command.
///
/// Deletes every task. Requires the `--yes` flag since there is no undo.
///
/// # Errors
///
/// Returns an error string when `--yes` was not given.
pub fn run(ctx: &ServiceContext, root: &Path, yes: bool) -> Result<(), String> {
    if !yes {
        return Err("Refusing to delete all tasks; pass --yes to confirm".to_string());
    }
    let mut store = TaskStore::open(ctx, root);
    let count = store.tasks().len();
    store.clear();
    println!("Cleared {count} task(s).");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Category, Priority, TaskDraft};
    use crate::test_support::{fixed_context, MemFs};
    use std::path::PathBuf;

    fn root() -> PathBuf {
        PathBuf::from("/store")
    }

    #[test]
    fn refuses_without_confirmation() {
        let ctx = fixed_context(MemFs::default());
        assert!(run(&ctx, &root(), false).is_err());
    }

    #[test]
    fn clears_every_task() {
        let ctx = fixed_context(MemFs::default());
        let mut store = TaskStore::open(&ctx, &root());
        for title in ["one", "two"] {
            store
                .add(TaskDraft {
                    title: title.to_string(),
                    description: None,
                    category: Category::default(),
                    priority: Priority::Medium,
                    due_date: None,
                })
                .unwrap();
        }
        drop(store);

        run(&ctx, &root(), true).unwrap();

        let store = TaskStore::open(&ctx, &root());
        assert!(store.tasks().is_empty());
    }
}
