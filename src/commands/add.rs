//! `slate add` command.

use std::path::Path;

use crate::cli::AddArgs;
use crate::config::StoreConfig;
use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::task::TaskDraft;

/// Execute the `add` command.
///
/// The command layer is the validation boundary: an empty title, an
/// unknown category, or a past due date is rejected here, before the store
/// is invoked. The store independently rejects empty titles as a backstop.
///
/// # Errors
///
/// Returns an error string when validation or task creation fails.
pub fn run(ctx: &ServiceContext, root: &Path, args: &AddArgs) -> Result<(), String> {
    if args.title.trim().is_empty() {
        return Err("Title must not be empty".to_string());
    }
    let config = StoreConfig::load(ctx, root);
    let category = config.categories.parse(&args.category)?;
    if let Some(due) = args.due {
        let today = ctx.clock.now().date_naive();
        if due < today {
            return Err(format!("Due date {due} is in the past (today is {today})"));
        }
    }

    let mut store = TaskStore::open(ctx, root);
    let task = store.add(TaskDraft {
        title: args.title.clone(),
        description: args.description.clone(),
        category,
        priority: args.priority,
        due_date: args.due,
    })?;
    println!("Added task {}: {}", task.id, task.title);
    Ok(())
}
