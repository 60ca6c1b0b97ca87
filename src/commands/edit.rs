//! `slate edit` command.

use std::path::Path;

use crate::cli::EditArgs;
use crate::config::StoreConfig;
use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::task::TaskPatch;

/// Execute the `edit` command.
///
/// Validates the replacement fields (non-empty title, known category)
/// before the store is invoked, then merges them into the task. Editing a
/// due date into the past is allowed; the creation-time restriction does
/// not apply to corrections of existing tasks.
///
/// # Errors
///
/// Returns an error string when no field flag is given or validation
/// fails.
pub fn run(ctx: &ServiceContext, root: &Path, args: &EditArgs) -> Result<(), String> {
    if args.is_empty() {
        return Err("Nothing to edit: pass at least one field flag".to_string());
    }
    if let Some(title) = &args.title {
        if title.trim().is_empty() {
            return Err("Title must not be empty".to_string());
        }
    }
    let category = match &args.category {
        Some(name) => {
            let config = StoreConfig::load(ctx, root);
            Some(config.categories.parse(name)?)
        }
        None => None,
    };

    let patch = TaskPatch {
        title: args.title.clone(),
        description: args.description.clone(),
        category,
        priority: args.priority,
        due_date: args.due,
        clear_due_date: args.clear_due,
    };

    let mut store = TaskStore::open(ctx, root);
    if store.update(&args.id, &patch)? {
        println!("Updated task {}.", args.id);
    } else {
        println!("No task found with ID {}.", args.id);
    }
    Ok(())
}
