//! `slate stats` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::view::summary::Summary;

/// Execute the `stats` command.
///
/// Prints the summary counters computed from the whole canonical list.
///
/// # Errors
///
/// Currently infallible; the signature matches the other handlers.
pub fn run(ctx: &ServiceContext, root: &Path) -> Result<(), String> {
    let store = TaskStore::open(ctx, root);
    let today = ctx.clock.now().date_naive();
    let summary = Summary::compute(store.tasks(), today);

    println!("Total:     {}", summary.total);
    println!("Completed: {}", summary.completed);
    println!("Pending:   {}", summary.pending);
    println!("Overdue:   {}", summary.overdue);
    println!("Due today: {}", summary.due_today);
    println!("Upcoming:  {}", summary.upcoming);
    Ok(())
}
