//! `slate show` command.

use std::path::Path;

use chrono::NaiveDate;

use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::task::{DueStatus, Task};

/// Execute the `show` command.
///
/// Pretty-prints the full task. A missing id is reported informationally
/// and does not fail the process; it indicates a stale reference, not a
/// user-facing failure.
///
/// # Errors
///
/// Currently infallible; the signature matches the other handlers.
pub fn run(ctx: &ServiceContext, root: &Path, id: &str) -> Result<(), String> {
    let store = TaskStore::open(ctx, root);
    match store.get(id) {
        Some(task) => {
            let today = ctx.clock.now().date_naive();
            print_task(task, today);
        }
        None => println!("No task found with ID {id}."),
    }
    Ok(())
}

fn print_task(task: &Task, today: NaiveDate) {
    println!("Task: {}", task.id);
    println!("Title: {}", task.title);
    if let Some(description) = &task.description {
        println!("Description: {description}");
    }
    println!("Status: {}", if task.completed { "done" } else { "pending" });
    println!("Category: {}", task.category);
    println!("Priority: {}", task.priority);
    if let Some(due) = task.due_date {
        let marker = match task.due_status(today) {
            Some(DueStatus::Overdue) => " (overdue)",
            Some(DueStatus::DueToday) => " (today)",
            _ => "",
        };
        println!("Due: {due}{marker}");
    }
    println!("Created: {}", task.created_at.to_rfc3339());
    println!("Updated: {}", task.updated_at.to_rfc3339());
}
