//! `slate list` command.

use std::path::Path;

use chrono::NaiveDate;

use crate::cli::ListArgs;
use crate::config::StoreConfig;
use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::task::{DueStatus, Task};
use crate::view::{self, TaskQuery};

/// Execute the `list` command.
///
/// Builds a query from the flags, projects the canonical list through it,
/// and prints an aligned table with due-date markers.
///
/// # Errors
///
/// Returns an error string when the category filter names an unknown
/// category.
pub fn run(ctx: &ServiceContext, root: &Path, args: &ListArgs) -> Result<(), String> {
    let config = StoreConfig::load(ctx, root);
    let category = match &args.category {
        Some(name) => Some(config.categories.parse(name)?),
        None => None,
    };
    let query = TaskQuery {
        category,
        priority: args.priority,
        completed: args.status.as_selector(),
        search: args.search.clone(),
        sort_by: args.sort,
        sort_order: args.order,
    };

    let store = TaskStore::open(ctx, root);
    let projected = view::project(store.tasks(), &query);
    if projected.is_empty() {
        println!("No tasks match.");
        return Ok(());
    }

    let today = ctx.clock.now().date_naive();
    print_table(&projected, today);
    println!("\n{} of {} task(s) shown.", projected.len(), store.tasks().len());
    Ok(())
}

fn print_table(tasks: &[Task], today: NaiveDate) {
    // Collect rows for column-width calculation.
    let rows: Vec<[String; 6]> = tasks
        .iter()
        .map(|task| {
            [
                task.id.clone(),
                task.title.clone(),
                task.category.to_string(),
                task.priority.to_string(),
                due_cell(task, today),
                if task.completed { "done" } else { "pending" }.to_string(),
            ]
        })
        .collect();

    let headers = ["ID", "TITLE", "CATEGORY", "PRIORITY", "DUE", "STATUS"];
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter().map(|row| row[i].chars().count()).max().unwrap_or(0).max(header.len())
        })
        .collect();

    print_row(&headers.map(String::from), &widths);
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", dashes.join("  "));
    for row in &rows {
        print_row(row, &widths);
    }
}

fn print_row(cells: &[String; 6], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    println!("{}", padded.join("  ").trim_end());
}

fn due_cell(task: &Task, today: NaiveDate) -> String {
    match (task.due_date, task.due_status(today)) {
        (Some(due), Some(DueStatus::Overdue)) => format!("{due} (overdue)"),
        (Some(due), Some(DueStatus::DueToday)) => format!("{due} (today)"),
        (Some(due), _) => due.to_string(),
        (None, _) => "-".to_string(),
    }
}
