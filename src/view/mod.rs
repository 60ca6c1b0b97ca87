//! Derived views over the canonical task list.
//!
//! [`project`] is a pure function from `(tasks, query)` to an ordered
//! list; it never mutates its inputs. Summary counters live in
//! [`summary`].

pub mod summary;

use std::cmp::Ordering;

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::task::{Category, Priority, Task};

/// Sort key for the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Creation timestamp.
    #[default]
    Created,
    /// Due date; tasks without one sort as the minimum possible date, so
    /// they come first ascending and last descending.
    Due,
    /// Priority rank, low through urgent.
    Priority,
    /// Case-insensitive title.
    Title,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    /// Smallest key first.
    Asc,
    /// Largest key first. The default: under the default key the newest
    /// tasks list first.
    #[default]
    Desc,
}

/// Filter, search, and sort state for one projection.
///
/// Ephemeral by design: built from CLI flags per invocation, never
/// persisted. A `None` selector means "all".
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    /// Keep only tasks with this category.
    pub category: Option<Category>,
    /// Keep only tasks with this priority.
    pub priority: Option<Priority>,
    /// Keep only tasks with this completion state.
    pub completed: Option<bool>,
    /// Case-insensitive substring match on title or description.
    pub search: Option<String>,
    /// Sort key.
    pub sort_by: SortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl TaskQuery {
    /// Returns `true` if `task` satisfies every active predicate.
    ///
    /// A task with no description never matches the search term on
    /// description.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let in_title = task.title.to_lowercase().contains(&term);
            let in_description =
                task.description.as_ref().is_some_and(|d| d.to_lowercase().contains(&term));
            if !in_title && !in_description {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if task.category != *category {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(completed) = self.completed {
            if task.completed != completed {
                return false;
            }
        }
        true
    }
}

/// Computes the filtered, sorted projection of `tasks` under `query`.
#[must_use]
pub fn project(tasks: &[Task], query: &TaskQuery) -> Vec<Task> {
    let mut selected: Vec<Task> = tasks.iter().filter(|task| query.matches(task)).cloned().collect();
    selected.sort_by(|a, b| {
        let ordering = compare(a, b, query.sort_by);
        match query.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    selected
}

/// Total order on tasks under the given key.
fn compare(a: &Task, b: &Task, key: SortKey) -> Ordering {
    match key {
        SortKey::Created => a.created_at.cmp(&b.created_at),
        SortKey::Due => {
            a.due_date.unwrap_or(NaiveDate::MIN).cmp(&b.due_date.unwrap_or(NaiveDate::MIN))
        }
        SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}
