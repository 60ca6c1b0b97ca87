//! The task record and its due-date classification.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{Category, Priority};

/// A single task in the canonical list.
///
/// Persisted with camelCase keys; timestamps are ISO-8601 datetimes and the
/// due date a plain ISO-8601 calendar day. Deliberately not `Deserialize`:
/// construction goes through `TaskStore::add` or the tolerant load codec,
/// both of which uphold the non-empty-title and `updated_at >= created_at`
/// invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Short description of the work; never empty.
    pub title: String,
    /// Optional longer free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the task has been finished.
    pub completed: bool,
    /// Category label.
    pub category: Category,
    /// Priority level.
    pub priority: Priority,
    /// Calendar day the task is due, if any. No time-of-day semantics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last mutated; always `>= created_at`.
    pub updated_at: DateTime<Utc>,
}

/// Position of an incomplete task's due date relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Due strictly before today.
    Overdue,
    /// Due today.
    DueToday,
    /// Due strictly after today.
    Upcoming,
}

impl Task {
    /// Classifies this task's due date relative to `today`.
    ///
    /// Completed tasks and tasks without a due date are never classified.
    /// The comparison is calendar-day only; time of day plays no part.
    #[must_use]
    pub fn due_status(&self, today: NaiveDate) -> Option<DueStatus> {
        if self.completed {
            return None;
        }
        self.due_date.map(|due| match due.cmp(&today) {
            Ordering::Less => DueStatus::Overdue,
            Ordering::Equal => DueStatus::DueToday,
            Ordering::Greater => DueStatus::Upcoming,
        })
    }
}

/// Input for creating a task; the store assigns the id and timestamps.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    /// Title of the new task.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Category label.
    pub category: Category,
    /// Priority level.
    pub priority: Priority,
    /// Optional due day.
    pub due_date: Option<NaiveDate>,
}

/// Field-by-field replacement set for updating a task.
///
/// `None` fields are left untouched. Clearing the due date is a separate
/// flag because `None` already means "no change".
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description; an empty string clears it.
    pub description: Option<String>,
    /// Replacement category.
    pub category: Option<Category>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement due day.
    pub due_date: Option<NaiveDate>,
    /// Removes the due date entirely.
    pub clear_due_date: bool,
}
