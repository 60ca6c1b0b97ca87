//! Summary counters derived from the canonical task list.

use chrono::NaiveDate;

use crate::task::{DueStatus, Task};

/// Counts derived from the whole canonical list, independent of any active
/// filter or search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// All tasks.
    pub total: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Incomplete tasks.
    pub pending: usize,
    /// Incomplete tasks due strictly before today.
    pub overdue: usize,
    /// Incomplete tasks due today.
    pub due_today: usize,
    /// Incomplete tasks due strictly after today.
    pub upcoming: usize,
}

impl Summary {
    /// Computes the counters for `tasks` as of `today`.
    ///
    /// Completed tasks and tasks without a due date appear in none of the
    /// due buckets.
    #[must_use]
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let mut summary = Self { total: tasks.len(), ..Self::default() };
        for task in tasks {
            if task.completed {
                summary.completed += 1;
            } else {
                summary.pending += 1;
            }
            match task.due_status(today) {
                Some(DueStatus::Overdue) => summary.overdue += 1,
                Some(DueStatus::DueToday) => summary.due_today += 1,
                Some(DueStatus::Upcoming) => summary.upcoming += 1,
                None => {}
            }
        }
        summary
    }
}
