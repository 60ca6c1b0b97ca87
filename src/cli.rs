//! CLI argument definitions.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::task::Priority;
use crate::view::{SortKey, SortOrder};

/// Top-level CLI parser for `slate`.
#[derive(Debug, Parser)]
#[command(name = "slate", version, about = "Manage a task list with durable local storage")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a task.
    Add(AddArgs),
    /// List tasks, filtered and sorted.
    List(ListArgs),
    /// Show one task in full.
    Show {
        /// Task identifier.
        id: String,
    },
    /// Edit fields of a task.
    Edit(EditArgs),
    /// Toggle a task between pending and done.
    Done {
        /// Task identifier.
        id: String,
    },
    /// Delete a task permanently.
    Rm {
        /// Task identifier.
        id: String,
    },
    /// Print summary counters for the whole list.
    Stats,
    /// Delete every task.
    Clear {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

/// Arguments for `slate add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Title of the new task.
    pub title: String,
    /// Longer free-text description.
    #[arg(short, long)]
    pub description: Option<String>,
    /// Category name; the accepted set comes from the store config.
    #[arg(short, long, default_value = "other")]
    pub category: String,
    /// Priority level.
    #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
    pub priority: Priority,
    /// Due day as YYYY-MM-DD; must not be in the past.
    #[arg(long)]
    pub due: Option<NaiveDate>,
}

/// Arguments for `slate list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Keep only tasks in this category.
    #[arg(short, long)]
    pub category: Option<String>,
    /// Keep only tasks at this priority.
    #[arg(short, long, value_enum)]
    pub priority: Option<Priority>,
    /// Keep only done or pending tasks.
    #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
    pub status: StatusFilter,
    /// Keep only tasks whose title or description contains this text.
    #[arg(long)]
    pub search: Option<String>,
    /// Sort key.
    #[arg(long, value_enum, default_value_t = SortKey::Created)]
    pub sort: SortKey,
    /// Sort direction.
    #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
    pub order: SortOrder,
}

/// Completion selector for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    /// Both done and pending tasks.
    All,
    /// Completed tasks only.
    Done,
    /// Incomplete tasks only.
    Pending,
}

impl StatusFilter {
    /// The completion selector this filter represents (`None` = all).
    #[must_use]
    pub const fn as_selector(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Done => Some(true),
            Self::Pending => Some(false),
        }
    }
}

/// Arguments for `slate edit`.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task identifier.
    pub id: String,
    /// Replacement title.
    #[arg(short, long)]
    pub title: Option<String>,
    /// Replacement description; pass an empty string to clear it.
    #[arg(short, long)]
    pub description: Option<String>,
    /// Replacement category.
    #[arg(short, long)]
    pub category: Option<String>,
    /// Replacement priority.
    #[arg(short, long, value_enum)]
    pub priority: Option<Priority>,
    /// Replacement due day as YYYY-MM-DD.
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<NaiveDate>,
    /// Remove the due date.
    #[arg(long)]
    pub clear_due: bool,
}

impl EditArgs {
    /// Returns `true` if no field flag was given at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.due.is_none()
            && !self.clear_due
    }
}
