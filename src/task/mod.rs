//! Domain types for tasks.
//!
//! A task is one user-created unit of work: title, optional description,
//! category, priority, optional due day, and a completion flag. The store
//! in `crate::store` owns the canonical list of these.

mod category;
mod item;
mod priority;

pub use category::{Category, CategorySet};
pub use item::{DueStatus, Task, TaskDraft, TaskPatch};
pub use priority::Priority;
