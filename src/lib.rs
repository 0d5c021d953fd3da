//! This crate provides a task log organized around a calendar.
//!
//! Tasks (with a category, a priority, a due date and a due time) are logged under the calendar date they were entered for, in a [`TaskStore`]. \
//! A store refuses identical tasks for the same date, and lets tasks be marked as completed.
//!
//! The [`TaskQuery`](query::TaskQuery) trait provides read-only views over a store: the tasks of a date in display order,
//! and every task of a day, a month or a year, ready to be handed to an exporter.
//!
//! Rendering and file formats are left to the caller.

pub mod traits;

pub mod config;
pub mod error;
pub use error::{InvalidInput, NotFound};
pub mod date_key;
pub use date_key::DateKey;
pub mod task;
pub use task::{Category, DueTime, Priority, Task};
pub mod store;
pub use store::{AddOutcome, TaskStore};
pub mod query;
pub use query::{ExportScope, TaskQuery};

pub mod utils;
