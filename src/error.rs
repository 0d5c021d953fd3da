//! Errors returned by this crate
//!
//! None of them is fatal: they are meant to be shown to the user, who can then retry with corrected input.

use chrono::NaiveDate;
use thiserror::Error;

use crate::date_key::DateKey;

/// User-supplied data that cannot make a valid [`Task`](crate::Task) (or a valid lookup key)
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("task title must not be blank")]
    EmptyTitle,

    #[error("due date {due_date} is before today ({today})")]
    DueDateInPast { due_date: NaiveDate, today: NaiveDate },

    #[error("{hour:02}:{minute:02} is not on the half-hour grid")]
    OffGridTime { hour: u32, minute: u32 },

    /// Expected `HH:MM`
    #[error("invalid time of day {0:?}")]
    InvalidTime(String),

    /// Expected `YYYY-MM-DD`
    #[error("invalid date {0:?}")]
    InvalidDate(String),

    #[error("unknown category {0:?}")]
    UnknownCategory(String),

    #[error("unknown priority {0:?}")]
    UnknownPriority(String),

    #[error("unknown export scope {0:?} (expected day, month or year)")]
    UnknownScope(String),
}

/// Returned when a task is looked up by a position that does not exist
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("no task #{index} logged under {date_key}")]
pub struct NotFound {
    pub date_key: DateKey,
    pub index: usize,
}
