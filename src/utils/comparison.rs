//! Utilities to compare custom types
//!
//! These can be used to sort results, e.g. with `slice::sort_by`

use std::cmp::Ordering;

use crate::task::Task;

/// The display order of tasks: by priority (`High` first), then due date, then due time
pub fn compare_for_display(left: &Task, right: &Task) -> Ordering {
    left.priority().cmp(&right.priority())
        .then_with(|| left.due_date().cmp(&right.due_date()))
        .then_with(|| left.due_time().cmp(&right.due_time()))
}
