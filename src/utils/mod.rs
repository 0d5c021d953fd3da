///! Some utility functions

pub mod comparison;

use crate::store::TaskStore;
use crate::task::Task;
use crate::query::TaskQuery;

/// A debug utility that pretty-prints a task
pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    println!("    {} [{:<6}] {}\t({}, due {} {})",
        completion, task.priority(), task.title(), task.category(), task.due_date(), task.due_time());
}

/// A debug utility that pretty-prints every date of a store, with its tasks in display order
pub fn print_store(store: &TaskStore) {
    for date_key in store.date_keys() {
        println!("DATE {}", date_key);
        for task in store.sorted_view(date_key) {
            print_task(task);
        }
    }
}
