//! This module provides the in-memory task store

use std::collections::BTreeMap;

use crate::date_key::DateKey;
use crate::error::NotFound;
use crate::task::Task;
use crate::traits::TaskSource;

/// The result of [`TaskStore::add`]
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The task has been appended
    Added,
    /// An identical task was already logged under this date. Nothing has changed.
    Duplicate,
}

/// Tasks, grouped by the date they have been logged under
///
/// Within one date, tasks keep their insertion order and no two of them are identical. \
/// Dates are created when their first task is added, and are never removed.
///
/// A store assumes a single owner. Callers that share one between threads should wrap it (e.g. in an `Arc<Mutex<TaskStore>>`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskStore {
    tasks: BTreeMap<DateKey, Vec<Task>>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `task` to the tasks of `date_key`, unless an identical task is already there
    pub fn add(&mut self, date_key: DateKey, task: Task) -> AddOutcome {
        if let Some(existing) = self.tasks.get(&date_key) {
            if existing.contains(&task) {
                log::info!("Task {:?} already exists under {}", task.title(), date_key);
                return AddOutcome::Duplicate;
            }
        }

        log::debug!("Adding task {:?} under {}", task.title(), date_key);
        self.tasks.entry(date_key).or_default().push(task);
        AddOutcome::Added
    }

    /// Returns the tasks of `date_key`, in insertion order (possibly none)
    pub fn list(&self, date_key: &DateKey) -> &[Task] {
        self.tasks.get(date_key)
            .map(|tasks| tasks.as_slice())
            .unwrap_or(&[])
    }

    /// Mark the `index`-th task of `date_key` as completed.
    ///
    /// Marking an already completed task is a no-op that succeeds.
    pub fn set_completed(&mut self, date_key: &DateKey, index: usize) -> Result<(), NotFound> {
        match self.tasks.get_mut(date_key).and_then(|tasks| tasks.get_mut(index)) {
            None => {
                log::warn!("No task #{} under {}", index, date_key);
                Err(NotFound { date_key: *date_key, index })
            },
            Some(task) => {
                if task.completed() == false {
                    log::debug!("Marking task {:?} under {} as completed", task.title(), date_key);
                    task.mark_completed();
                }
                Ok(())
            },
        }
    }

    /// Returns the dates that have tasks, in calendar order
    pub fn date_keys(&self) -> impl Iterator<Item = &DateKey> {
        self.tasks.keys()
    }

    pub fn contains_key(&self, date_key: &DateKey) -> bool {
        self.tasks.contains_key(date_key)
    }

    /// Total number of tasks, across all dates
    pub fn len(&self) -> usize {
        self.tasks.values().map(|tasks| tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskSource for TaskStore {
    fn tasks_for(&self, date_key: &DateKey) -> &[Task] {
        self.list(date_key)
    }

    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a DateKey, &'a [Task])> + 'a> {
        Box::new(self.tasks.iter().map(|(key, tasks)| (key, tasks.as_slice())))
    }
}
