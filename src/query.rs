//! Read-only queries over a [`TaskSource`]: the sorted view of a day, and scoped exports

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::date_key::DateKey;
use crate::error::InvalidInput;
use crate::task::Task;
use crate::traits::TaskSource;
use crate::utils::comparison::compare_for_display;

/// The period covered by an export
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportScope {
    /// Only the reference date
    Day,
    /// Every date in the same month (and year) as the reference date
    Month,
    /// Every date in the same year as the reference date
    Year,
}

impl ExportScope {
    pub const ALL: [ExportScope; 3] = [ExportScope::Day, ExportScope::Month, ExportScope::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportScope::Day => "day",
            ExportScope::Month => "month",
            ExportScope::Year => "year",
        }
    }

    /// Whether `date_key` falls into the period of `reference` for this scope
    pub fn matches(&self, date_key: &DateKey, reference: &DateKey) -> bool {
        match self {
            ExportScope::Day => date_key == reference,
            ExportScope::Month => date_key.year() == reference.year() && date_key.month() == reference.month(),
            ExportScope::Year => date_key.year() == reference.year(),
        }
    }

    /// The text that identifies the period of `reference`.
    ///
    /// This is a prefix of the text form of every date key this scope matches (`2025-03-15`, `2025-03` or `2025`).
    pub fn period_label(&self, reference: &DateKey) -> String {
        match self {
            ExportScope::Day => reference.to_string(),
            ExportScope::Month => format!("{:04}-{:02}", reference.year(), reference.month()),
            ExportScope::Year => format!("{:04}", reference.year()),
        }
    }

    /// A suggested name for a CSV export of this period, e.g. `tasks_month_2025-03.csv`
    pub fn file_name(&self, reference: &DateKey) -> String {
        format!("tasks_{}_{}.csv", self.as_str(), self.period_label(reference))
    }
}

impl Display for ExportScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.pad(self.as_str())
    }
}

impl FromStr for ExportScope {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter()
            .find(|scope| scope.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| InvalidInput::UnknownScope(s.to_string()))
    }
}


/// Queries available on every [`TaskSource`]. None of them modifies the source.
pub trait TaskQuery: TaskSource {
    /// The tasks of `date_key`, in display order (see [`compare_for_display`]).
    ///
    /// The sort is stable: tasks that compare equal keep their insertion order.
    fn sorted_view(&self, date_key: &DateKey) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks_for(date_key).iter().collect();
        tasks.sort_by(|l, r| compare_for_display(l, r));
        tasks
    }

    /// Every task logged in the period of `reference`, in date order, then insertion order.
    ///
    /// Unlike [`TaskQuery::sorted_view`], this does not sort tasks by priority.
    fn scoped_export(&self, scope: ExportScope, reference: &DateKey) -> Vec<&Task> {
        let mut tasks = Vec::new();
        for (date_key, date_tasks) in self.entries() {
            if scope.matches(date_key, reference) {
                tasks.extend(date_tasks.iter());
            }
        }
        log::debug!("Exporting {} task(s) for the {} of {}", tasks.len(), scope, reference);
        tasks
    }
}

impl<S: TaskSource + ?Sized> TaskQuery for S {}
