//! Traits used by multiple structs in this crate

use crate::date_key::DateKey;
use crate::task::Task;

/// A read-only view of tasks grouped by the date they have been logged under
pub trait TaskSource {
    /// Returns the tasks logged under `date_key`, in insertion order.
    /// An unknown key is not an error: it simply has no tasks.
    fn tasks_for(&self, date_key: &DateKey) -> &[Task];

    /// Returns every date key with its tasks.
    /// The iteration order must be deterministic for a given content (this crate uses the calendar order).
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a DateKey, &'a [Task])> + 'a>;
}
