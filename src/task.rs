//! Tasks and their metadata

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date_key::DateKey;
use crate::error::InvalidInput;

/// Names of the fields of a serialized [`Task`], in the order exporters should lay out their columns
pub const EXPORT_COLUMNS: [&str; 6] = ["title", "category", "priority", "due_date", "due_time", "completed"];


/// What a task is about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    Urgent,
    Other,
}

impl Category {
    /// Every category, in the order a form should offer them
    pub const ALL: [Category; 4] = [Category::Work, Category::Personal, Category::Urgent, Category::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Urgent => "Urgent",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| InvalidInput::UnknownCategory(s.to_string()))
    }
}


/// How urgent a task is.
///
/// Variants are ordered from the most to the least important, so that sorting by priority lists `High` first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Every priority, in the order a form should offer them
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.pad(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| InvalidInput::UnknownPriority(s.to_string()))
    }
}


/// A time of day on the half-hour grid (`00:00`, `00:30`, ..., `23:30`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueTime {
    /// Half-hours since midnight, always below 48
    slot: u8,
}

impl DueTime {
    /// Number of slots in a day
    pub const SLOTS: u8 = 48;

    pub const MIDNIGHT: DueTime = DueTime { slot: 0 };
    pub const NINE_AM: DueTime = DueTime { slot: 18 };

    pub fn new(hour: u32, minute: u32) -> Result<Self, InvalidInput> {
        if hour >= 24 || (minute != 0 && minute != 30) {
            return Err(InvalidInput::OffGridTime { hour, minute });
        }
        Ok(Self { slot: (hour * 2 + minute / 30) as u8 })
    }

    /// Every time of the grid, from `00:00` to `23:30`
    pub fn all() -> impl Iterator<Item = DueTime> {
        (0..Self::SLOTS).map(|slot| DueTime { slot })
    }

    pub fn hour(&self) -> u32   { u32::from(self.slot / 2)      }
    pub fn minute(&self) -> u32 { u32::from(self.slot % 2) * 30 }

    pub fn as_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
            .unwrap(/* a grid slot is always a valid time of day */)
    }
}

impl Default for DueTime {
    /// The configured [`DEFAULT_DUE_TIME`](crate::config::DEFAULT_DUE_TIME)
    fn default() -> Self {
        match crate::config::DEFAULT_DUE_TIME.lock() {
            Ok(time) => *time,
            Err(_) => {
                log::warn!("Default due time setting is poisoned. Using {}", DueTime::NINE_AM);
                DueTime::NINE_AM
            },
        }
    }
}

impl std::convert::TryFrom<NaiveTime> for DueTime {
    type Error = InvalidInput;

    fn try_from(time: NaiveTime) -> Result<Self, Self::Error> {
        if time.second() != 0 || time.nanosecond() != 0 {
            return Err(InvalidInput::OffGridTime { hour: time.hour(), minute: time.minute() });
        }
        Self::new(time.hour(), time.minute())
    }
}

impl FromStr for DueTime {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidInput::InvalidTime(s.to_string());

        let (hour, minute) = match s.split_once(':') {
            Some((h, m)) if h.len() == 2 && m.len() == 2 => (h, m),
            _ => return Err(invalid()),
        };
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl Display for DueTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Used to support serde
impl Serialize for DueTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for DueTime {
    fn deserialize<D>(deserializer: D) -> Result<DueTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


/// A to-do task
///
/// Tasks are immutable once created, except for their completion flag, which only a
/// [`TaskStore`](crate::TaskStore) can set (and only from "pending" to "completed"). \
/// Two tasks are equal when every one of their fields is equal, completion flag included.
///
/// Tasks serialize as flat records whose fields follow [`EXPORT_COLUMNS`].
/// They cannot be deserialized, since that would bypass the validation done by [`Task::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Task {
    title: String,
    category: Category,
    priority: Priority,
    due_date: NaiveDate,
    due_time: DueTime,
    completed: bool,
}

impl Task {
    /// Create a pending task, checking it is not due before today (in local time)
    pub fn new(title: String, category: Category, priority: Priority, due_date: NaiveDate, due_time: DueTime) -> Result<Self, InvalidInput> {
        Self::new_with_reference_date(title, category, priority, due_date, due_time, DateKey::today().date())
    }

    /// Create a pending task, checking it is not due before `today`
    pub fn new_with_reference_date(title: String, category: Category, priority: Priority,
                                   due_date: NaiveDate, due_time: DueTime,
                                   today: NaiveDate,
                                ) -> Result<Self, InvalidInput>
    {
        if title.trim().is_empty() {
            return Err(InvalidInput::EmptyTitle);
        }
        if due_date < today {
            return Err(InvalidInput::DueDateInPast { due_date, today });
        }
        let due_date = crate::date_key::check_year(due_date)?;

        Ok(Self {
            title,
            category,
            priority,
            due_date,
            due_time,
            completed: false,
        })
    }

    pub fn title(&self) -> &str           { &self.title    }
    pub fn category(&self) -> Category    { self.category  }
    pub fn priority(&self) -> Priority    { self.priority  }
    pub fn due_date(&self) -> NaiveDate   { self.due_date  }
    pub fn due_time(&self) -> DueTime     { self.due_time  }
    pub fn completed(&self) -> bool       { self.completed }

    /// Mark this task as completed. There is no way back.
    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        if self.completed {
            write!(f, "✅ ")?;
        }
        write!(f, "{} - Category: {} | Priority: {} | Due: {} {}",
            self.title, self.category, self.priority,
            self.due_date.format("%Y-%m-%d"), self.due_time)
    }
}
