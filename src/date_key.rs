//! Calendar dates that tasks are logged under

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InvalidInput;

/// The calendar date a task has been logged under.
///
/// This is not the due date of the task: a task logged on `2025-06-05` may be due on `2025-06-10`. \
/// Its text form is `YYYY-MM-DD`, so that the text prefixes `YYYY-MM` and `YYYY` identify its month and its year.
/// Ordering follows the calendar, which is also the lexicographic order of the text form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    date: NaiveDate,
}

/// Years whose text form is exactly four digits
pub const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Rejects dates whose year would not print as exactly four digits
pub(crate) fn check_year(date: NaiveDate) -> Result<NaiveDate, InvalidInput> {
    if YEARS.contains(&date.year()) {
        Ok(date)
    } else {
        Err(InvalidInput::InvalidDate(date.to_string()))
    }
}

impl DateKey {
    /// Build a key, provided its year is within [`YEARS`]
    pub fn new(date: NaiveDate) -> Result<Self, InvalidInput> {
        Ok(Self { date: check_year(date)? })
    }

    /// Build a key from its numeric parts
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, InvalidInput> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| InvalidInput::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))
            .and_then(Self::new)
    }

    /// The key for the current local date
    pub fn today() -> Self {
        // a local clock is never outside `YEARS`
        Self { date: Local::now().date_naive() }
    }

    pub fn date(&self) -> NaiveDate { self.date         }
    pub fn year(&self) -> i32       { self.date.year()  }
    pub fn month(&self) -> u32      { self.date.month() }
    pub fn day(&self) -> u32        { self.date.day()   }
}

impl std::convert::TryFrom<NaiveDate> for DateKey {
    type Error = InvalidInput;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl FromStr for DateKey {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono is lenient with padding and signs, but keys must keep their fixed-width text form
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if well_formed == false {
            return Err(InvalidInput::InvalidDate(s.to_string()));
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(|date| Self { date })
            .map_err(|_| InvalidInput::InvalidDate(s.to_string()))
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

/// Used to support serde
impl Serialize for DateKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D>(deserializer: D) -> Result<DateKey, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
