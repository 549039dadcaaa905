//! Structured calendar dates
//!
//! A date is an ephemeral value derived from a (timestamp, definition)
//! pair. There is no year zero: year 1 after the epoch starts at
//! timestamp 0, and year 1 before the epoch ends at timestamp -1.

use serde::{Deserialize, Serialize};

/// One position on a calendar, broken into the calendar's own units
///
/// Field ranges (for the definition the date was derived under):
/// year >= 1, month in [1, months/year], day in [1, days/month],
/// hour in [0, hours/day), minute and second in [0, 60).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub is_before_epoch: bool,
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl CalendarDate {
    /// The first after-epoch instant: year 1, month 1, day 1, 00:00:00
    pub const EPOCH: CalendarDate = CalendarDate {
        is_before_epoch: false,
        year: 1,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// A date at midnight on the given day
    pub fn new(is_before_epoch: bool, year: i64, month: i64, day: i64) -> Self {
        CalendarDate {
            is_before_epoch,
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Same day with a different time of day
    pub fn with_time(mut self, hour: i64, minute: i64, second: i64) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        CalendarDate::EPOCH
    }
}
