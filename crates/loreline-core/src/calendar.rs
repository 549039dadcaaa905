//! Calendar definitions
//!
//! A fictional calendar is described entirely by four unit lengths:
//! seconds per hour, hours per day, days per month, months per year.
//! Minutes are always 60 seconds. All four lengths must be positive;
//! that is checked once at construction and every conversion afterwards
//! runs under the trusted invariant.

use serde::{Deserialize, Serialize};

use crate::{CalendarError, CalendarResult};

/// Default unit lengths used when a world record leaves them unset
pub const DEFAULT_HOUR_LENGTH_IN_SECONDS: i64 = 3600;
pub const DEFAULT_DAY_LENGTH_IN_HOURS: i64 = 24;
pub const DEFAULT_MONTH_LENGTH_IN_DAYS: i64 = 30;
pub const DEFAULT_YEAR_LENGTH_IN_MONTHS: i64 = 12;

/// Immutable description of one calendar's unit radixes
///
/// Constructed once per calendar (typically from an external world
/// record) and passed by reference into every conversion call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDefinition {
    /// Display name of the calendar's epoch (e.g. a founding event)
    pub epoch_label: String,
    /// Baseline offset of the timeline, carried for callers; the
    /// conversion arithmetic never reads it
    pub start_offset_seconds: i64,
    pub hour_length_in_seconds: i64,
    pub day_length_in_hours: i64,
    pub month_length_in_days: i64,
    pub year_length_in_months: i64,
}

impl CalendarDefinition {
    /// Create a validated definition
    ///
    /// Rejects any non-positive unit length; a zero length would make
    /// every derived division undefined.
    pub fn new(
        epoch_label: impl Into<String>,
        start_offset_seconds: i64,
        hour_length_in_seconds: i64,
        day_length_in_hours: i64,
        month_length_in_days: i64,
        year_length_in_months: i64,
    ) -> CalendarResult<Self> {
        let def = CalendarDefinition {
            epoch_label: epoch_label.into(),
            start_offset_seconds,
            hour_length_in_seconds,
            day_length_in_hours,
            month_length_in_days,
            year_length_in_months,
        };
        def.validate()?;
        Ok(def)
    }

    /// Re-check the unit length invariant
    ///
    /// Useful after deserializing a definition from an external record,
    /// where the derive bypasses [`CalendarDefinition::new`].
    pub fn validate(&self) -> CalendarResult<()> {
        let lengths = [
            ("hour_length_in_seconds", self.hour_length_in_seconds),
            ("day_length_in_hours", self.day_length_in_hours),
            ("month_length_in_days", self.month_length_in_days),
            ("year_length_in_months", self.year_length_in_months),
        ];
        for (field, value) in lengths {
            if value <= 0 {
                return Err(CalendarError::NonPositiveUnitLength { field, value });
            }
        }
        Ok(())
    }

    /// Derived second-sizes of each unit, recomputed fresh per call
    #[inline]
    pub fn unit_sizes(&self) -> UnitSizes {
        let seconds_per_hour = self.hour_length_in_seconds;
        let seconds_per_day = self.day_length_in_hours * seconds_per_hour;
        let seconds_per_month = self.month_length_in_days * seconds_per_day;
        let seconds_per_year = self.year_length_in_months * seconds_per_month;
        UnitSizes {
            seconds_per_hour,
            seconds_per_day,
            seconds_per_month,
            seconds_per_year,
        }
    }
}

impl Default for CalendarDefinition {
    /// Earth-like radixes: 3600 s/hour, 24 h/day, 30 d/month, 12 mo/year
    fn default() -> Self {
        CalendarDefinition {
            epoch_label: String::new(),
            start_offset_seconds: 0,
            hour_length_in_seconds: DEFAULT_HOUR_LENGTH_IN_SECONDS,
            day_length_in_hours: DEFAULT_DAY_LENGTH_IN_HOURS,
            month_length_in_days: DEFAULT_MONTH_LENGTH_IN_DAYS,
            year_length_in_months: DEFAULT_YEAR_LENGTH_IN_MONTHS,
        }
    }
}

/// Second-size of every calendar unit above the second
///
/// Plain derived values, never cached between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitSizes {
    pub seconds_per_hour: i64,
    pub seconds_per_day: i64,
    pub seconds_per_month: i64,
    pub seconds_per_year: i64,
}
