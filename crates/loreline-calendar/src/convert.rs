//! Timestamp / structured date conversion
//!
//! Mixed-radix positional arithmetic over the calendar's unit sizes.
//! Every division by a unit size is euclidean (`div_euclid` /
//! `rem_euclid`), never truncating: remainders stay in `[0, size)` for
//! negative timestamps too, which is what keeps the before-epoch side
//! of the bijection aligned.

use loreline_core::{CalendarDate, CalendarDefinition, Timestamp};

/// Break a flat timestamp into the calendar's own units
///
/// Timestamp 0 is year 1, month 1, day 1, 00:00:00 after the epoch;
/// timestamp -1 is the last second of year 1 before the epoch. No year
/// is numbered zero.
pub fn seconds_to_date(ts: Timestamp, def: &CalendarDefinition) -> CalendarDate {
    let units = def.unit_sizes();
    let t = ts.as_secs();
    let is_before_epoch = t < 0;

    // Years relative to the epoch, floored toward negative infinity;
    // the remainder within the year is then always non-negative.
    let year_index = t.div_euclid(units.seconds_per_year);
    let in_year = t - year_index * units.seconds_per_year;

    let month = in_year.div_euclid(units.seconds_per_month) + 1;
    let in_month = in_year.rem_euclid(units.seconds_per_month);

    let day = in_month.div_euclid(units.seconds_per_day) + 1;
    let in_day = in_month.rem_euclid(units.seconds_per_day);

    let hour = in_day.div_euclid(units.seconds_per_hour);
    let in_hour = in_day.rem_euclid(units.seconds_per_hour);

    CalendarDate {
        is_before_epoch,
        // Calendar-facing year: year indices -1, -2, .. map to years
        // 1, 2, .. before the epoch; 0, 1, .. map to years 1, 2, .. after.
        year: year_index.abs() + if is_before_epoch { 0 } else { 1 },
        month,
        day,
        hour,
        minute: in_hour.div_euclid(60),
        second: in_hour.rem_euclid(60),
    }
}

/// Rebuild the flat timestamp for a structured date
///
/// Exact inverse of [`seconds_to_date`] for any date that function
/// produces. Assumes the date's fields are within the definition's
/// ranges; out-of-range fields are the caller's validation problem.
pub fn date_to_seconds(date: &CalendarDate, def: &CalendarDefinition) -> Timestamp {
    let units = def.unit_sizes();

    // Before the epoch, year N spans [-N * year, -(N-1) * year); the
    // sub-year units then count forward from that lower edge exactly as
    // they do after the epoch.
    let year_base = if date.is_before_epoch {
        -(date.year * units.seconds_per_year)
    } else {
        (date.year - 1) * units.seconds_per_year
    };

    Timestamp(
        year_base
            + (date.month - 1) * units.seconds_per_month
            + (date.day - 1) * units.seconds_per_day
            + date.hour * units.seconds_per_hour
            + date.minute * 60
            + date.second,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_def() -> CalendarDefinition {
        CalendarDefinition::default()
    }

    #[test]
    fn test_epoch_is_year_one() {
        let date = seconds_to_date(Timestamp::ZERO, &default_def());

        assert_eq!(date, CalendarDate::EPOCH);
    }

    #[test]
    fn test_second_before_epoch() {
        let def = default_def();
        let date = seconds_to_date(Timestamp(-1), &def);

        // Last second of the last day of year 1 before the epoch.
        assert!(date.is_before_epoch);
        assert_eq!(date.year, 1);
        assert_eq!(date.month, def.year_length_in_months);
        assert_eq!(date.day, def.month_length_in_days);
        assert_eq!(date.hour, def.day_length_in_hours - 1);
        assert_eq!(date.minute, 59);
        assert_eq!(date.second, 59);
    }

    #[test]
    fn test_one_month_in() {
        let date = seconds_to_date(Timestamp(2_592_000), &default_def());

        assert_eq!(date, CalendarDate::new(false, 1, 2, 1));
    }

    #[test]
    fn test_before_epoch_year_boundaries() {
        let def = default_def();
        let year = def.unit_sizes().seconds_per_year;

        // First second of year 100 before the epoch.
        let lower = seconds_to_date(Timestamp(-100 * year), &def);
        assert_eq!(lower, CalendarDate::new(true, 100, 1, 1));

        // One second earlier belongs to year 101.
        let earlier = seconds_to_date(Timestamp(-100 * year - 1), &def);
        assert_eq!(earlier.year, 101);

        // Last second of year 100 is one below the year 99 edge.
        let upper = seconds_to_date(Timestamp(-99 * year - 1), &def);
        assert_eq!(upper.year, 100);
        assert_eq!(upper.month, def.year_length_in_months);
    }

    #[test]
    fn test_round_trip_at_boundaries() {
        let def = default_def();
        let units = def.unit_sizes();
        let probes = [
            0,
            1,
            -1,
            59,
            60,
            units.seconds_per_hour - 1,
            units.seconds_per_hour,
            units.seconds_per_day - 1,
            units.seconds_per_day,
            units.seconds_per_month,
            units.seconds_per_year - 1,
            units.seconds_per_year,
            -units.seconds_per_year,
            -units.seconds_per_year - 1,
            15 * units.seconds_per_year + 12345,
            -4000 * units.seconds_per_year + 678,
        ];

        for t in probes {
            let ts = Timestamp(t);
            let date = seconds_to_date(ts, &def);
            assert_eq!(date_to_seconds(&date, &def), ts, "t = {}", t);
        }
    }

    #[test]
    fn test_round_trip_odd_radixes() {
        // 100-second hours, 10-hour days, 7-day months, 5-month years.
        let def = CalendarDefinition::new("", 0, 100, 10, 7, 5).unwrap();

        for t in -40_000..40_000 {
            let ts = Timestamp(t);
            let date = seconds_to_date(ts, &def);
            assert_eq!(date_to_seconds(&date, &def), ts, "t = {}", t);
        }
    }

    #[test]
    fn test_field_bounds_odd_radixes() {
        let def = CalendarDefinition::new("", 0, 97, 11, 13, 3).unwrap();

        for t in (-500_000..500_000).step_by(641) {
            let date = seconds_to_date(Timestamp(t), &def);

            assert!(date.year >= 1, "t = {}", t);
            assert!(date.month >= 1 && date.month <= def.year_length_in_months);
            assert!(date.day >= 1 && date.day <= def.month_length_in_days);
            assert!(date.hour >= 0 && date.hour < def.day_length_in_hours);
            assert!(date.minute >= 0 && date.minute < 60);
            assert!(date.second >= 0 && date.second < 60);
        }
    }

    #[test]
    fn test_minutes_past_short_hour() {
        // A 90-second hour still splits into 60-second minutes; the
        // minute field only ever reaches 1 before the hour rolls over.
        let def = CalendarDefinition::new("", 0, 90, 10, 10, 10).unwrap();
        let date = seconds_to_date(Timestamp(75), &def);

        assert_eq!(date.hour, 0);
        assert_eq!(date.minute, 1);
        assert_eq!(date.second, 15);
    }
}
