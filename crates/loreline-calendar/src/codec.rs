//! Era-qualified date text codec
//!
//! Canonical form: `公元前100年1月1日` / `公元100年1月1日`.
//! Signed shorthand on input only: `-100年1月1日` / `100年1月1日`.
//! Time of day is never rendered and never parsed.

use loreline_core::{CalendarDate, CalendarDefinition, FormatError, Timestamp};

use crate::{date_to_seconds, seconds_to_date};

/// Era token for dates before the epoch
pub const ERA_BEFORE_EPOCH: &str = "公元前";
/// Era token for dates at or after the epoch
pub const ERA_AFTER_EPOCH: &str = "公元";

/// Render a timestamp as an era-qualified date string
pub fn format(ts: Timestamp, def: &CalendarDefinition) -> String {
    let date = seconds_to_date(ts, def);
    let era = if date.is_before_epoch {
        ERA_BEFORE_EPOCH
    } else {
        ERA_AFTER_EPOCH
    };
    format!("{}{}年{}月{}日", era, date.year, date.month, date.day)
}

/// Parse an era-qualified or signed date string back to a timestamp
///
/// Validation runs in a fixed order so each failure carries one
/// distinct reason: grammar, then year, then month, then day. Month and
/// day bounds come from the supplied definition.
pub fn parse(text: &str, def: &CalendarDefinition) -> Result<Timestamp, FormatError> {
    let (is_before_epoch, year, month, day) =
        split_date(text).ok_or(FormatError::UnrecognizedFormat)?;

    if year < 1 {
        return Err(FormatError::NonPositiveYear);
    }
    if month < 1 || month > def.year_length_in_months {
        return Err(FormatError::MonthOutOfRange {
            month,
            max: def.year_length_in_months,
        });
    }
    if day < 1 || day > def.month_length_in_days {
        return Err(FormatError::DayOutOfRange {
            day,
            max: def.month_length_in_days,
        });
    }

    let date = CalendarDate::new(is_before_epoch, year, month, day);
    Ok(date_to_seconds(&date, def))
}

/// Split `[era|-]Y年M月D日` into era flag and the three numbers
///
/// Returns None for anything outside the two accepted grammars.
fn split_date(text: &str) -> Option<(bool, i64, i64, i64)> {
    // Era prefix first; 公元 is a prefix of 公元前, so the longer token
    // has to be tried before the shorter one.
    let (era, rest) = if let Some(rest) = text.strip_prefix(ERA_BEFORE_EPOCH) {
        (Some(true), rest)
    } else if let Some(rest) = text.strip_prefix(ERA_AFTER_EPOCH) {
        (Some(false), rest)
    } else {
        (None, text)
    };

    // The signed shorthand only exists when no era token is present.
    let (negative, rest) = match era {
        Some(_) => (false, rest),
        None => match rest.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, rest),
        },
    };

    let (year_digits, rest) = rest.split_once('年')?;
    let (month_digits, rest) = rest.split_once('月')?;
    let day_digits = rest.strip_suffix('日')?;

    let year = parse_digits(year_digits)?;
    let month = parse_digits(month_digits)?;
    let day = parse_digits(day_digits)?;

    Some((era.unwrap_or(negative), year, month, day))
}

/// A non-empty run of ASCII digits that fits in i64
fn parse_digits(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
