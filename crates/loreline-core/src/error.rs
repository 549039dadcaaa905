//! Error types for Loreline calendars

use thiserror::Error;

/// Construction and planning precondition failures
///
/// These are caught once, at the boundary where a definition or range
/// is built; the conversion and planning functions themselves have no
/// error path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("non-positive unit length: {field} = {value}")]
    NonPositiveUnitLength { field: &'static str, value: i64 },

    #[error("empty axis range: min {min} is not below max {max}")]
    EmptyRange { min: i64, max: i64 },
}

/// Date text parsing failures
///
/// Always locally recoverable: the caller re-prompts for corrected
/// input. The display text is the stable, human-readable reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Text matches neither the era-qualified nor the signed grammar
    #[error("unrecognized date format")]
    UnrecognizedFormat,

    #[error("year must be a positive integer")]
    NonPositiveYear,

    /// Month outside [1, months/year] for the supplied definition
    #[error("month out of range")]
    MonthOutOfRange { month: i64, max: i64 },

    /// Day outside [1, days/month] for the supplied definition
    #[error("day out of range")]
    DayOutOfRange { day: i64, max: i64 },
}

/// Result type for Loreline operations
pub type CalendarResult<T> = Result<T, CalendarError>;
