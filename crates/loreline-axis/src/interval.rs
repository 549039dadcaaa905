//! Tick interval selection
//!
//! The candidate table is fixed: year multiples from 1000 down to a
//! half year, then two-month/one-month/half-month, then week and day.
//! Candidates are scanned largest to smallest and the first one whose
//! label count lands in the readable band wins.

use loreline_core::{CalendarDefinition, CalendarError, CalendarResult, Timestamp};
use tracing::debug;

/// Readable label-count band targeted by the primary selection rule
const MIN_LABELS: i64 = 5;
const MAX_LABELS: i64 = 20;

/// Visible axis range in flat timestamp space
///
/// Construction rejects `max <= min`, so every planner call operates on
/// a range with positive span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisRange {
    min: Timestamp,
    max: Timestamp,
}

impl AxisRange {
    pub fn new(min: Timestamp, max: Timestamp) -> CalendarResult<Self> {
        if max <= min {
            return Err(CalendarError::EmptyRange {
                min: min.as_secs(),
                max: max.as_secs(),
            });
        }
        Ok(AxisRange { min, max })
    }

    #[inline]
    pub fn min(&self) -> Timestamp {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Timestamp {
        self.max
    }

    /// Span in seconds, always positive
    #[inline]
    pub fn span(&self) -> i64 {
        self.max - self.min
    }
}

/// The fixed candidate spacings for one calendar, largest first
///
/// Built locally per call; half-unit entries round down to whole
/// seconds and are clamped to at least one second.
fn candidate_intervals(def: &CalendarDefinition) -> [i64; 16] {
    let units = def.unit_sizes();
    let year = units.seconds_per_year;
    let month = units.seconds_per_month;
    let day = units.seconds_per_day;

    [
        year.saturating_mul(1000),
        year.saturating_mul(500),
        year.saturating_mul(200),
        year.saturating_mul(100),
        year.saturating_mul(50),
        year.saturating_mul(20),
        year.saturating_mul(10),
        year.saturating_mul(5),
        year.saturating_mul(2),
        year,
        (year / 2).max(1),
        month.saturating_mul(2),
        month,
        (month / 2).max(1),
        day.saturating_mul(7),
        day,
    ]
}

/// Pick a tick spacing for the range, in seconds
///
/// Primary rule: the first (widest) candidate whose label count
/// `span / c` falls in [5, 20], evaluated exactly as
/// `5c <= span <= 20c`. If no candidate qualifies, fall back to the
/// widest candidate that fits the span at least once, or the narrowest
/// candidate for spans below even that.
pub fn interval_size(range: AxisRange, def: &CalendarDefinition) -> i64 {
    let span = range.span();
    let candidates = candidate_intervals(def);

    for c in candidates {
        if c.saturating_mul(MIN_LABELS) <= span && span <= c.saturating_mul(MAX_LABELS) {
            return c;
        }
    }

    let fallback = candidates
        .into_iter()
        .find(|&c| c <= span)
        .unwrap_or(candidates[candidates.len() - 1]);
    debug!(
        span,
        interval = fallback,
        "no candidate interval in the label band, using fallback"
    );
    fallback
}
