//! Tick enumeration
//!
//! Ticks are the multiples of the chosen interval that fall inside the
//! visible range, emitted in increasing order.

use loreline_core::{CalendarDefinition, Timestamp};

use crate::{interval_size, AxisRange};

/// A planned axis: chosen spacing plus every tick position in range
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickPlan {
    /// Tick spacing in seconds
    pub interval: i64,
    /// Tick positions, strictly increasing, each a multiple of `interval`
    pub ticks: Vec<Timestamp>,
}

/// Enumerate the multiples of `interval` inside the range
///
/// The first tick is the smallest multiple of `interval` at or above
/// the range minimum; negative minima floor toward the epoch correctly
/// because the rounding is euclidean.
pub fn tick_values(range: AxisRange, interval: i64) -> Vec<Timestamp> {
    debug_assert!(interval > 0);

    let mut tick = range.min().as_secs().div_euclid(interval) * interval;
    if tick < range.min().as_secs() {
        tick += interval;
    }

    let mut ticks = Vec::new();
    while tick <= range.max().as_secs() {
        ticks.push(Timestamp(tick));
        tick += interval;
    }
    ticks
}

/// Choose a spacing and enumerate its ticks in one call
///
/// Convenience for charting callers that always want both.
pub fn plan(range: AxisRange, def: &CalendarDefinition) -> TickPlan {
    let interval = interval_size(range, def);
    TickPlan {
        interval,
        ticks: tick_values(range, interval),
    }
}
