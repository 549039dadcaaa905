//! Loreline Axis - adaptive tick planning for calendar time axes
//!
//! Generalizes "nice number" axis labeling to calendars whose units are
//! not fixed at 60/24/30/12: tick spacing candidates are sized from the
//! calendar's own year/month/day lengths, then picked so a rendered
//! axis shows a readable number of labels at any zoom level.

pub mod interval;
pub mod ticks;

pub use interval::*;
pub use ticks::*;
