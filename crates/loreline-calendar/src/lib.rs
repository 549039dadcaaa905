//! Loreline Calendar - conversion engine and date text codec
//!
//! This crate implements the calendar arithmetic core:
//! - Bijective conversion between flat second timestamps and structured
//!   dates under any positive mixed-radix calendar definition
//! - The "no year zero" era convention on both sides of the epoch
//! - Era-qualified date text: `公元1年1月1日` / `公元前1年12月30日`,
//!   plus a signed shorthand (`-100年1月1日`)
//!
//! Everything here is a pure function over immutable values; derived
//! unit sizes are recomputed per call and nothing is cached.

pub mod codec;
pub mod convert;

pub use codec::*;
pub use convert::*;
