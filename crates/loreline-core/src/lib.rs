//! Loreline Core - Fundamental calendar types and primitives
//!
//! This crate defines the core types used throughout Loreline:
//! - Calendar definitions (configurable mixed-radix unit lengths)
//! - Flat second timestamps relative to a calendar's epoch
//! - Structured calendar dates with a before/after-epoch era
//! - Error types

pub mod calendar;
pub mod date;
pub mod error;
pub mod timestamp;

pub use calendar::*;
pub use date::*;
pub use error::*;
pub use timestamp::*;
