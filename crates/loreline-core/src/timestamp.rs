//! Flat timestamp primitive
//!
//! A timeline position is a signed count of seconds relative to the
//! calendar's epoch. Negative values lie before the epoch.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Seconds relative to a calendar's epoch
/// Negative values are before-epoch ("BC" side of the axis)
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);
    pub const MAX: Timestamp = Timestamp(i64::MAX);
    pub const MIN: Timestamp = Timestamp(i64::MIN);

    #[inline]
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs)
    }

    #[inline]
    pub fn as_secs(self) -> i64 {
        self.0
    }

    /// Whether this position lies on the before-epoch side of the axis
    #[inline]
    pub fn is_before_epoch(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub fn saturating_add(self, secs: i64) -> Self {
        Timestamp(self.0.saturating_add(secs))
    }

    #[inline]
    pub fn saturating_sub(self, secs: i64) -> Self {
        Timestamp(self.0.saturating_sub(secs))
    }
}

impl Add<i64> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn add(self, rhs: i64) -> Self::Output {
        Timestamp(self.0 + rhs)
    }
}

impl Sub<i64> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn sub(self, rhs: i64) -> Self::Output {
        Timestamp(self.0 - rhs)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = i64;

    /// Signed span in seconds between two positions
    #[inline]
    fn sub(self, rhs: Timestamp) -> Self::Output {
        self.0 - rhs.0
    }
}

impl std::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t({}s)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_sides() {
        assert!(!Timestamp::ZERO.is_before_epoch());
        assert!(Timestamp(-1).is_before_epoch());
        assert!(!Timestamp(1).is_before_epoch());
    }

    #[test]
    fn test_span_and_offset() {
        let a = Timestamp(100);
        let b = a + 50;

        assert_eq!(b, Timestamp(150));
        assert_eq!(b - a, 50);
        assert_eq!(a - b, -50);
        assert_eq!(b - 150, Timestamp::ZERO);
    }

    #[test]
    fn test_serde_transparent() {
        let t = Timestamp(-3_110_400_000);
        let json = serde_json::to_string(&t).unwrap();

        assert_eq!(json, "-3110400000");
        assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), t);
    }
}
