//! Simulation time model.
//!
//! # Design
//!
//! Time never advances on its own: the simulation's "now" is simply the
//! timestamp of the most recently executed event.  Using an unsigned integer
//! as the canonical time unit means all duration arithmetic is exact (no
//! floating-point drift) and comparisons are O(1).
//!
//! Event files count time in whole simulated seconds, but nothing in the
//! engine assumes a unit — only ordering and subtraction matter.

use std::fmt;

/// An absolute simulated timestamp.
///
/// Stored as `u64` to avoid overflow: at one unit per simulated second a
/// u64 lasts ~585 billion years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// Return the timestamp `n` units after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Timestamp {
        Timestamp(self.0 + n)
    }

    /// Units elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: u64) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
