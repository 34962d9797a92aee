//! Strongly typed, zero-cost identifier wrappers.
//!
//! The inner integer is `pub` to allow direct indexing into `Vec`s via
//! `id.0 as usize`, but callers should prefer the `.index()` helper for
//! clarity.

use std::fmt;

/// Index of a checkout line in the store's line list.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineId(pub u32);

impl LineId {
    /// Sentinel meaning "no valid line" — equivalent to `u32::MAX`.
    pub const INVALID: LineId = LineId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for LineId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl From<LineId> for usize {
    #[inline(always)]
    fn from(id: LineId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for LineId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<LineId, Self::Error> {
        u32::try_from(n).map(LineId)
    }
}
