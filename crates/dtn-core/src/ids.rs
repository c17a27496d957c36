//! Strongly typed, zero-cost host identifier.
//!
//! `HostId` is `Copy + Ord + Hash` so it can be used as a map key or sorted
//! collection element without ceremony.  The inner integer is `pub` to allow
//! direct indexing into per-host `Vec`s via `id.0 as usize`, but callers
//! should prefer the `.index()` helper for clarity.

use std::fmt;

/// Index of a simulated host.  Max ~4.3 billion hosts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostId(pub u32);

impl HostId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: HostId = HostId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for HostId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostId({})", self.0)
    }
}

impl From<HostId> for usize {
    #[inline(always)]
    fn from(id: HostId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for HostId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<HostId, Self::Error> {
        u32::try_from(n).map(HostId)
    }
}
