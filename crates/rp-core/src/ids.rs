//! Strongly typed, zero-cost ticket identifier.
//!
//! Raw datasets identify tickets by free-form strings; ingestion interns
//! those into consecutive `TicketId`s so every per-ticket structure (routes,
//! players, colors, status records) can be a plain `Vec` indexed by
//! `id.index()`.  The inner integer is `pub` to allow direct indexing, but
//! callers should prefer the `.index()` helper for clarity.

use std::fmt;

/// Index of a ticket in dense per-ticket storage.  Max ~4.3 billion tickets.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicketId(pub u32);

impl TicketId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: TicketId = TicketId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for TicketId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TicketId({})", self.0)
    }
}

impl From<TicketId> for usize {
    #[inline(always)]
    fn from(id: TicketId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for TicketId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<TicketId, Self::Error> {
        u32::try_from(n).map(TicketId)
    }
}
