//! Per-ticket display colors.
//!
//! # Determinism strategy
//!
//! The original tool rolled colors from an unseeded RNG, so every page load
//! produced a different palette.  Here the whole assignment is generated
//! up-front from one seed: the same seed and ticket count always yield the
//! same palette, and duplicates are re-rolled so the ticket→color mapping
//! stays a bijection for the lifetime of the replay.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::TicketId;

// ── DisplayColor ──────────────────────────────────────────────────────────────

/// A 24-bit RGB display color.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayColor(pub u32);

impl DisplayColor {
    /// White is reserved for the empty floor and never assigned to a ticket.
    pub const WHITE: DisplayColor = DisplayColor(0xFF_FFFF);

    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl fmt::Display for DisplayColor {
    /// Hex form used by rendering collaborators, e.g. `#1A2B3C`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

// ── ColorAssignment ───────────────────────────────────────────────────────────

/// The ticket→color bijection, assigned once at the start of playback and
/// stable for every ticket's lifetime.
#[derive(Clone, Debug)]
pub struct ColorAssignment {
    /// One color per ticket, indexed by `TicketId`.
    colors: Vec<DisplayColor>,
}

impl ColorAssignment {
    /// Deterministically assign one unique non-white color per ticket.
    pub fn generate(ticket_count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut used: HashSet<DisplayColor> = HashSet::with_capacity(ticket_count);
        let mut colors = Vec::with_capacity(ticket_count);

        for _ in 0..ticket_count {
            // Exclusive upper bound keeps WHITE out of the palette.
            loop {
                let candidate = DisplayColor(rng.gen_range(0..DisplayColor::WHITE.0));
                if used.insert(candidate) {
                    colors.push(candidate);
                    break;
                }
            }
        }

        Self { colors }
    }

    /// The color assigned to `ticket`.
    ///
    /// # Panics
    /// Panics if `ticket` was not part of the generated assignment.
    #[inline]
    pub fn color_of(&self, ticket: TicketId) -> DisplayColor {
        self.colors[ticket.index()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
