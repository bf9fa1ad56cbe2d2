//! Ingested record types.

use chrono::NaiveDateTime;

use rp_core::{GridCell, ShopCalendar, SimSecond, TicketId};

// ── LocationSample ────────────────────────────────────────────────────────────

/// One recorded customer position: a grid cell at a simulated second.
///
/// Immutable once created.  Customer labels live in the
/// [`TicketDirectory`][crate::TicketDirectory], not on every sample.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LocationSample {
    pub ticket: TicketId,
    pub cell: GridCell,
    pub second: SimSecond,
    /// `true` when the customer picked an item at this position.
    pub picking: bool,
}

// ── OrderLine ─────────────────────────────────────────────────────────────────

/// Aggregated order metadata for one ticket.
///
/// The raw order table carries one row per product line; the loader sums
/// `quantity` across rows of the same ticket.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OrderLine {
    pub ticket: TicketId,
    /// Store-entry timestamp from the order table.
    pub entered_at: NaiveDateTime,
    /// Total item count across all product lines of this ticket.
    pub quantity: u32,
}

// ── StoreDay ──────────────────────────────────────────────────────────────────

/// One ingested day of location samples, grouped per ticket.
#[derive(Clone, Debug)]
pub struct StoreDay {
    /// Wall-clock anchor derived from the first sample row.
    pub calendar: ShopCalendar,

    /// Per-ticket samples in file arrival order, indexed by `TicketId`.
    /// Tickets known only from the order table have an empty list.
    pub samples: Vec<Vec<LocationSample>>,
}

impl StoreDay {
    /// A day with no samples at all (placeholder calendar).
    pub fn empty() -> Self {
        Self {
            calendar: ShopCalendar::default(),
            samples: Vec::new(),
        }
    }

    /// Total number of samples across all tickets.
    pub fn sample_count(&self) -> usize {
        self.samples.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count() == 0
    }

    /// Samples of one ticket, or an empty slice for sample-less tickets.
    pub fn samples_of(&self, ticket: TicketId) -> &[LocationSample] {
        self.samples
            .get(ticket.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All samples flattened across tickets, for batch contention analysis.
    pub fn flattened(&self) -> Vec<LocationSample> {
        self.samples.iter().flatten().copied().collect()
    }
}
