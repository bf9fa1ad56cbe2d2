//! `WakeQueue` — sparse per-second player activation queue.
//!
//! Most tickets are idle most seconds: their next waypoint is in the
//! future, or their route has not started.  Rather than ask every player
//! "is it your turn?" each second, a player registers the second at which
//! its next waypoint is due and the driver drains only the players
//! scheduled for the current second — O(active) work per tick instead of
//! O(tickets).
//!
//! `BTreeMap` keeps inserts and pops at O(log W) where W is the number of
//! distinct future seconds with a queued player; with playable routes one
//! second apart W stays tiny.

use std::collections::BTreeMap;

use rp_core::{SimSecond, TicketId};

/// Maps simulated seconds → tickets whose player must run at that second.
#[derive(Default, Debug)]
pub struct WakeQueue {
    inner: BTreeMap<SimSecond, Vec<TicketId>>,
    /// Cached entry count for O(1) `len()`.
    total: usize,
}

impl WakeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `ticket` to wake at `second`.
    ///
    /// A ticket appears at most once: the driver re-inserts it only after
    /// draining it, and a player schedules one waypoint at a time.
    pub fn push(&mut self, second: SimSecond, ticket: TicketId) {
        self.inner.entry(second).or_default().push(ticket);
        self.total += 1;
    }

    /// Remove and return all tickets scheduled for exactly `second`.
    ///
    /// `None` when nothing is queued for that second — the common case,
    /// avoiding an allocation.
    pub fn drain_second(&mut self, second: SimSecond) -> Option<Vec<TicketId>> {
        let tickets = self.inner.remove(&second)?;
        self.total -= tickets.len();
        Some(tickets)
    }

    /// The earliest second with at least one queued ticket.
    pub fn next_second(&self) -> Option<SimSecond> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
