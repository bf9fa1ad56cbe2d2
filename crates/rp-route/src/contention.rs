//! Spatial-temporal contention analysis.
//!
//! A single batch scan over the whole day's samples, run to completion
//! before playback starts, producing two read-mostly structures:
//!
//! - the **collision set**: `(cell, second)` keys where two or more distinct
//!   tickets were recorded in the same cell at the same second;
//! - the **shared-location map**: for every sample whose cell is also
//!   visited by another ticket (at any second), an entry keyed by that
//!   sample's own `(cell, second)` holding the tickets recorded there.  An
//!   entry answers "who had drawn this cell by this second", which is what
//!   finish-time reconciliation repaints.
//!
//! The shared map is the only part mutated during playback: a finishing or
//! abandoning route [`retire`][ContentionIndex::retire]s its ticket so
//! reconciliation repaints only surviving occupants.
//!
//! The scan is a pairwise O(n²) pass.  With the `parallel` cargo feature
//! the outer loop fans out onto rayon and the partial indexes are merged;
//! the result is identical.

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};

use rp_core::{GridCell, SimSecond, TicketId};
use rp_ingest::LocationSample;

// ── ContentionKey ─────────────────────────────────────────────────────────────

/// A cell/second pair, independent of any ticket.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ContentionKey {
    pub cell:   GridCell,
    pub second: SimSecond,
}

impl ContentionKey {
    #[inline]
    pub fn new(cell: GridCell, second: SimSecond) -> Self {
        Self { cell, second }
    }
}

// ── ContentionIndex ───────────────────────────────────────────────────────────

/// Precomputed collision set and shared-location map.
#[derive(Default, Clone, Debug)]
pub struct ContentionIndex {
    collisions: FxHashSet<ContentionKey>,
    shared:     FxHashMap<ContentionKey, BTreeSet<TicketId>>,
}

impl ContentionIndex {
    /// Scan the flattened dataset and build the index.
    pub fn analyze(samples: &[LocationSample]) -> Self {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..samples.len())
                .into_par_iter()
                .fold(Self::default, |mut acc, i| {
                    acc.scan_from(samples, i);
                    acc
                })
                .reduce(Self::default, |mut a, b| {
                    a.merge(b);
                    a
                })
        }

        #[cfg(not(feature = "parallel"))]
        {
            let mut index = Self::default();
            for i in 0..samples.len() {
                index.scan_from(samples, i);
            }
            index
        }
    }

    /// Compare sample `i` against every other sample, recording contention
    /// found from `i`'s perspective.
    fn scan_from(&mut self, samples: &[LocationSample], i: usize) {
        let a = samples[i];
        for (j, b) in samples.iter().enumerate() {
            if i == j || a.cell != b.cell || a.ticket == b.ticket {
                continue;
            }

            if a.second == b.second {
                self.collisions.insert(ContentionKey::new(a.cell, a.second));
            }
            // The shared entry lives at the counterpart's own sample, so an
            // entry always names the tickets actually recorded at its key.
            self.shared
                .entry(ContentionKey::new(b.cell, b.second))
                .or_default()
                .insert(b.ticket);
        }
    }

    #[cfg(feature = "parallel")]
    fn merge(&mut self, other: Self) {
        self.collisions.extend(other.collisions);
        for (key, tickets) in other.shared {
            self.shared.entry(key).or_default().extend(tickets);
        }
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Was `key` a simultaneous-occupancy event?
    #[inline]
    pub fn is_collision(&self, key: ContentionKey) -> bool {
        self.collisions.contains(&key)
    }

    /// The tickets other than `me` recorded at `key`'s cell and second.
    ///
    /// Always excludes the asking ticket, so every caller gets its own
    /// perspective of the same physical overlap.
    pub fn others_at(&self, key: ContentionKey, me: TicketId) -> impl Iterator<Item = TicketId> + '_ {
        self.shared
            .get(&key)
            .into_iter()
            .flatten()
            .copied()
            .filter(move |&t| t != me)
    }

    /// Does any *other* ticket share `key`'s cell with `me`?
    pub fn is_shared(&self, key: ContentionKey, me: TicketId) -> bool {
        self.others_at(key, me).next().is_some()
    }

    /// All shared-map entries in ascending key order.
    ///
    /// Keys sort by cell then second; ticket sets are `BTreeSet`s, so a full
    /// reconciliation repaint walks occupants in one deterministic order.
    pub fn entries_sorted(&self) -> Vec<(ContentionKey, &BTreeSet<TicketId>)> {
        let mut entries: Vec<_> = self.shared.iter().map(|(&k, v)| (k, v)).collect();
        entries.sort_by_key(|&(k, _)| k);
        entries
    }

    pub fn collision_count(&self) -> usize {
        self.collisions.len()
    }

    pub fn shared_count(&self) -> usize {
        self.shared.len()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Remove `ticket` from every shared-map entry.
    ///
    /// Called when a route finishes or is abandoned; entries left empty are
    /// dropped.
    pub fn retire(&mut self, ticket: TicketId) {
        self.shared.retain(|_, tickets| {
            tickets.remove(&ticket);
            !tickets.is_empty()
        });
    }
}
