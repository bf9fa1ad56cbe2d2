//! `TicketDirectory` — interning of raw string ticket ids.
//!
//! Raw datasets key everything by free-form ticket strings.  The directory
//! assigns each distinct string a consecutive [`TicketId`] on first sight,
//! so every downstream per-ticket structure can be a dense `Vec`.  A ticket
//! is interned exactly once; later sightings return the existing id.

use std::collections::HashMap;

use rp_core::TicketId;

/// Directory row: the raw labels behind one `TicketId`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TicketEntry {
    /// Raw ticket id as it appears in the dataset.
    pub label: String,
    /// Customer label from the first row that carried one.
    pub customer: String,
}

/// Bidirectional mapping between raw ticket strings and dense [`TicketId`]s.
#[derive(Default, Clone, Debug)]
pub struct TicketDirectory {
    entries: Vec<TicketEntry>,
    by_label: HashMap<String, TicketId>,
}

impl TicketDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `label`, interning it on first sight.
    ///
    /// An empty customer label never overwrites a known one; a known one
    /// backfills an entry interned from a customer-less row.
    pub fn intern(&mut self, label: &str, customer: &str) -> TicketId {
        if let Some(&id) = self.by_label.get(label) {
            let entry = &mut self.entries[id.index()];
            if entry.customer.is_empty() && !customer.is_empty() {
                entry.customer = customer.to_owned();
            }
            return id;
        }

        let id = TicketId(self.entries.len() as u32);
        self.entries.push(TicketEntry {
            label: label.to_owned(),
            customer: customer.to_owned(),
        });
        self.by_label.insert(label.to_owned(), id);
        id
    }

    /// Look up a previously interned label.
    pub fn get(&self, label: &str) -> Option<TicketId> {
        self.by_label.get(label).copied()
    }

    /// Raw ticket label behind `id`.
    pub fn label(&self, id: TicketId) -> &str {
        &self.entries[id.index()].label
    }

    /// Customer label behind `id` (may be empty).
    pub fn customer(&self, id: TicketId) -> &str {
        &self.entries[id.index()].customer
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate all tickets in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (TicketId, &TicketEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (TicketId(i as u32), e))
    }
}
