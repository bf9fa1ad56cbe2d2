//! `StatusBoard` — the per-ticket record store behind the status table.
//!
//! Records are created exactly once, on first sighting of a ticket during
//! ingestion (order table or sample stream).  Every later mutation goes
//! through a [`TicketId`] lookup; a miss is an internal-consistency error
//! and is propagated, never ignored.  After each successful mutation the
//! full row list is pushed to the owned [`DisplaySink`].

use chrono::{Duration, NaiveDateTime};

use rp_core::{TicketId, calendar, format_duration};

use crate::{DisplaySink, StatusError, StatusResult, TicketState};

// ── TicketRow ─────────────────────────────────────────────────────────────────

/// One render-ready status-table row.
///
/// `finish` and `duration` stay empty until the route's duration is known.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TicketRow {
    pub ticket:   TicketId,
    /// Raw ticket label from the dataset.
    pub label:    String,
    pub customer: String,
    pub state:    TicketState,
    /// Store-entry timestamp, dataset layout.
    pub start:    String,
    pub finish:   String,
    pub duration: String,
    /// Total item count from the order table (0 when unknown).
    pub items:    u32,
}

struct TicketRecord {
    row:        TicketRow,
    started_at: NaiveDateTime,
}

// ── StatusBoard ───────────────────────────────────────────────────────────────

/// Ticket lifecycle tracker publishing to a [`DisplaySink`].
pub struct StatusBoard<D: DisplaySink> {
    records: Vec<TicketRecord>,
    sink:    D,
}

impl<D: DisplaySink> StatusBoard<D> {
    pub fn new(sink: D) -> Self {
        Self { records: Vec::new(), sink }
    }

    /// Number of registered tickets.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create the record for `ticket`.
    ///
    /// Ids are dense, so registration must happen in ascending id order —
    /// the builder walks the ticket directory, which guarantees it.
    pub fn register(
        &mut self,
        ticket: TicketId,
        label: &str,
        customer: &str,
        started_at: NaiveDateTime,
        items: u32,
    ) -> StatusResult<()> {
        if ticket.index() < self.records.len() {
            return Err(StatusError::DuplicateTicket(ticket));
        }
        debug_assert_eq!(ticket.index(), self.records.len());

        self.records.push(TicketRecord {
            row: TicketRow {
                ticket,
                label:    label.to_owned(),
                customer: customer.to_owned(),
                state:    TicketState::Pending,
                start:    started_at.format(calendar::TIMESTAMP_FORMAT).to_string(),
                finish:   String::new(),
                duration: String::new(),
                items,
            },
            started_at,
        });
        self.push_rows();
        Ok(())
    }

    /// Move `ticket` to `state`.
    ///
    /// Transitions only move forward; a repeat or backward request is a
    /// silent no-op (nothing is pushed to the sink).
    pub fn set_state(&mut self, ticket: TicketId, state: TicketState) -> StatusResult<()> {
        let record = self.record_mut(ticket)?;
        if state.rank() <= record.row.state.rank() {
            return Ok(());
        }
        record.row.state = state;
        self.push_rows();
        Ok(())
    }

    /// Record the route duration of `ticket`.
    ///
    /// Formats the elapsed time (`125` → `"2 min. 5s"`) and derives the
    /// finish timestamp as start plus elapsed.
    pub fn set_duration(&mut self, ticket: TicketId, elapsed_secs: u64) -> StatusResult<()> {
        let record = self.record_mut(ticket)?;
        let finish = record.started_at + Duration::seconds(elapsed_secs as i64);
        record.row.duration = format_duration(elapsed_secs);
        record.row.finish = finish.format(calendar::TIMESTAMP_FORMAT).to_string();
        self.push_rows();
        Ok(())
    }

    /// Current state of `ticket`.
    pub fn state_of(&self, ticket: TicketId) -> StatusResult<TicketState> {
        self.record(ticket).map(|r| r.row.state)
    }

    /// All rows in ascending ticket-id order.
    pub fn rows(&self) -> Vec<TicketRow> {
        self.records.iter().map(|r| r.row.clone()).collect()
    }

    /// Consume the board, returning its sink.
    pub fn into_sink(self) -> D {
        self.sink
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn record(&self, ticket: TicketId) -> StatusResult<&TicketRecord> {
        self.records
            .get(ticket.index())
            .ok_or(StatusError::UnknownTicket(ticket))
    }

    fn record_mut(&mut self, ticket: TicketId) -> StatusResult<&mut TicketRecord> {
        self.records
            .get_mut(ticket.index())
            .ok_or(StatusError::UnknownTicket(ticket))
    }

    fn push_rows(&mut self) {
        let rows = self.rows();
        self.sink.refresh(&rows);
    }
}
