//! The status-table publishing seam.

use crate::tracker::TicketRow;

/// Receives the full, current row list after every board mutation.
///
/// The board always pushes *all* rows, never a delta, so implementations
/// can redraw their table from scratch each time.
pub trait DisplaySink {
    fn refresh(&mut self, rows: &[TicketRow]);
}

/// Sink that discards every refresh.
#[derive(Default, Clone, Copy, Debug)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn refresh(&mut self, _rows: &[TicketRow]) {}
}
