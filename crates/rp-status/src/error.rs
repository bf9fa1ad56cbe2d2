use thiserror::Error;

use rp_core::TicketId;

#[derive(Debug, Error)]
pub enum StatusError {
    /// A state or duration update referenced a ticket the board never saw.
    /// Records are created exactly once at ingestion, so this is an
    /// internal-consistency failure, not a recoverable condition.
    #[error("status update for unknown ticket {0}")]
    UnknownTicket(TicketId),

    #[error("ticket {0} registered twice")]
    DuplicateTicket(TicketId),
}

pub type StatusResult<T> = Result<T, StatusError>;
