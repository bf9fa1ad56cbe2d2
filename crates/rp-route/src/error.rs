use thiserror::Error;

use rp_core::TicketId;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("ticket {0} has no location samples")]
    Empty(TicketId),
}

pub type RouteResult<T> = Result<T, RouteError>;
