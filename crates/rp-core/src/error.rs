//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `RpError` via `From` impls, or keep them separate and wrap `RpError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::TicketId;

/// The top-level error type for `rp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RpError {
    #[error("ticket {0} not found")]
    TicketNotFound(TicketId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `rp-*` crates.
pub type RpResult<T> = Result<T, RpError>;
