//! `rp-status` — per-ticket lifecycle tracking.
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`state`]   | `TicketState` lifecycle enum                        |
//! | [`sink`]    | `DisplaySink` trait, `NullSink`                     |
//! | [`tracker`] | `TicketRow` read model, `StatusBoard`               |
//! | [`error`]   | `StatusError`, `StatusResult`                       |

pub mod error;
pub mod sink;
pub mod state;
pub mod tracker;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{StatusError, StatusResult};
pub use sink::{DisplaySink, NullSink};
pub use state::TicketState;
pub use tracker::{StatusBoard, TicketRow};
