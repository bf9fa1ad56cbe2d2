//! `rp-core` — foundational types for the `routeplay` replay engine.
//!
//! This crate is a dependency of every other `rp-*` crate.  It intentionally
//! has no `rp-*` dependencies and minimal external ones (only `rand`,
//! `chrono`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `TicketId`                                               |
//! | [`grid`]     | `GridCell`, `PixelPoint`, cell→pixel mapping             |
//! | [`time`]     | `SimSecond`, `VirtualClock`, `SpeedLevel`, `ReplayConfig`|
//! | [`calendar`] | `ShopCalendar` (wall-clock mapping, duration formatting) |
//! | [`color`]    | `DisplayColor`, `ColorAssignment`                        |
//! | [`error`]    | `RpError`, `RpResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.           |

pub mod calendar;
pub mod color;
pub mod error;
pub mod grid;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use calendar::{ShopCalendar, format_duration};
pub use color::{ColorAssignment, DisplayColor};
pub use error::{RpError, RpResult};
pub use grid::{GridCell, PixelPoint};
pub use ids::TicketId;
pub use time::{ReplayConfig, SimSecond, SpeedLevel, SpeedStep, VirtualClock};
