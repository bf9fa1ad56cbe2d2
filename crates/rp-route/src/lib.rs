//! `rp-route` — waypoint building and contention analysis.
//!
//! Two pure, batch-oriented stages that run before any playback:
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`waypoint`]   | `Waypoint`, `Route`, [`build_route`]                  |
//! | [`contention`] | `ContentionKey`, `ContentionIndex` (collisions + shared map) |
//! | [`error`]      | `RouteError`, `RouteResult`                           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | [`ContentionIndex::analyze`] fans the outer scan loop out onto rayon. |

pub mod contention;
pub mod error;
pub mod waypoint;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use contention::{ContentionIndex, ContentionKey};
pub use error::{RouteError, RouteResult};
pub use waypoint::{Route, Waypoint, build_route};
