//! Replay observer trait for readouts and progress reporting.

use chrono::NaiveDateTime;

use rp_core::{SimSecond, SpeedLevel, TicketId};
use rp_route::ContentionKey;

/// Callbacks invoked by [`ReplayEngine::run`][crate::ReplayEngine::run] at
/// key points in the driver loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — elapsed-time readout
///
/// ```rust,ignore
/// struct ClockReadout;
///
/// impl ReplayObserver for ClockReadout {
///     fn on_second(&mut self, now: SimSecond, wall: NaiveDateTime) {
///         println!("{now} = {}", wall.format("%H:%M:%S"));
///     }
/// }
/// ```
pub trait ReplayObserver {
    /// Called once per simulated second, before that second's work.
    /// `wall` is the calendar wall-clock time of `now`.
    fn on_second(&mut self, _now: SimSecond, _wall: NaiveDateTime) {}

    /// Called when an accepted control step changed the playback speed.
    fn on_speed_change(&mut self, _level: SpeedLevel) {}

    /// Called when a route leaves `Waiting` and starts playing.
    fn on_route_started(&mut self, _ticket: TicketId, _now: SimSecond) {}

    /// Called when a player arrives at a simultaneous-occupancy waypoint.
    fn on_collision(&mut self, _ticket: TicketId, _key: ContentionKey) {}

    /// Called after a route's dwell-and-reconcile completes.
    fn on_route_completed(&mut self, _ticket: TicketId, _now: SimSecond) {}

    /// Called when a route is abandoned on malformed data.
    fn on_route_abandoned(&mut self, _ticket: TicketId, _now: SimSecond) {}

    /// Called once when every player has finished.
    fn on_replay_end(&mut self, _final_second: SimSecond) {}
}

/// A [`ReplayObserver`] that does nothing.
pub struct NoopObserver;

impl ReplayObserver for NoopObserver {}
