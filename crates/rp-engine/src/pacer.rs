//! The real-time suspension seam.
//!
//! Every pause in the driver loop — the per-second tick interval and the
//! post-finish dwell — goes through a [`TickPacer`].  Swapping the pacer is
//! how tests and batch replays run a whole store day without sleeping.

use std::time::Duration;

/// Suspends the driver loop for one real-time interval.
pub trait TickPacer {
    fn pause(&mut self, interval: Duration);
}

/// Real-time pacing via `std::thread::sleep`.
#[derive(Default, Clone, Copy, Debug)]
pub struct SleepPacer;

impl TickPacer for SleepPacer {
    fn pause(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Pacer that returns immediately.  Replays run as fast as the CPU allows.
#[derive(Default, Clone, Copy, Debug)]
pub struct InstantPacer;

impl TickPacer for InstantPacer {
    fn pause(&mut self, _interval: Duration) {}
}
