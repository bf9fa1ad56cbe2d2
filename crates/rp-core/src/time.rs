//! Simulated time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `SimSecond` counter —
//! one unit per elapsed simulated second since shop opening.  The mapping to
//! wall-clock time lives in [`ShopCalendar`][crate::ShopCalendar]; this
//! module only deals in integer seconds, so all waypoint arithmetic is exact
//! and comparisons are O(1).
//!
//! The clock is *paced*, not free-running: the engine's driver pauses one
//! real [`SpeedLevel::interval`] between increments, so a whole store day
//! can be replayed at 1×, 10×, 100×, or 1000× time dilation.

use std::fmt;
use std::time::Duration;

// ── SimSecond ─────────────────────────────────────────────────────────────────

/// An absolute simulated-second counter, starting at 0 = shop opening.
///
/// Stored as `u64`: at one increment per simulated second a u64 outlasts any
/// conceivable replay by a comfortable margin.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSecond(pub u64);

impl SimSecond {
    pub const ZERO: SimSecond = SimSecond(0);

    /// Return the second `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> SimSecond {
        SimSecond(self.0 + n)
    }

    /// Seconds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimSecond) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for SimSecond {
    type Output = SimSecond;
    #[inline]
    fn add(self, rhs: u64) -> SimSecond {
        SimSecond(self.0 + rhs)
    }
}

impl std::ops::Sub for SimSecond {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimSecond) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── SpeedLevel ────────────────────────────────────────────────────────────────

/// One of the four discrete playback speeds.
///
/// The level sets the real pause between clock increments: 1000 ms at 1×
/// down to 1 ms at 1000×.  Levels change only through [`step`][Self::step]
/// so external controls can never leave the supported range.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedLevel {
    #[default]
    X1,
    X10,
    X100,
    X1000,
}

impl SpeedLevel {
    /// Real time between two clock increments at this level.
    #[inline]
    pub const fn interval(self) -> Duration {
        Duration::from_millis(self.interval_ms())
    }

    /// Interval in whole milliseconds (1000, 100, 10, 1).
    #[inline]
    pub const fn interval_ms(self) -> u64 {
        match self {
            SpeedLevel::X1 => 1_000,
            SpeedLevel::X10 => 100,
            SpeedLevel::X100 => 10,
            SpeedLevel::X1000 => 1,
        }
    }

    /// Time-dilation factor relative to real time (1, 10, 100, 1000).
    #[inline]
    pub const fn dilation(self) -> u32 {
        match self {
            SpeedLevel::X1 => 1,
            SpeedLevel::X10 => 10,
            SpeedLevel::X100 => 100,
            SpeedLevel::X1000 => 1_000,
        }
    }

    /// 1-based level index shown by the speed readout (1..=4).
    #[inline]
    pub const fn level(self) -> u8 {
        match self {
            SpeedLevel::X1 => 1,
            SpeedLevel::X10 => 2,
            SpeedLevel::X100 => 3,
            SpeedLevel::X1000 => 4,
        }
    }

    /// Apply one control step, clamped at the outer levels.
    #[inline]
    pub const fn step(self, step: SpeedStep) -> SpeedLevel {
        match (self, step) {
            (SpeedLevel::X1, SpeedStep::Faster) => SpeedLevel::X10,
            (SpeedLevel::X10, SpeedStep::Faster) => SpeedLevel::X100,
            (SpeedLevel::X100, SpeedStep::Faster) => SpeedLevel::X1000,
            (SpeedLevel::X1000, SpeedStep::Faster) => SpeedLevel::X1000,
            (SpeedLevel::X1, SpeedStep::Slower) => SpeedLevel::X1,
            (SpeedLevel::X10, SpeedStep::Slower) => SpeedLevel::X1,
            (SpeedLevel::X100, SpeedStep::Slower) => SpeedLevel::X10,
            (SpeedLevel::X1000, SpeedStep::Slower) => SpeedLevel::X100,
        }
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.dilation())
    }
}

/// A single speed-adjustment request from the external control collaborator.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedStep {
    Faster,
    Slower,
}

// ── VirtualClock ──────────────────────────────────────────────────────────────

/// The process-wide simulated clock.
///
/// Advanced only by the engine's driver loop; read (never written) by every
/// route player.  Monotonically non-decreasing — there is no reset and no
/// backward step.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualClock {
    current: SimSecond,
    /// Current playback speed.  Adjusted between ticks by the control seam.
    pub speed: SpeedLevel,
}

impl VirtualClock {
    pub fn new(speed: SpeedLevel) -> Self {
        Self { current: SimSecond::ZERO, speed }
    }

    /// Advance the clock by one simulated second.
    #[inline]
    pub fn advance(&mut self) {
        self.current = SimSecond(self.current.0 + 1);
    }

    /// The current simulated second.
    #[inline]
    pub fn current(&self) -> SimSecond {
        self.current
    }
}

impl fmt::Display for VirtualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.current, self.speed)
    }
}

// ── ReplayConfig ──────────────────────────────────────────────────────────────

/// Top-level replay configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayConfig {
    /// Side length of one grid cell on the rendering surface, in pixels.
    pub cell_size: u32,

    /// Seed for the per-ticket color assignment.  The same seed always
    /// produces the same palette.
    pub seed: u64,

    /// Playback speed the clock starts at.
    pub speed: SpeedLevel,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 40,
            seed: 0,
            speed: SpeedLevel::X1,
        }
    }
}

impl ReplayConfig {
    /// Construct a `VirtualClock` pre-configured for this replay.
    pub fn make_clock(&self) -> VirtualClock {
        VirtualClock::new(self.speed)
    }
}
