//! The playback-speed control seam.
//!
//! An external collaborator (UI buttons, a script, a test) requests speed
//! changes one [`SpeedStep`] at a time.  The engine polls once per simulated
//! second, after that second's work; an accepted step takes effect on the
//! next tick.  Steps beyond the outer levels are clamped by
//! [`SpeedLevel::step`][rp_core::SpeedLevel::step].

use std::collections::BTreeMap;

use rp_core::{SimSecond, SpeedStep};

/// Source of speed-adjustment requests.
pub trait ControlSource {
    /// At most one step per simulated second.
    fn poll(&mut self, now: SimSecond) -> Option<SpeedStep>;
}

/// Control source that never requests a change.
#[derive(Default, Clone, Copy, Debug)]
pub struct NoControl;

impl ControlSource for NoControl {
    fn poll(&mut self, _now: SimSecond) -> Option<SpeedStep> {
        None
    }
}

/// Pre-scripted speed changes keyed by simulated second.
///
/// Used by tests and batch replays to exercise the control path without an
/// interactive collaborator.
#[derive(Default, Clone, Debug)]
pub struct ScriptedControl {
    steps: BTreeMap<SimSecond, SpeedStep>,
}

impl ScriptedControl {
    pub fn new(steps: impl IntoIterator<Item = (SimSecond, SpeedStep)>) -> Self {
        Self { steps: steps.into_iter().collect() }
    }
}

impl ControlSource for ScriptedControl {
    fn poll(&mut self, now: SimSecond) -> Option<SpeedStep> {
        self.steps.remove(&now)
    }
}
