//! `RoutePlayer` — the per-ticket playback state machine.
//!
//! One player owns one [`Route`] and walks it strictly in sequence order,
//! woken by the driver exactly at each waypoint's second.  Drawing follows
//! the recorded tool's draw-then-wait shape, split across two moments:
//!
//! - **pre-draw(w)** happens as soon as the *previous* waypoint is reached
//!   (or at route start for the first waypoint).  Normal waypoints validate
//!   the contiguity invariant, move the pick highlight, and draw the
//!   customer marker; collision waypoints only pre-fill the cell color.
//! - **arrive(w)** happens when the clock reaches `w.second`.  Normal
//!   waypoints fill the cell; collision waypoints draw the collision icon
//!   over the pre-filled color.
//!
//! A contiguity violation (`second - first != seq`) abandons the route at
//! the offending waypoint: every footprint cell is cleared, the remaining
//! waypoints are discarded, and the player is done.  No error is raised —
//! malformed recordings are a data condition, not a bug.

use rp_core::{DisplayColor, PixelPoint, SimSecond, TicketId};
use rp_route::{ContentionIndex, ContentionKey, Route};

use crate::RenderSurface;

// ── Outcome ───────────────────────────────────────────────────────────────────

/// What the driver must do after one player wake.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// More waypoints remain; re-queue the player at `next_wake`.
    Continue { next_wake: SimSecond },
    /// Final waypoint reached; the driver dwells, then reconciles.
    Finished,
    /// Route abandoned on a contiguity violation; cells already cleared.
    Abandoned,
}

/// One wake's result: the scheduling outcome plus the collision key hit at
/// the arrival waypoint, if any.
#[derive(Copy, Clone, Debug)]
pub struct WakeReport {
    pub outcome:   StepOutcome,
    pub collision: Option<ContentionKey>,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Phase {
    /// Start second not reached yet.
    Waiting,
    /// Playing; `next` is the waypoint due at the next wake.
    InRoute { next: usize },
    /// Finished or abandoned.
    Done,
}

/// Plays one ticket's route against a [`RenderSurface`].
pub struct RoutePlayer {
    route: Route,
    color: DisplayColor,
    phase: Phase,
    /// Cell of a pick highlight not yet cleared.
    pending_pick: Option<PixelPoint>,
}

impl RoutePlayer {
    pub fn new(route: Route, color: DisplayColor) -> Self {
        Self {
            route,
            color,
            phase: Phase::Waiting,
            pending_pick: None,
        }
    }

    pub fn ticket(&self) -> TicketId {
        self.route.ticket()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Second of the first waypoint — when the driver must first wake us.
    pub fn start_second(&self) -> SimSecond {
        self.route.first_second()
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Has the player left `Waiting` yet?
    pub fn is_waiting(&self) -> bool {
        self.phase == Phase::Waiting
    }

    /// Run one wake at simulated second `now`.
    ///
    /// Must be called exactly at the due waypoint's second; the driver's
    /// wake queue guarantees this.
    pub fn wake<S: RenderSurface>(
        &mut self,
        now: SimSecond,
        contention: &ContentionIndex,
        surface: &mut S,
        cell_size: u32,
    ) -> WakeReport {
        let next = match self.phase {
            Phase::Waiting => {
                self.start(contention, surface, cell_size);
                0
            }
            Phase::InRoute { next } => next,
            Phase::Done => {
                return WakeReport {
                    outcome:   StepOutcome::Finished,
                    collision: None,
                };
            }
        };

        // ── Arrive at the due waypoint ────────────────────────────────────
        let w = self.route.waypoints()[next];
        debug_assert_eq!(w.second, now);

        let key = ContentionKey::new(w.cell, w.second);
        let collision = if contention.is_collision(key) {
            surface.paint_collision(w.pixel, cell_size);
            Some(key)
        } else {
            surface.paint_cell(w.pixel, cell_size, self.color);
            None
        };

        // ── Pre-draw the following waypoint, or finish ────────────────────
        let outcome = if next + 1 < self.route.len() {
            if self.pre_draw(next + 1, contention, surface, cell_size) {
                self.phase = Phase::InRoute { next: next + 1 };
                StepOutcome::Continue {
                    next_wake: self.route.waypoints()[next + 1].second,
                }
            } else {
                self.abandon(surface, cell_size);
                StepOutcome::Abandoned
            }
        } else {
            self.phase = Phase::Done;
            StepOutcome::Finished
        };

        WakeReport { outcome, collision }
    }

    /// Clear every footprint cell.  Called by the driver's reconciliation
    /// after the dwell, and internally on abandonment.
    pub fn clear_footprint<S: RenderSurface>(&mut self, surface: &mut S, cell_size: u32) {
        if let Some(pixel) = self.pending_pick.take() {
            surface.clear_pick(pixel, cell_size);
        }
        for w in self.route.waypoints() {
            surface.clear_cell(w.pixel, cell_size);
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Leave `Waiting`: paint the whole footprint as ghost cells, then
    /// pre-draw the first waypoint.
    fn start<S: RenderSurface>(
        &mut self,
        contention: &ContentionIndex,
        surface: &mut S,
        cell_size: u32,
    ) {
        for w in self.route.waypoints() {
            surface.paint_ghost(w.pixel, cell_size, self.color);
        }
        // The first waypoint trivially satisfies contiguity (seq 0 at the
        // first second), so this pre-draw cannot abandon.
        self.pre_draw(0, contention, surface, cell_size);
        self.phase = Phase::InRoute { next: 0 };
    }

    /// Draw waypoint `i`'s ahead-of-arrival parts.  Returns `false` when
    /// the contiguity invariant fails and the route must be abandoned.
    fn pre_draw<S: RenderSurface>(
        &mut self,
        i: usize,
        contention: &ContentionIndex,
        surface: &mut S,
        cell_size: u32,
    ) -> bool {
        let w = self.route.waypoints()[i];

        // Collision waypoints pre-fill the color; the icon lands at the
        // arrival second.  No contiguity or pick handling on this path.
        if contention.is_collision(ContentionKey::new(w.cell, w.second)) {
            surface.paint_cell(w.pixel, cell_size, self.color);
            return true;
        }

        if w.second - self.route.first_second() != u64::from(w.seq) {
            return false;
        }

        if let Some(pixel) = self.pending_pick.take() {
            surface.clear_pick(pixel, cell_size);
        }
        if w.picking {
            surface.paint_pick(w.pixel, cell_size);
            self.pending_pick = Some(w.pixel);
        }
        surface.paint_marker(w.pixel, cell_size, self.ticket());
        true
    }

    fn abandon<S: RenderSurface>(&mut self, surface: &mut S, cell_size: u32) {
        self.clear_footprint(surface, cell_size);
        self.phase = Phase::Done;
    }
}
