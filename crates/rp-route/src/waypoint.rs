//! Waypoint building.
//!
//! Turns one ticket's raw [`LocationSample`]s into an ordered, pixel-mapped
//! [`Route`].  Building is pure: same samples in, same route out, one
//! waypoint per sample.
//!
//! Ordering is a *stable* sort by `second` ascending, so samples recorded at
//! the same second keep their file arrival order.  The builder does not
//! enforce second-contiguity; a gap surfaces during playback, where the
//! route is abandoned at the offending waypoint.

use rp_core::{GridCell, PixelPoint, SimSecond, TicketId};
use rp_ingest::LocationSample;

use crate::{RouteError, RouteResult};

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// One playable step of a route.
///
/// A playable route satisfies `second - first_second == seq` for every
/// waypoint; the player checks this before drawing each step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Waypoint {
    pub ticket:  TicketId,
    pub cell:    GridCell,
    /// Top-left pixel of `cell` on the rendering surface.
    pub pixel:   PixelPoint,
    /// Absolute simulated second this waypoint is due.
    pub second:  SimSecond,
    /// 0-based position within the route.
    pub seq:     u32,
    pub picking: bool,
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The ordered waypoints of one ticket.
#[derive(Clone, Debug)]
pub struct Route {
    ticket:    TicketId,
    waypoints: Vec<Waypoint>,
}

impl Route {
    pub fn ticket(&self) -> TicketId {
        self.ticket
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction rejects empty sample lists, so this is always false;
        // kept for API completeness.
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn get(&self, seq: usize) -> Option<&Waypoint> {
        self.waypoints.get(seq)
    }

    /// Second the route starts at.
    pub fn first_second(&self) -> SimSecond {
        self.waypoints[0].second
    }

    /// Second of the final waypoint.
    pub fn last_second(&self) -> SimSecond {
        self.waypoints[self.waypoints.len() - 1].second
    }

    /// Recorded route duration in whole seconds.
    pub fn duration_secs(&self) -> u64 {
        self.last_second() - self.first_second()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Build the route for one ticket from its location samples.
///
/// Errors only on an empty sample list.
pub fn build_route(
    ticket: TicketId,
    samples: &[LocationSample],
    cell_size: u32,
) -> RouteResult<Route> {
    if samples.is_empty() {
        return Err(RouteError::Empty(ticket));
    }

    let mut ordered: Vec<&LocationSample> = samples.iter().collect();
    ordered.sort_by_key(|s| s.second);

    let waypoints = ordered
        .iter()
        .enumerate()
        .map(|(seq, s)| Waypoint {
            ticket,
            cell:    s.cell,
            pixel:   s.cell.to_pixel(cell_size),
            second:  s.second,
            seq:     seq as u32,
            picking: s.picking,
        })
        .collect();

    Ok(Route { ticket, waypoints })
}
