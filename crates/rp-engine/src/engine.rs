//! The `ReplayEngine` struct and its driver loop.

use rp_core::{ColorAssignment, ReplayConfig, ShopCalendar, SimSecond, TicketId, VirtualClock};
use rp_route::ContentionIndex;
use rp_status::{DisplaySink, StatusBoard, TicketRow, TicketState};

use crate::player::StepOutcome;
use crate::{
    ControlSource, EngineResult, RenderSurface, ReplayObserver, RoutePlayer, TickPacer, WakeQueue,
};

/// The replay driver.
///
/// Holds all playback state and runs the per-second loop:
///
/// 1. **Wake**: drain the players whose next waypoint is due this second
///    and step each one (arrive, then pre-draw the following waypoint).
/// 2. **Settle**: a finishing player dwells half a speed interval, clears
///    its footprint, retires from the shared-location map, and the
///    surviving occupants are repainted.
/// 3. **Control**: poll for a speed step; an accepted change takes effect
///    on the next tick.
/// 4. **Pace**: pause one real speed interval, then advance the clock.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct ReplayEngine<S, D, P, C>
where
    S: RenderSurface,
    D: DisplaySink,
    P: TickPacer,
    C: ControlSource,
{
    /// The simulated clock.  Advanced only here.
    pub clock: VirtualClock,

    pub(crate) config:     ReplayConfig,
    pub(crate) calendar:   ShopCalendar,
    /// One player per playable ticket, indexed by `TicketId`.  Entries are
    /// taken out as their route finishes.
    pub(crate) players:    Vec<Option<RoutePlayer>>,
    pub(crate) contention: ContentionIndex,
    pub(crate) colors:     ColorAssignment,
    pub(crate) wake_queue: WakeQueue,
    pub(crate) board:      StatusBoard<D>,
    pub(crate) surface:    S,
    pub(crate) pacer:      P,
    pub(crate) control:    C,
    /// Players not yet finished or abandoned.
    pub(crate) active:     usize,
}

impl<S, D, P, C> ReplayEngine<S, D, P, C>
where
    S: RenderSurface,
    D: DisplaySink,
    P: TickPacer,
    C: ControlSource,
{
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every player has finished.
    ///
    /// Returns immediately on a dataset with no playable routes.
    pub fn run<O: ReplayObserver>(&mut self, observer: &mut O) -> EngineResult<()> {
        while self.active > 0 && !self.wake_queue.is_empty() {
            self.step(observer)?;
        }
        observer.on_replay_end(self.clock.current());
        Ok(())
    }

    /// Run exactly `n` simulated seconds from the current position.
    ///
    /// Useful for tests and incremental stepping; does not fire
    /// `on_replay_end`.
    pub fn run_seconds<O: ReplayObserver>(&mut self, n: u64, observer: &mut O) -> EngineResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// The current simulated second.
    pub fn current_second(&self) -> SimSecond {
        self.clock.current()
    }

    /// Players still waiting or in route.
    pub fn active_players(&self) -> usize {
        self.active
    }

    pub fn calendar(&self) -> &ShopCalendar {
        &self.calendar
    }

    /// Current status-table rows, ascending ticket id.
    pub fn rows(&self) -> Vec<TicketRow> {
        self.board.rows()
    }

    /// Consume the engine, returning its render surface and display sink.
    pub fn into_parts(self) -> (S, D) {
        (self.surface, self.board.into_sink())
    }

    // ── Core second processing ────────────────────────────────────────────

    /// One full tick: process the current second, poll control, pace,
    /// advance.
    fn step<O: ReplayObserver>(&mut self, observer: &mut O) -> EngineResult<()> {
        let now = self.clock.current();
        observer.on_second(now, self.calendar.wall_time(now));

        self.process_second(now, observer)?;

        if let Some(step) = self.control.poll(now) {
            let stepped = self.clock.speed.step(step);
            if stepped != self.clock.speed {
                self.clock.speed = stepped;
                observer.on_speed_change(stepped);
            }
        }

        self.pacer.pause(self.clock.speed.interval());
        self.clock.advance();
        Ok(())
    }

    fn process_second<O: ReplayObserver>(
        &mut self,
        now: SimSecond,
        observer: &mut O,
    ) -> EngineResult<()> {
        let Some(due) = self.wake_queue.drain_second(now) else {
            return Ok(());
        };

        for ticket in due {
            let starting = self.players[ticket.index()]
                .as_ref()
                .is_some_and(RoutePlayer::is_waiting);
            if starting {
                self.board.set_state(ticket, TicketState::InRoute)?;
                observer.on_route_started(ticket, now);
            }

            loop {
                let report = {
                    let Some(player) = self.players[ticket.index()].as_mut() else {
                        break;
                    };
                    player.wake(now, &self.contention, &mut self.surface, self.config.cell_size)
                };

                if let Some(key) = report.collision {
                    observer.on_collision(ticket, key);
                }

                match report.outcome {
                    StepOutcome::Continue { next_wake } if next_wake > now => {
                        self.wake_queue.push(next_wake, ticket);
                        break;
                    }
                    // A duplicate-timestamp waypoint is already due.  The
                    // current second's drain has run, so a wake queued for
                    // it would never fire; process the waypoint in the same
                    // drain instead.
                    StepOutcome::Continue { .. } => {}
                    StepOutcome::Finished => {
                        self.finish_route(ticket, now, observer)?;
                        break;
                    }
                    StepOutcome::Abandoned => {
                        // Footprint cells are already cleared; only
                        // bookkeeping remains.  No reconciliation repaint on
                        // this path.
                        self.players[ticket.index()] = None;
                        self.contention.retire(ticket);
                        self.board.set_state(ticket, TicketState::Completed)?;
                        self.active -= 1;
                        observer.on_route_abandoned(ticket, now);
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Dwell, clear, retire, and repaint after a route's final waypoint.
    fn finish_route<O: ReplayObserver>(
        &mut self,
        ticket: TicketId,
        now: SimSecond,
        observer: &mut O,
    ) -> EngineResult<()> {
        let Some(mut player) = self.players[ticket.index()].take() else {
            return Ok(());
        };

        // Let the final position linger before it disappears.
        self.pacer.pause(self.clock.speed.interval() / 2);

        let last_second = player.route().last_second();
        player.clear_footprint(&mut self.surface, self.config.cell_size);
        self.contention.retire(ticket);

        // Clearing the footprint may have wiped cells other routes already
        // painted.  Repaint every surviving occupant whose second precedes
        // the finished route's end, in ascending key-then-ticket order, and
        // restore collision icons on top.
        let size = self.config.cell_size;
        for (key, tickets) in self.contention.entries_sorted() {
            if key.second >= last_second {
                continue;
            }
            let pixel = key.cell.to_pixel(size);
            for &t in tickets {
                self.surface.paint_cell(pixel, size, self.colors.color_of(t));
            }
            if self.contention.is_collision(key) {
                self.surface.paint_collision(pixel, size);
            }
        }

        self.board.set_state(ticket, TicketState::Completed)?;
        self.active -= 1;
        observer.on_route_completed(ticket, now);
        Ok(())
    }
}
