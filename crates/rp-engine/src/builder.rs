//! Fluent builder for constructing a [`ReplayEngine`].

use rp_core::{ColorAssignment, ReplayConfig, SimSecond};
use rp_ingest::{OrderLine, StoreDay, TicketDirectory};
use rp_route::{ContentionIndex, build_route};
use rp_status::{DisplaySink, StatusBoard, TicketState};

use crate::{
    ControlSource, EngineResult, NoControl, RenderSurface, ReplayEngine, RoutePlayer, SleepPacer,
    TickPacer, WakeQueue,
};

/// Fluent builder for [`ReplayEngine`].
///
/// # Required inputs
///
/// - a [`StoreDay`] and its [`TicketDirectory`] from `rp-ingest`
/// - `S: RenderSurface` — the drawing collaborator
/// - `D: DisplaySink` — the status-table collaborator
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                        |
/// |---------------|--------------------------------|
/// | `.orders(v)`  | No order metadata (0 items)    |
/// | `.config(c)`  | `ReplayConfig::default()`      |
/// | `.pacer(p)`   | [`SleepPacer`] (real-time)     |
/// | `.control(c)` | [`NoControl`]                  |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(day, directory, surface, sink)
///     .orders(orders)
///     .pacer(InstantPacer)
///     .build()?;
/// engine.run(&mut NoopObserver)?;
/// ```
pub struct EngineBuilder<S, D, P = SleepPacer, C = NoControl> {
    day:       StoreDay,
    directory: TicketDirectory,
    orders:    Vec<OrderLine>,
    config:    ReplayConfig,
    surface:   S,
    sink:      D,
    pacer:     P,
    control:   C,
}

impl<S: RenderSurface, D: DisplaySink> EngineBuilder<S, D> {
    /// Create a builder with all required inputs.
    pub fn new(day: StoreDay, directory: TicketDirectory, surface: S, sink: D) -> Self {
        Self {
            day,
            directory,
            orders: Vec::new(),
            config: ReplayConfig::default(),
            surface,
            sink,
            pacer: SleepPacer,
            control: NoControl,
        }
    }
}

impl<S, D, P, C> EngineBuilder<S, D, P, C>
where
    S: RenderSurface,
    D: DisplaySink,
    P: TickPacer,
    C: ControlSource,
{
    /// Supply order metadata (entry timestamps, item counts).
    ///
    /// Tickets absent from the order table get a zero item count and anchor
    /// their start at their first sample's wall time.
    pub fn orders(mut self, orders: Vec<OrderLine>) -> Self {
        self.orders = orders;
        self
    }

    pub fn config(mut self, config: ReplayConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the real-time pacer (e.g. with
    /// [`InstantPacer`][crate::InstantPacer] for batch replays).
    pub fn pacer<P2: TickPacer>(self, pacer: P2) -> EngineBuilder<S, D, P2, C> {
        EngineBuilder {
            day:       self.day,
            directory: self.directory,
            orders:    self.orders,
            config:    self.config,
            surface:   self.surface,
            sink:      self.sink,
            pacer,
            control:   self.control,
        }
    }

    /// Attach a speed-control source.
    pub fn control<C2: ControlSource>(self, control: C2) -> EngineBuilder<S, D, P, C2> {
        EngineBuilder {
            day:       self.day,
            directory: self.directory,
            orders:    self.orders,
            config:    self.config,
            surface:   self.surface,
            sink:      self.sink,
            pacer:     self.pacer,
            control,
        }
    }

    /// Analyze contention, build routes and players, seed the status board,
    /// and return a ready-to-run engine.
    pub fn build(self) -> EngineResult<ReplayEngine<S, D, P, C>> {
        let ticket_count = self.directory.len();

        // Contention analysis runs to completion before any playback.
        let contention = ContentionIndex::analyze(&self.day.flattened());
        let colors = ColorAssignment::generate(ticket_count, self.config.seed);

        let mut order_of: Vec<Option<&OrderLine>> = vec![None; ticket_count];
        for line in &self.orders {
            if line.ticket.index() < ticket_count {
                order_of[line.ticket.index()] = Some(line);
            }
        }

        let mut board = StatusBoard::new(self.sink);
        let mut players: Vec<Option<RoutePlayer>> = Vec::with_capacity(ticket_count);
        let mut wake_queue = WakeQueue::new();
        let mut active = 0;

        for (ticket, entry) in self.directory.iter() {
            let samples = self.day.samples_of(ticket);

            let (started_at, items) = match order_of[ticket.index()] {
                Some(line) => (line.entered_at, line.quantity),
                None => {
                    // Sample-only ticket: anchor the start at its first
                    // recorded position.
                    let first = samples.first().map(|s| s.second).unwrap_or(SimSecond::ZERO);
                    (self.day.calendar.wall_time(first), 0)
                }
            };
            board.register(ticket, &entry.label, &entry.customer, started_at, items)?;

            if samples.is_empty() {
                // Known from the order table only; stays Pending.
                players.push(None);
                continue;
            }

            let route = build_route(ticket, samples, self.config.cell_size)?;
            board.set_state(ticket, TicketState::Waiting)?;
            // The recorded duration is known before playback starts.
            board.set_duration(ticket, route.duration_secs())?;

            wake_queue.push(route.first_second(), ticket);
            players.push(Some(RoutePlayer::new(route, colors.color_of(ticket))));
            active += 1;
        }

        debug_assert_eq!(players.len(), ticket_count);

        Ok(ReplayEngine {
            clock: self.config.make_clock(),
            calendar: self.day.calendar,
            config: self.config,
            players,
            contention,
            colors,
            wake_queue,
            board,
            surface: self.surface,
            pacer: self.pacer,
            control: self.control,
            active,
        })
    }
}
