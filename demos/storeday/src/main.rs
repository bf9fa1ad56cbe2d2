//! storeday — end-to-end demo of the routeplay replay engine.
//!
//! Replays an embedded morning of four customers over a 40 px grid: three
//! with recorded routes (two of which collide in the same aisle cell) and
//! one known only from the order table.  Runs with an [`InstantPacer`] so
//! the whole day finishes instantly; swap in `SleepPacer` and a real
//! surface for an animated replay.

use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;

use rp_core::{ReplayConfig, SimSecond, TicketId};
use rp_engine::{EngineBuilder, InstantPacer, NullSurface, ReplayObserver};
use rp_ingest::{TicketDirectory, load_orders_reader, load_samples_reader};
use rp_route::ContentionKey;
use rp_status::NullSink;

// ── Embedded dataset ──────────────────────────────────────────────────────────

// Positions sampled once per second.  T1 and T2 meet in cell (4,3) at
// 09:00:07; T3's recording has a one-second gap and is abandoned mid-route.
const SAMPLES_CSV: &str = "\
customer_id;ticket_id;x;y;picking;x_y_date_time
C1;T1;2;3;0;2024-03-04 09:00:05
C1;T1;3;3;1;2024-03-04 09:00:06
C1;T1;4;3;0;2024-03-04 09:00:07
C1;T1;5;3;0;2024-03-04 09:00:08
C2;T2;4;1;0;2024-03-04 09:00:05
C2;T2;4;2;0;2024-03-04 09:00:06
C2;T2;4;3;0;2024-03-04 09:00:07
C2;T2;4;4;1;2024-03-04 09:00:08
C3;T3;8;8;0;2024-03-04 09:00:10
C3;T3;8;9;0;2024-03-04 09:00:11
C3;T3;8;11;0;2024-03-04 09:00:13
";

const ORDERS_CSV: &str = "\
ticket_id;customer_id;enter_date_time;quantity
T1;C1;2024-03-04 09:00:05;2
T1;C1;2024-03-04 09:00:05;1
T2;C2;2024-03-04 09:00:05;4
T3;C3;2024-03-04 09:00:10;1
T4;C4;2024-03-04 09:30:00;6
";

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct EventLog {
    collisions: usize,
    completed:  usize,
    abandoned:  usize,
}

impl ReplayObserver for EventLog {
    fn on_route_started(&mut self, ticket: TicketId, now: SimSecond) {
        println!("  {now}: {ticket} started");
    }

    fn on_collision(&mut self, ticket: TicketId, key: ContentionKey) {
        self.collisions += 1;
        println!("  {}: {ticket} collision in cell {}", key.second, key.cell);
    }

    fn on_route_completed(&mut self, ticket: TicketId, now: SimSecond) {
        self.completed += 1;
        println!("  {now}: {ticket} completed");
    }

    fn on_route_abandoned(&mut self, ticket: TicketId, now: SimSecond) {
        self.abandoned += 1;
        println!("  {now}: {ticket} abandoned (gap in recording)");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== storeday — routeplay replay demo ===");
    println!();

    // 1. Ingest the embedded dataset.
    let mut directory = TicketDirectory::new();
    let orders = load_orders_reader(Cursor::new(ORDERS_CSV), &mut directory)?;
    let day = load_samples_reader(Cursor::new(SAMPLES_CSV), &mut directory)?;
    println!(
        "Ingested {} tickets, {} samples, opening {}",
        directory.len(),
        day.sample_count(),
        day.calendar.format_wall(SimSecond::ZERO),
    );

    // 2. Build the engine.  NullSurface: this demo only watches events and
    //    the status table.
    let mut engine = EngineBuilder::new(day, directory, NullSurface, NullSink)
        .orders(orders)
        .config(ReplayConfig::default())
        .pacer(InstantPacer)
        .build()?;

    // 3. Replay the day.
    println!();
    println!("Replaying:");
    let t0 = Instant::now();
    let mut log = EventLog::default();
    engine.run(&mut log)?;
    let elapsed = t0.elapsed();

    // 4. Summary.
    println!();
    println!(
        "Replay complete in {:.3} ms: {} completed, {} abandoned, {} collision events",
        elapsed.as_secs_f64() * 1e3,
        log.completed,
        log.abandoned,
        log.collisions,
    );
    println!();

    // 5. Final status table.
    println!(
        "{:<8} {:<10} {:<11} {:<20} {:<20} {:<12} {:>5}",
        "Ticket", "Customer", "State", "Start", "Finish", "Duration", "Items"
    );
    println!("{}", "-".repeat(92));
    for row in engine.rows() {
        println!(
            "{:<8} {:<10} {:<11} {:<20} {:<20} {:<12} {:>5}",
            row.label,
            row.customer,
            row.state.to_string(),
            row.start,
            row.finish,
            row.duration,
            row.items,
        );
    }

    Ok(())
}
