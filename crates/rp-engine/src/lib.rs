//! `rp-engine` — the replay driver.
//!
//! Ties the other `rp-*` crates together: one [`RoutePlayer`] per playable
//! ticket, a [`WakeQueue`] scheduling players by simulated second, and the
//! [`ReplayEngine`] driver loop pacing the virtual clock against real time.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`surface`]  | `RenderSurface` trait, `NullSurface`                  |
//! | [`pacer`]    | `TickPacer` trait, `SleepPacer`, `InstantPacer`       |
//! | [`control`]  | `ControlSource` trait, `NoControl`, `ScriptedControl` |
//! | [`wake`]     | `WakeQueue`                                           |
//! | [`player`]   | `RoutePlayer` per-ticket state machine                |
//! | [`engine`]   | `ReplayEngine` driver loop                            |
//! | [`builder`]  | `EngineBuilder`                                       |
//! | [`observer`] | `ReplayObserver`, `NoopObserver`                      |
//! | [`error`]    | `EngineError`, `EngineResult`                         |
//!
//! # Example
//!
//! ```rust,ignore
//! let mut directory = TicketDirectory::new();
//! let orders = load_orders_csv(orders_path, &mut directory)?;
//! let day = load_samples_csv(samples_path, &mut directory)?;
//!
//! let mut engine = EngineBuilder::new(day, directory, surface, sink)
//!     .orders(orders)
//!     .config(ReplayConfig::default())
//!     .build()?;
//! engine.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod control;
pub mod engine;
pub mod error;
pub mod observer;
pub mod pacer;
pub mod player;
pub mod surface;
pub mod wake;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::EngineBuilder;
pub use control::{ControlSource, NoControl, ScriptedControl};
pub use engine::ReplayEngine;
pub use error::{EngineError, EngineResult};
pub use observer::{NoopObserver, ReplayObserver};
pub use pacer::{InstantPacer, SleepPacer, TickPacer};
pub use player::{RoutePlayer, StepOutcome, WakeReport};
pub use surface::{NullSurface, RenderSurface};
pub use wake::WakeQueue;
