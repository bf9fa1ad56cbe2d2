//! `rp-ingest` — dataset ingestion for the routeplay engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`record`]    | `LocationSample`, `OrderLine`, `StoreDay`               |
//! | [`directory`] | `TicketDirectory` (string id → dense `TicketId`)        |
//! | [`loader`]    | `load_samples_csv/_reader`, `load_orders_csv/_reader`   |
//! | [`error`]     | `IngestError`, `IngestResult<T>`                        |
//!
//! # Time anchoring
//!
//! The first sample row fixes the replay's wall-clock reference: its *date*
//! at 09:00 local becomes simulated second 0 (see
//! [`rp_core::ShopCalendar`]).  Every later timestamp is converted to an
//! elapsed [`rp_core::SimSecond`] against that anchor.

pub mod directory;
pub mod error;
pub mod loader;
pub mod record;


pub use directory::TicketDirectory;
pub use error::{IngestError, IngestResult};
pub use loader::{load_orders_csv, load_orders_reader, load_samples_csv, load_samples_reader};
pub use record::{LocationSample, OrderLine, StoreDay};
