//! Semicolon-CSV dataset loaders.
//!
//! # Sample file format
//!
//! One row per recorded customer position:
//!
//! ```csv
//! customer_id;ticket_id;x;y;picking;x_y_date_time
//! C1;T1;2;3;0;2024-01-01 09:00:05
//! C1;T1;2;4;1;2024-01-01 09:00:06
//! ```
//!
//! The first row anchors the shop-opening reference (its date at 09:00).
//! Rows with an empty `ticket_id` are skipped; a timestamp before opening is
//! a parse error.
//!
//! # Order file format
//!
//! One row per product line; the loader aggregates `quantity` per ticket:
//!
//! ```csv
//! ticket_id;customer_id;enter_date_time;quantity
//! T1;C1;2024-01-01 09:00:05;2
//! T1;C1;2024-01-01 09:00:05;1
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rp_core::{GridCell, ShopCalendar, TicketId, calendar};

use crate::record::{LocationSample, OrderLine, StoreDay};
use crate::{IngestError, IngestResult, TicketDirectory};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawSampleRecord {
    customer_id: String,
    ticket_id: String,
    x: u32,
    y: u32,
    picking: u8,
    x_y_date_time: String,
}

#[derive(Deserialize)]
struct RawOrderRecord {
    ticket_id: String,
    customer_id: String,
    enter_date_time: String,
    quantity: u32,
}

// ── Public API — samples ──────────────────────────────────────────────────────

/// Load one day of location samples from a semicolon-CSV file.
///
/// New tickets are interned into `directory`; samples are grouped per ticket
/// in file arrival order (the tie-break order the waypoint builder relies
/// on).  An empty file yields [`StoreDay::empty`].
pub fn load_samples_csv(path: &Path, directory: &mut TicketDirectory) -> IngestResult<StoreDay> {
    let file = std::fs::File::open(path).map_err(IngestError::Io)?;
    load_samples_reader(file, directory)
}

/// Like [`load_samples_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded datasets.
pub fn load_samples_reader<R: Read>(
    reader: R,
    directory: &mut TicketDirectory,
) -> IngestResult<StoreDay> {
    let mut csv_reader = csv::ReaderBuilder::new().delimiter(b';').from_reader(reader);

    let mut rows: Vec<RawSampleRecord> = Vec::new();
    for result in csv_reader.deserialize::<RawSampleRecord>() {
        rows.push(result?);
    }

    let Some(first) = rows.first() else {
        return Ok(StoreDay::empty());
    };

    let calendar = ShopCalendar::from_first_timestamp(&first.x_y_date_time)
        .map_err(|e| IngestError::Parse(e.to_string()))?;

    let mut samples: Vec<Vec<LocationSample>> = vec![Vec::new(); directory.len()];
    for row in &rows {
        // The source data occasionally carries ticket-less rows; they belong
        // to no route and are dropped.
        if row.ticket_id.trim().is_empty() {
            continue;
        }

        let ticket = directory.intern(row.ticket_id.trim(), row.customer_id.trim());
        if ticket.index() >= samples.len() {
            samples.resize_with(ticket.index() + 1, Vec::new);
        }

        let second = calendar
            .sim_second_of(&row.x_y_date_time)
            .map_err(|e| IngestError::Parse(e.to_string()))?;

        samples[ticket.index()].push(LocationSample {
            ticket,
            cell: GridCell::new(row.x, row.y),
            second,
            picking: row.picking != 0,
        });
    }

    Ok(StoreDay { calendar, samples })
}

// ── Public API — orders ───────────────────────────────────────────────────────

/// Load order metadata from a semicolon-CSV file.
pub fn load_orders_csv(path: &Path, directory: &mut TicketDirectory) -> IngestResult<Vec<OrderLine>> {
    let file = std::fs::File::open(path).map_err(IngestError::Io)?;
    load_orders_reader(file, directory)
}

/// Like [`load_orders_csv`] but accepts any `Read` source.
///
/// Product-line rows of the same ticket are aggregated: quantities are
/// summed, the first row's entry timestamp and customer label win.  The
/// result is sorted by `TicketId`.
pub fn load_orders_reader<R: Read>(
    reader: R,
    directory: &mut TicketDirectory,
) -> IngestResult<Vec<OrderLine>> {
    let mut csv_reader = csv::ReaderBuilder::new().delimiter(b';').from_reader(reader);

    let mut lines: Vec<OrderLine> = Vec::new();
    let mut slot_of: std::collections::HashMap<TicketId, usize> = std::collections::HashMap::new();

    for result in csv_reader.deserialize::<RawOrderRecord>() {
        let row = result?;
        if row.ticket_id.trim().is_empty() {
            continue;
        }

        let ticket = directory.intern(row.ticket_id.trim(), row.customer_id.trim());
        match slot_of.get(&ticket) {
            Some(&slot) => lines[slot].quantity += row.quantity,
            None => {
                let entered_at = calendar::parse_timestamp(&row.enter_date_time)
                    .map_err(|e| IngestError::Parse(e.to_string()))?;
                slot_of.insert(ticket, lines.len());
                lines.push(OrderLine {
                    ticket,
                    entered_at,
                    quantity: row.quantity,
                });
            }
        }
    }

    lines.sort_unstable_by_key(|l| l.ticket);
    Ok(lines)
}
