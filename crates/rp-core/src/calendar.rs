//! The shop-opening wall-clock reference.
//!
//! Recorded timestamps are absolute (`"2024-01-01 09:02:05"`); the engine
//! works in elapsed simulated seconds.  `ShopCalendar` anchors second 0 at
//! the shop opening — the *date* of the first recorded sample, fixed at
//! 09:00 local — and converts in both directions.

use chrono::{Duration, NaiveDateTime};

use crate::{RpError, RpResult, SimSecond};

/// Timestamp layout used by every dataset column and every formatted output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hour of day (local) at which second 0 falls.
const OPENING_HOUR: u32 = 9;

/// Maps between absolute wall-clock timestamps and [`SimSecond`]s.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopCalendar {
    /// Wall-clock instant of simulated second 0.
    opening: NaiveDateTime,
}

impl ShopCalendar {
    pub fn new(opening: NaiveDateTime) -> Self {
        Self { opening }
    }

    /// Derive the opening reference from the first recorded timestamp:
    /// same date, 09:00:00.
    pub fn from_first_timestamp(timestamp: &str) -> RpResult<Self> {
        let first = parse_timestamp(timestamp)?;
        match first.date().and_hms_opt(OPENING_HOUR, 0, 0) {
            Some(opening) => Ok(Self::new(opening)),
            None => Err(RpError::Parse(format!(
                "cannot anchor opening time on date {}",
                first.date()
            ))),
        }
    }

    /// Wall-clock instant of simulated second 0.
    #[inline]
    pub fn opening(&self) -> NaiveDateTime {
        self.opening
    }

    /// Elapsed simulated second for an absolute timestamp.
    ///
    /// # Errors
    ///
    /// A timestamp before the opening reference has no valid simulated
    /// second and is rejected as a parse error.
    pub fn sim_second(&self, timestamp: NaiveDateTime) -> RpResult<SimSecond> {
        let elapsed = (timestamp - self.opening).num_seconds();
        if elapsed < 0 {
            return Err(RpError::Parse(format!(
                "timestamp {timestamp} precedes shop opening {}",
                self.opening
            )));
        }
        Ok(SimSecond(elapsed as u64))
    }

    /// Parse an absolute timestamp and convert it in one step.
    pub fn sim_second_of(&self, timestamp: &str) -> RpResult<SimSecond> {
        self.sim_second(parse_timestamp(timestamp)?)
    }

    /// Absolute wall-clock instant corresponding to `second`.
    #[inline]
    pub fn wall_time(&self, second: SimSecond) -> NaiveDateTime {
        self.opening + Duration::seconds(second.0 as i64)
    }

    /// `wall_time` rendered in the dataset's timestamp layout.
    pub fn format_wall(&self, second: SimSecond) -> String {
        self.wall_time(second).format(TIMESTAMP_FORMAT).to_string()
    }
}

impl Default for ShopCalendar {
    /// Epoch date at 09:00 — a placeholder for replays with no samples.
    fn default() -> Self {
        Self::new(NaiveDateTime::UNIX_EPOCH + Duration::hours(OPENING_HOUR as i64))
    }
}

// ── Free helpers ──────────────────────────────────────────────────────────────

/// Parse a `"%Y-%m-%d %H:%M:%S"` timestamp.
pub fn parse_timestamp(s: &str) -> RpResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| RpError::Parse(format!("invalid timestamp {s:?}: {e}")))
}

/// Render an elapsed-seconds duration the way the status table shows it:
/// `125` → `"2 min. 5s"`.
pub fn format_duration(elapsed_secs: u64) -> String {
    format!("{} min. {}s", elapsed_secs / 60, elapsed_secs % 60)
}
