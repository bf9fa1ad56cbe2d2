//! Ticket lifecycle states.

use std::fmt;

/// Lifecycle of one ticket over a replay.
///
/// | State       | Meaning                                             |
/// |-------------|-----------------------------------------------------|
/// | `Pending`   | Known from the order table, no samples seen yet     |
/// | `Waiting`   | Has a route, start second not reached               |
/// | `InRoute`   | Route is playing                                    |
/// | `Completed` | Route finished (or was abandoned)                   |
///
/// Transitions only move forward; an abandoned route jumps straight to
/// `Completed`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum TicketState {
    #[default]
    Pending,
    Waiting,
    InRoute,
    Completed,
}

impl TicketState {
    /// Ordering rank; transitions must never decrease it.
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            TicketState::Pending => 0,
            TicketState::Waiting => 1,
            TicketState::InRoute => 2,
            TicketState::Completed => 3,
        }
    }
}

impl fmt::Display for TicketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TicketState::Pending => "Pending",
            TicketState::Waiting => "Waiting",
            TicketState::InRoute => "In route",
            TicketState::Completed => "Completed",
        };
        f.write_str(label)
    }
}
