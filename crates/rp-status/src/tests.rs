//! Unit tests for rp-status.

use std::cell::RefCell;
use std::rc::Rc;

use rp_core::{TicketId, calendar};

use crate::{DisplaySink, StatusBoard, StatusError, TicketRow, TicketState};

/// Sink recording every pushed row list.
#[derive(Default, Clone)]
struct RecordingSink {
    refreshes: Rc<RefCell<Vec<Vec<TicketRow>>>>,
}

impl DisplaySink for RecordingSink {
    fn refresh(&mut self, rows: &[TicketRow]) {
        self.refreshes.borrow_mut().push(rows.to_vec());
    }
}

fn board_with_one_ticket() -> (StatusBoard<RecordingSink>, RecordingSink) {
    let sink = RecordingSink::default();
    let mut board = StatusBoard::new(sink.clone());
    let start = calendar::parse_timestamp("2024-01-01 09:00:00").unwrap();
    board.register(TicketId(0), "T1", "C1", start, 3).unwrap();
    (board, sink)
}

mod lifecycle {
    use super::*;

    #[test]
    fn new_tickets_start_pending() {
        let (board, _) = board_with_one_ticket();
        assert_eq!(board.state_of(TicketId(0)).unwrap(), TicketState::Pending);
    }

    #[test]
    fn states_advance_forward() {
        let (mut board, _) = board_with_one_ticket();
        board.set_state(TicketId(0), TicketState::Waiting).unwrap();
        board.set_state(TicketId(0), TicketState::InRoute).unwrap();
        board.set_state(TicketId(0), TicketState::Completed).unwrap();
        assert_eq!(board.state_of(TicketId(0)).unwrap(), TicketState::Completed);
    }

    #[test]
    fn backward_transitions_are_ignored() {
        let (mut board, sink) = board_with_one_ticket();
        board.set_state(TicketId(0), TicketState::InRoute).unwrap();
        let pushes = sink.refreshes.borrow().len();

        board.set_state(TicketId(0), TicketState::Waiting).unwrap();
        board.set_state(TicketId(0), TicketState::InRoute).unwrap();
        assert_eq!(board.state_of(TicketId(0)).unwrap(), TicketState::InRoute);
        // No-ops push nothing.
        assert_eq!(sink.refreshes.borrow().len(), pushes);
    }

    #[test]
    fn abandonment_can_jump_straight_to_completed() {
        let (mut board, _) = board_with_one_ticket();
        board.set_state(TicketId(0), TicketState::Waiting).unwrap();
        board.set_state(TicketId(0), TicketState::Completed).unwrap();
        assert_eq!(board.state_of(TicketId(0)).unwrap(), TicketState::Completed);
    }

    #[test]
    fn unknown_ticket_is_fatal() {
        let (mut board, _) = board_with_one_ticket();
        assert!(matches!(
            board.set_state(TicketId(9), TicketState::Waiting),
            Err(StatusError::UnknownTicket(TicketId(9)))
        ));
        assert!(matches!(
            board.set_duration(TicketId(9), 1),
            Err(StatusError::UnknownTicket(TicketId(9)))
        ));
    }
}

mod durations {
    use super::*;

    #[test]
    fn duration_formats_minutes_and_seconds() {
        let (mut board, _) = board_with_one_ticket();
        board.set_duration(TicketId(0), 125).unwrap();

        let rows = board.rows();
        assert_eq!(rows[0].duration, "2 min. 5s");
        assert_eq!(rows[0].finish, "2024-01-01 09:02:05");
    }

    #[test]
    fn finish_is_start_plus_elapsed() {
        let sink = RecordingSink::default();
        let mut board = StatusBoard::new(sink);
        let start = calendar::parse_timestamp("2024-01-01 09:10:30").unwrap();
        board.register(TicketId(0), "T1", "C1", start, 0).unwrap();
        board.set_duration(TicketId(0), 90).unwrap();

        assert_eq!(board.rows()[0].finish, "2024-01-01 09:12:00");
        assert_eq!(board.rows()[0].duration, "1 min. 30s");
    }
}

mod publishing {
    use super::*;

    #[test]
    fn every_mutation_pushes_the_full_row_list() {
        let sink = RecordingSink::default();
        let mut board = StatusBoard::new(sink.clone());
        let start = calendar::parse_timestamp("2024-01-01 09:00:00").unwrap();

        board.register(TicketId(0), "T1", "C1", start, 1).unwrap();
        board.register(TicketId(1), "T2", "C2", start, 2).unwrap();
        board.set_state(TicketId(0), TicketState::Waiting).unwrap();
        board.set_duration(TicketId(1), 60).unwrap();

        let refreshes = sink.refreshes.borrow();
        assert_eq!(refreshes.len(), 4);
        // Last push carries both rows with all mutations applied.
        let last = refreshes.last().unwrap();
        assert_eq!(last.len(), 2);
        assert_eq!(last[0].state, TicketState::Waiting);
        assert_eq!(last[1].duration, "1 min. 0s");
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let (mut board, _) = board_with_one_ticket();
        let start = calendar::parse_timestamp("2024-01-01 09:00:00").unwrap();
        assert!(matches!(
            board.register(TicketId(0), "T1", "C1", start, 0),
            Err(StatusError::DuplicateTicket(TicketId(0)))
        ));
    }

    #[test]
    fn rows_carry_order_metadata() {
        let (board, _) = board_with_one_ticket();
        let rows = board.rows();
        assert_eq!(rows[0].label, "T1");
        assert_eq!(rows[0].customer, "C1");
        assert_eq!(rows[0].items, 3);
        assert_eq!(rows[0].start, "2024-01-01 09:00:00");
        assert!(rows[0].finish.is_empty());
    }
}
