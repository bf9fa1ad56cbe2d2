//! Unit tests for rp-route.

use rp_core::{GridCell, SimSecond, TicketId};
use rp_ingest::LocationSample;

use crate::{ContentionIndex, ContentionKey, RouteError, build_route};

fn sample(ticket: u32, x: u32, y: u32, second: u64) -> LocationSample {
    LocationSample {
        ticket:  TicketId(ticket),
        cell:    GridCell::new(x, y),
        second:  SimSecond(second),
        picking: false,
    }
}

// ── Waypoint builder ──────────────────────────────────────────────────────────

mod waypoints {
    use super::*;

    #[test]
    fn sorts_by_second_and_assigns_seq() {
        let samples = [sample(0, 3, 3, 2), sample(0, 1, 1, 0), sample(0, 2, 2, 1)];
        let route = build_route(TicketId(0), &samples, 40).unwrap();

        assert_eq!(route.len(), 3);
        for (i, w) in route.waypoints().iter().enumerate() {
            assert_eq!(w.seq, i as u32);
            assert_eq!(w.second, SimSecond(i as u64));
        }
        assert_eq!(route.waypoints()[0].cell, GridCell::new(1, 1));
    }

    #[test]
    fn same_second_ties_keep_arrival_order() {
        let samples = [sample(0, 1, 1, 5), sample(0, 2, 2, 5), sample(0, 3, 3, 5)];
        let route = build_route(TicketId(0), &samples, 40).unwrap();

        let cells: Vec<_> = route.waypoints().iter().map(|w| w.cell.x).collect();
        assert_eq!(cells, [1, 2, 3]);
    }

    #[test]
    fn pixel_mapping_uses_one_based_cells() {
        let samples = [sample(0, 2, 3, 0)];
        let route = build_route(TicketId(0), &samples, 40).unwrap();

        let w = &route.waypoints()[0];
        assert_eq!(w.pixel.x, 40);
        assert_eq!(w.pixel.y, 80);
    }

    #[test]
    fn first_last_and_duration() {
        let samples = [sample(0, 1, 1, 10), sample(0, 2, 2, 11), sample(0, 3, 3, 14)];
        let route = build_route(TicketId(0), &samples, 40).unwrap();

        assert_eq!(route.first_second(), SimSecond(10));
        assert_eq!(route.last_second(), SimSecond(14));
        assert_eq!(route.duration_secs(), 4);
    }

    #[test]
    fn empty_samples_are_rejected() {
        assert!(matches!(
            build_route(TicketId(7), &[], 40),
            Err(RouteError::Empty(TicketId(7)))
        ));
    }
}

// ── Contention analysis ───────────────────────────────────────────────────────

mod contention {
    use super::*;

    #[test]
    fn collision_requires_same_cell_and_second_and_distinct_tickets() {
        let samples = [
            sample(0, 2, 3, 5),
            sample(1, 2, 3, 5), // collides with the first
            sample(2, 2, 3, 6), // same cell, later second
            sample(0, 2, 3, 5), // same ticket twice, never a collision alone
        ];
        let index = ContentionIndex::analyze(&samples);

        let key = ContentionKey::new(GridCell::new(2, 3), SimSecond(5));
        assert!(index.is_collision(key));
        assert!(!index.is_collision(ContentionKey::new(GridCell::new(2, 3), SimSecond(6))));
        assert_eq!(index.collision_count(), 1);
    }

    #[test]
    fn worked_example_cell_2_3_second_5() {
        // T1 and T2 both at (2,3) at second 5: one collision key, and each
        // ticket sees exactly the other under that key.
        let samples = [sample(1, 2, 3, 5), sample(2, 2, 3, 5)];
        let index = ContentionIndex::analyze(&samples);

        let key = ContentionKey::new(GridCell::new(2, 3), SimSecond(5));
        assert!(index.is_collision(key));

        let seen_by_t1: Vec<_> = index.others_at(key, TicketId(1)).collect();
        let seen_by_t2: Vec<_> = index.others_at(key, TicketId(2)).collect();
        assert_eq!(seen_by_t1, [TicketId(2)]);
        assert_eq!(seen_by_t2, [TicketId(1)]);
    }

    #[test]
    fn shared_entries_key_each_occupants_own_visit() {
        let samples = [sample(0, 4, 4, 1), sample(1, 4, 4, 9)];
        let index = ContentionIndex::analyze(&samples);

        // No collision; each entry names the ticket recorded at its key's
        // second, never the counterpart that made the cell shared.
        assert_eq!(index.collision_count(), 0);
        let k0 = ContentionKey::new(GridCell::new(4, 4), SimSecond(1));
        let k1 = ContentionKey::new(GridCell::new(4, 4), SimSecond(9));
        assert_eq!(index.others_at(k0, TicketId(1)).collect::<Vec<_>>(), [TicketId(0)]);
        assert_eq!(index.others_at(k1, TicketId(0)).collect::<Vec<_>>(), [TicketId(1)]);
        assert!(!index.is_shared(k0, TicketId(0)));
        assert!(!index.is_shared(k1, TicketId(1)));
    }

    #[test]
    fn others_at_never_returns_the_asking_ticket() {
        let samples = [sample(0, 1, 1, 0), sample(1, 1, 1, 0), sample(2, 1, 1, 0)];
        let index = ContentionIndex::analyze(&samples);

        let key = ContentionKey::new(GridCell::new(1, 1), SimSecond(0));
        for me in 0..3 {
            let others: Vec<_> = index.others_at(key, TicketId(me)).collect();
            assert_eq!(others.len(), 2);
            assert!(!others.contains(&TicketId(me)));
        }
    }

    #[test]
    fn retire_removes_a_ticket_everywhere() {
        let samples = [sample(0, 1, 1, 0), sample(1, 1, 1, 0), sample(2, 1, 1, 0)];
        let mut index = ContentionIndex::analyze(&samples);

        index.retire(TicketId(1));
        let key = ContentionKey::new(GridCell::new(1, 1), SimSecond(0));
        assert_eq!(index.others_at(key, TicketId(0)).collect::<Vec<_>>(), [TicketId(2)]);
        assert!(!index.is_shared(key, TicketId(2)) || index.others_at(key, TicketId(2)).count() == 1);

        // Retiring the rest empties and drops the entries.
        index.retire(TicketId(0));
        index.retire(TicketId(2));
        assert_eq!(index.shared_count(), 0);
    }

    #[test]
    fn entries_iterate_in_ascending_key_order() {
        let samples = [
            sample(0, 5, 5, 3),
            sample(1, 5, 5, 1),
            sample(0, 2, 2, 7),
            sample(1, 2, 2, 0),
        ];
        let index = ContentionIndex::analyze(&samples);

        let keys: Vec<_> = index.entries_sorted().iter().map(|&(k, _)| k).collect();
        let mut expected = keys.clone();
        expected.sort();
        assert_eq!(keys, expected);
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn disjoint_cells_produce_no_contention() {
        let samples = [sample(0, 1, 1, 0), sample(1, 2, 2, 0)];
        let index = ContentionIndex::analyze(&samples);
        assert_eq!(index.collision_count(), 0);
        assert_eq!(index.shared_count(), 0);
    }
}
