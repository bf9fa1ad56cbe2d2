//! Unit tests for rp-core.

use crate::*;

// ── SimSecond ─────────────────────────────────────────────────────────────────

mod sim_second {
    use super::*;

    #[test]
    fn offset_and_since_are_inverse() {
        let s = SimSecond(100);
        assert_eq!(s.offset(25), SimSecond(125));
        assert_eq!(s.offset(25).since(s), 25);
    }

    #[test]
    fn add_and_sub_operators() {
        assert_eq!(SimSecond(5) + 3, SimSecond(8));
        assert_eq!(SimSecond(8) - SimSecond(5), 3);
    }

    #[test]
    fn ordering_follows_inner_value() {
        assert!(SimSecond::ZERO < SimSecond(1));
        assert!(SimSecond(10) > SimSecond(9));
    }
}

// ── SpeedLevel / VirtualClock ─────────────────────────────────────────────────

mod speed {
    use super::*;
    use std::time::Duration;

    #[test]
    fn four_levels_cover_the_dilation_range() {
        assert_eq!(SpeedLevel::X1.interval(), Duration::from_millis(1_000));
        assert_eq!(SpeedLevel::X10.interval(), Duration::from_millis(100));
        assert_eq!(SpeedLevel::X100.interval(), Duration::from_millis(10));
        assert_eq!(SpeedLevel::X1000.interval(), Duration::from_millis(1));
    }

    #[test]
    fn stepping_clamps_at_both_ends() {
        let mut level = SpeedLevel::X1;
        assert_eq!(level.step(SpeedStep::Slower), SpeedLevel::X1);
        for _ in 0..6 {
            level = level.step(SpeedStep::Faster);
        }
        assert_eq!(level, SpeedLevel::X1000);
        assert_eq!(level.step(SpeedStep::Faster), SpeedLevel::X1000);
    }

    #[test]
    fn level_index_is_one_based() {
        assert_eq!(SpeedLevel::X1.level(), 1);
        assert_eq!(SpeedLevel::X1000.level(), 4);
    }

    #[test]
    fn clock_only_moves_forward() {
        let mut clock = VirtualClock::new(SpeedLevel::X1);
        assert_eq!(clock.current(), SimSecond::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current(), SimSecond(2));
    }

    #[test]
    fn speed_change_does_not_touch_the_counter() {
        let mut clock = VirtualClock::new(SpeedLevel::X1);
        clock.advance();
        clock.speed = SpeedLevel::X1000;
        assert_eq!(clock.current(), SimSecond(1));
    }
}

// ── ShopCalendar ──────────────────────────────────────────────────────────────

mod calendar {
    use super::*;

    #[test]
    fn opening_is_first_date_at_nine() {
        let cal = ShopCalendar::from_first_timestamp("2024-01-01 09:13:27").unwrap();
        assert_eq!(cal.format_wall(SimSecond::ZERO), "2024-01-01 09:00:00");
    }

    #[test]
    fn sim_second_counts_from_opening() {
        let cal = ShopCalendar::from_first_timestamp("2024-01-01 10:00:00").unwrap();
        assert_eq!(cal.sim_second_of("2024-01-01 09:00:05").unwrap(), SimSecond(5));
        assert_eq!(cal.sim_second_of("2024-01-01 10:01:00").unwrap(), SimSecond(3_660));
    }

    #[test]
    fn timestamp_before_opening_is_rejected() {
        let cal = ShopCalendar::from_first_timestamp("2024-01-01 09:30:00").unwrap();
        assert!(cal.sim_second_of("2024-01-01 08:59:59").is_err());
    }

    #[test]
    fn garbage_timestamp_is_a_parse_error() {
        assert!(ShopCalendar::from_first_timestamp("not a date").is_err());
    }

    #[test]
    fn finish_timestamp_from_start_plus_elapsed() {
        // Start 2024-01-01 09:00:00, elapsed 125 s → finish 09:02:05.
        let cal = ShopCalendar::from_first_timestamp("2024-01-01 09:00:00").unwrap();
        assert_eq!(cal.format_wall(SimSecond(125)), "2024-01-01 09:02:05");
    }

    #[test]
    fn duration_formatting_matches_the_table_layout() {
        assert_eq!(format_duration(125), "2 min. 5s");
        assert_eq!(format_duration(0), "0 min. 0s");
        assert_eq!(format_duration(60), "1 min. 0s");
    }
}

// ── Colors ────────────────────────────────────────────────────────────────────

mod colors {
    use super::*;

    #[test]
    fn assignment_is_a_bijection() {
        let palette = ColorAssignment::generate(64, 7);
        let mut seen = std::collections::HashSet::new();
        for i in 0..64u32 {
            assert!(seen.insert(palette.color_of(TicketId(i))), "duplicate color");
        }
    }

    #[test]
    fn white_is_never_assigned() {
        let palette = ColorAssignment::generate(256, 1);
        for i in 0..256u32 {
            assert_ne!(palette.color_of(TicketId(i)), DisplayColor::WHITE);
        }
    }

    #[test]
    fn same_seed_same_palette() {
        let a = ColorAssignment::generate(16, 99);
        let b = ColorAssignment::generate(16, 99);
        for i in 0..16u32 {
            assert_eq!(a.color_of(TicketId(i)), b.color_of(TicketId(i)));
        }
    }

    #[test]
    fn hex_display_is_six_uppercase_digits() {
        assert_eq!(DisplayColor(0x00_00FF).to_string(), "#0000FF");
        assert_eq!(DisplayColor(0x1A_2B3C).to_string(), "#1A2B3C");
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

mod grid {
    use super::*;

    #[test]
    fn pixel_mapping_is_one_based() {
        assert_eq!(GridCell::new(1, 1).to_pixel(40), PixelPoint { x: 0, y: 0 });
        assert_eq!(GridCell::new(2, 3).to_pixel(40), PixelPoint { x: 40, y: 80 });
    }

    #[test]
    fn zero_coordinate_clamps_instead_of_wrapping() {
        assert_eq!(GridCell::new(0, 0).to_pixel(40), PixelPoint { x: 0, y: 0 });
    }
}
