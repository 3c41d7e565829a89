//! Property-based tests for the overlap rule, report ranking, and weekly
//! aggregation using proptest.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use room_engine::availability::compare_room_names;
use room_engine::time::MINUTES_PER_DAY;
use room_engine::{
    overlaps, resolve, week_range, week_view, OccupancyIndex, OccupancyRecord, Query,
    RoomCatalog, TimeWindow,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A valid half-open window within one day.
fn arb_window() -> impl Strategy<Value = TimeWindow> {
    (0u16..MINUTES_PER_DAY)
        .prop_flat_map(|start| (Just(start), (start + 1)..=MINUTES_PER_DAY))
        .prop_map(|(start, end)| TimeWindow::new(start, end).unwrap())
}

fn arb_room() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("101".to_string()),
        Just("102".to_string()),
        Just("a201".to_string()),
        Just("A202".to_string()),
        Just("B1".to_string()),
        Just("강의실".to_string()),
    ]
}

/// Dates in the week of 2025-09-15 plus one day either side.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..9).prop_map(|offset| base() - Days::new(1) + Days::new(offset))
}

fn arb_building() -> impl Strategy<Value = String> {
    prop_oneof![Just("B1".to_string()), Just("B2".to_string())]
}

fn arb_record() -> impl Strategy<Value = OccupancyRecord> {
    (arb_building(), arb_room(), arb_date(), arb_window())
        .prop_map(|(b, room, date, window)| OccupancyRecord::new(b, room, date, window, "x"))
}

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
}

fn catalog() -> RoomCatalog {
    [(
        "Hall A",
        vec!["101", "102", "a201", "A202", "B1", "강의실", "303"],
    )]
    .into_iter()
    .collect()
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Overlap
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn overlap_is_symmetric(a in arb_window(), b in arb_window()) {
        prop_assert_eq!(
            overlaps(a.start(), a.end(), b.start(), b.end()),
            overlaps(b.start(), b.end(), a.start(), a.end())
        );
    }

    #[test]
    fn touching_windows_never_overlap(
        start in 0u16..1200,
        len_a in 1u16..120,
        len_b in 1u16..120,
    ) {
        let mid = start + len_a;
        prop_assert!(!overlaps(start, mid, mid, mid + len_b));
    }
}

// ---------------------------------------------------------------------------
// Availability report
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn available_iff_no_conflicts(
        records in prop::collection::vec(arb_record(), 0..40),
        window in arb_window(),
        date in arb_date(),
    ) {
        let index = OccupancyIndex::new(records);
        let report = resolve(&catalog(), &index, "Hall A", &Query::new("B1", date, window));

        prop_assert_eq!(report.len(), catalog().rooms_of("Hall A").len());
        for room in &report.rooms {
            prop_assert_eq!(room.available, room.conflicts.is_empty());
            for c in &room.conflicts {
                prop_assert!(window.overlaps(&c.interval));
                prop_assert_eq!(&c.room_name, &room.room_name);
                prop_assert_eq!(c.date, date);
            }
        }
    }

    #[test]
    fn report_is_ranked(
        records in prop::collection::vec(arb_record(), 0..40),
        window in arb_window(),
        date in arb_date(),
    ) {
        let index = OccupancyIndex::new(records);
        let report = resolve(&catalog(), &index, "Hall A", &Query::new("B1", date, window));

        for pair in report.rooms.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let ok = (a.available && !b.available)
                || (a.available == b.available
                    && compare_room_names(&a.room_name, &b.room_name).is_le());
            prop_assert!(ok, "misordered: {} then {}", a.room_name, b.room_name);
        }
    }
}

// ---------------------------------------------------------------------------
// Weekly aggregation
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn anchor_lies_within_week(offset in 0u64..3650) {
        let anchor = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Days::new(offset);
        let (start, end) = week_range(anchor);
        prop_assert!(start <= anchor && anchor <= end);
        prop_assert_eq!((end - start).num_days(), 6);
    }

    #[test]
    fn week_counts_every_matching_record_once(
        records in prop::collection::vec(arb_record(), 0..40),
        anchor in arb_date(),
        room in arb_room(),
    ) {
        let (start, end) = week_range(anchor);
        let expected = records
            .iter()
            .filter(|r| r.building_id == "B1" && r.room_name == room)
            .filter(|r| r.date >= start && r.date <= end)
            .count();

        let index = OccupancyIndex::new(records);
        let view = week_view(&index, &room, "B1", anchor);

        prop_assert_eq!(view.days.len(), 7);
        prop_assert_eq!(view.total_records(), expected);
        for day in &view.days {
            for pair in day.records.windows(2) {
                prop_assert!(pair[0].interval.start() <= pair[1].interval.start());
            }
            prop_assert!(day.records.iter().all(|r| r.date == day.date));
        }
    }
}
