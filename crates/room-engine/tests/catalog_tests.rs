//! Tests for the room catalog and the building directory.

use chrono::NaiveDate;
use room_engine::error::RoomError;
use room_engine::{BuildingDirectory, OccupancyRecord, RoomCatalog, TimeWindow};

fn record(building_id: &str, building_name: Option<&str>) -> OccupancyRecord {
    let r = OccupancyRecord::new(
        building_id,
        "101",
        NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
        TimeWindow::parse("09:00", "10:00").unwrap(),
        "Algebra",
    );
    match building_name {
        Some(name) => r.with_building_name(name),
        None => r,
    }
}

// ── RoomCatalog ─────────────────────────────────────────────────────────────

#[test]
fn catalog_preserves_room_order() {
    let catalog = RoomCatalog::from_json(r#"{"Hall A": ["103", "101", "102"]}"#).unwrap();
    assert_eq!(catalog.rooms_of("Hall A"), ["103", "101", "102"]);
}

#[test]
fn unknown_building_yields_no_rooms() {
    let catalog = RoomCatalog::from_json(r#"{"Hall A": ["101"]}"#).unwrap();
    assert!(catalog.rooms_of("Hall B").is_empty());
    assert!(catalog.rooms_of("").is_empty());
}

#[test]
fn catalog_lists_buildings_sorted() {
    let catalog: RoomCatalog = [("Science", vec!["S1"]), ("Arts", vec!["A1", "A2"])]
        .into_iter()
        .collect();
    assert_eq!(catalog.buildings(), ["Arts", "Science"]);
    assert_eq!(catalog.len(), 2);
}

#[test]
fn malformed_catalog_is_rejected() {
    let err = RoomCatalog::from_json(r#"["Hall A"]"#).unwrap_err();
    assert!(matches!(err, RoomError::Catalog(_)));
}

#[test]
fn insert_replaces_room_list() {
    let mut catalog = RoomCatalog::new();
    catalog.insert("Hall A", ["101"]);
    catalog.insert("Hall A", ["201", "202"]);
    assert_eq!(catalog.rooms_of("Hall A"), ["201", "202"]);
}

// ── BuildingDirectory ───────────────────────────────────────────────────────

#[test]
fn directory_derives_names_from_records() {
    let records = vec![
        record("B1", Some("Hall A")),
        record("B2", None),
        record("B3", Some("Science")),
    ];
    let directory = BuildingDirectory::from_records(&records);

    assert_eq!(directory.name_of("B1"), Some("Hall A"));
    assert_eq!(directory.name_of("B2"), None);
    assert_eq!(directory.entries(), [("B1", "Hall A"), ("B3", "Science")]);
}

#[test]
fn directory_keeps_first_name_seen() {
    let records = vec![record("B1", Some("Hall A")), record("B1", Some("Hall Z"))];
    let directory = BuildingDirectory::from_records(&records);
    assert_eq!(directory.name_of("B1"), Some("Hall A"));
    assert_eq!(directory.len(), 1);
}

#[test]
fn directory_serializes_in_id_order() {
    let mut directory = BuildingDirectory::new();
    directory.insert("B3", "Arts");
    directory.insert("B1", "Science");
    directory.insert("B2", "Hall A");

    let json = serde_json::to_string(&directory).unwrap();
    assert_eq!(json, r#"{"B1":"Science","B2":"Hall A","B3":"Arts"}"#);
}
