//! Per-room availability for one building, date, and time window.
//!
//! Joins the room catalog against the occupancy index: every catalog room of
//! the building is reported, either available or with the records that
//! overlap the requested window. Rooms that appear only in the occupancy log
//! are not reported; the catalog is authoritative.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::RoomCatalog;
use crate::error::Result;
use crate::occupancy::{OccupancyIndex, OccupancyRecord};
use crate::time::{date_key, parse_date, TimeWindow};

/// An availability question: which rooms of `building_id` are free on `date`
/// during `window`?
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub building_id: String,
    #[serde(with = "date_key")]
    pub date: NaiveDate,
    pub window: TimeWindow,
}

impl Query {
    pub fn new(building_id: impl Into<String>, date: NaiveDate, window: TimeWindow) -> Self {
        Self {
            building_id: building_id.into(),
            date,
            window,
        }
    }

    /// Build a query from raw form values.
    ///
    /// # Errors
    /// - `RoomError::InvalidDate` if `date` is not a zero-padded `YYYY-MM-DD`.
    /// - `RoomError::InvalidTime` if `start` or `end` is not `HH:MM`.
    /// - `RoomError::InvalidWindow` if `start` is not before `end`.
    pub fn parse(building_id: &str, date: &str, start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(
            building_id,
            parse_date(date)?,
            TimeWindow::parse(start, end)?,
        ))
    }
}

/// Availability of one catalog room.
///
/// `available` is true exactly when `conflicts` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAvailability {
    pub room_name: String,
    pub building_name: String,
    pub building_id: String,
    pub available: bool,
    /// Records overlapping the query window, in ingestion order.
    pub conflicts: Vec<OccupancyRecord>,
}

/// Ranked availability of every catalog room of a building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    pub building_id: String,
    pub building_name: String,
    #[serde(with = "date_key")]
    pub date: NaiveDate,
    pub window: TimeWindow,
    /// Available rooms first, then by room name.
    pub rooms: Vec<RoomAvailability>,
}

impl AvailabilityReport {
    pub fn available_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.available).count()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }
}

/// Resolve availability for `query` against a catalog and an occupancy index.
///
/// `building_name` is the catalog key for `query.building_id`; the caller
/// resolves it (see [`crate::BuildingDirectory`]). A name the catalog does not
/// know yields an empty report.
///
/// Ranking: available rooms before occupied ones, then room names ascending
/// per [`compare_room_names`]. The sort is stable.
pub fn resolve(
    catalog: &RoomCatalog,
    index: &OccupancyIndex,
    building_name: &str,
    query: &Query,
) -> AvailabilityReport {
    let rooms = catalog.rooms_of(building_name);

    let mut conflicts_by_room: HashMap<&str, Vec<OccupancyRecord>> = HashMap::new();
    for record in index
        .records_for_day(&query.building_id, query.date)
        .filter(|r| query.window.overlaps(&r.interval))
    {
        conflicts_by_room
            .entry(record.room_name.as_str())
            .or_default()
            .push(record.clone());
    }

    let mut entries: Vec<RoomAvailability> = rooms
        .iter()
        .map(|room_name| {
            let conflicts = conflicts_by_room
                .get(room_name.as_str())
                .cloned()
                .unwrap_or_default();
            RoomAvailability {
                room_name: room_name.clone(),
                building_name: building_name.to_string(),
                building_id: query.building_id.clone(),
                available: conflicts.is_empty(),
                conflicts,
            }
        })
        .collect();

    entries.sort_by(compare_rooms);

    debug!(
        building_id = %query.building_id,
        building_name,
        date = %query.date,
        window = %query.window,
        rooms = entries.len(),
        available = entries.iter().filter(|r| r.available).count(),
        "resolved availability"
    );

    AvailabilityReport {
        building_id: query.building_id.clone(),
        building_name: building_name.to_string(),
        date: query.date,
        window: query.window,
        rooms: entries,
    }
}

/// Report ordering: `available` descending, then [`compare_room_names`].
pub fn compare_rooms(a: &RoomAvailability, b: &RoomAvailability) -> Ordering {
    b.available
        .cmp(&a.available)
        .then_with(|| compare_room_names(&a.room_name, &b.room_name))
}

/// Case-insensitive name order, so `"a101"` and `"A102"` sort together.
///
/// Names that differ only in case put the lowercase form first (`"a101"`
/// before `"A101"`), matching collator ordering; distinct names never
/// compare equal.
pub fn compare_room_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    // Lowercase letters have the higher code point, so reverse the raw order.
    folded.then_with(|| b.cmp(a))
}
