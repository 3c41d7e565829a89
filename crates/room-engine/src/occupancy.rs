//! Occupancy records and the in-memory index over them.
//!
//! Records are ingested once from the occupancy log (JSON Lines) and never
//! mutated afterwards. The `"HH:MM - HH:MM"` time field is decoded into a
//! [`TimeWindow`] at ingestion, so queries never re-parse strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, RoomError};
use crate::time::{date_key, TimeWindow};

/// A single scheduled use of a room on one date.
///
/// Field names follow the occupancy log; unknown fields in a log line are
/// ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyRecord {
    pub building_id: String,
    /// Display name of the building, when the log carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    pub room_name: String,
    #[serde(with = "date_key")]
    pub date: NaiveDate,
    #[serde(rename = "time")]
    pub interval: TimeWindow,
    #[serde(default)]
    pub title: String,
}

impl OccupancyRecord {
    pub fn new(
        building_id: impl Into<String>,
        room_name: impl Into<String>,
        date: NaiveDate,
        interval: TimeWindow,
        title: impl Into<String>,
    ) -> Self {
        Self {
            building_id: building_id.into(),
            building_name: None,
            room_name: room_name.into(),
            date,
            interval,
            title: title.into(),
        }
    }

    pub fn with_building_name(mut self, name: impl Into<String>) -> Self {
        self.building_name = Some(name.into());
        self
    }
}

/// All ingested occupancy records, in ingestion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyIndex {
    records: Vec<OccupancyRecord>,
}

impl OccupancyIndex {
    pub fn new(records: Vec<OccupancyRecord>) -> Self {
        Self { records }
    }

    /// Ingest an occupancy log: one JSON object per line, blank lines skipped.
    ///
    /// # Errors
    /// Returns `RoomError::Decode` with the 1-based line number of the first
    /// line that is not a valid record (bad JSON, missing field, malformed
    /// date or time, or an empty time range).
    pub fn from_jsonl(text: &str) -> Result<Self> {
        let mut records = Vec::new();

        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record: OccupancyRecord =
                serde_json::from_str(line).map_err(|e| RoomError::Decode {
                    line: i + 1,
                    message: e.to_string(),
                })?;
            trace!(
                building_id = %record.building_id,
                room = %record.room_name,
                date = %record.date,
                "ingested record"
            );
            records.push(record);
        }

        debug!(count = records.len(), "occupancy log ingested");
        Ok(Self { records })
    }

    /// Records for a building on one date, in ingestion order.
    pub fn records_for_day<'a>(
        &'a self,
        building_id: &'a str,
        date: NaiveDate,
    ) -> impl Iterator<Item = &'a OccupancyRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.building_id == building_id && r.date == date)
    }

    /// Records for one room of a building with `date` in `[from, to]` inclusive.
    pub fn records_for_room<'a>(
        &'a self,
        building_id: &'a str,
        room_name: &'a str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Iterator<Item = &'a OccupancyRecord> + 'a {
        self.records.iter().filter(move |r| {
            r.building_id == building_id
                && r.room_name == room_name
                && r.date >= from
                && r.date <= to
        })
    }

    pub fn records(&self) -> &[OccupancyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<OccupancyRecord> for OccupancyIndex {
    fn from_iter<T: IntoIterator<Item = OccupancyRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
