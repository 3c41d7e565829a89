//! Monday-anchored weekly occupancy view of a single room.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::occupancy::{OccupancyIndex, OccupancyRecord};
use crate::time::date_key;

/// One calendar day of a [`WeekView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    #[serde(with = "date_key")]
    pub date: NaiveDate,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday_index: u32,
    /// True for the date the view was anchored on.
    pub is_anchor: bool,
    /// Sorted by start minute; equal starts keep ingestion order.
    pub records: Vec<OccupancyRecord>,
}

/// Seven consecutive days, Monday through Sunday, of one room's occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekView {
    pub room_name: String,
    pub building_id: String,
    #[serde(with = "date_key")]
    pub anchor: NaiveDate,
    #[serde(with = "date_key")]
    pub week_start: NaiveDate,
    #[serde(with = "date_key")]
    pub week_end: NaiveDate,
    pub days: Vec<DayBucket>,
}

impl WeekView {
    /// Total number of records across all seven days.
    pub fn total_records(&self) -> usize {
        self.days.iter().map(|d| d.records.len()).sum()
    }
}

/// The Monday on or before `anchor` and the Sunday six days after it.
pub fn week_range(anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let back = u64::from(anchor.weekday().num_days_from_monday());
    let start = anchor - Days::new(back);
    (start, start + Days::new(6))
}

/// Build the week view of `room_name` in `building_id` for the ISO week
/// containing `anchor`.
///
/// Always returns exactly seven buckets; days without records are present
/// with an empty record list.
pub fn week_view(
    index: &OccupancyIndex,
    room_name: &str,
    building_id: &str,
    anchor: NaiveDate,
) -> WeekView {
    let (week_start, week_end) = week_range(anchor);

    let mut days: Vec<DayBucket> = week_start
        .iter_days()
        .take(7)
        .map(|date| DayBucket {
            date,
            weekday_index: date.weekday().num_days_from_sunday(),
            is_anchor: date == anchor,
            records: Vec::new(),
        })
        .collect();

    for record in index.records_for_room(building_id, room_name, week_start, week_end) {
        // In range, so the offset is 0..=6.
        let offset = (record.date - week_start).num_days() as usize;
        days[offset].records.push(record.clone());
    }

    for day in &mut days {
        day.records.sort_by_key(|r| r.interval.start());
    }

    let view = WeekView {
        room_name: room_name.to_string(),
        building_id: building_id.to_string(),
        anchor,
        week_start,
        week_end,
        days,
    };

    debug!(
        building_id,
        room = room_name,
        %week_start,
        %week_end,
        records = view.total_records(),
        "built week view"
    );

    view
}
