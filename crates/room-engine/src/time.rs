//! Minute-of-day time arithmetic.
//!
//! All times are naive local wall-clock values on a single calendar date,
//! represented as minutes since midnight. Intervals are half-open `[start, end)`.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoomError};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Parse an `"HH:MM"` string into minutes since midnight.
///
/// Both parts must be unsigned decimal integers; hour must be in `0..=23`
/// and minute in `0..=59`. Single-digit parts (`"9:05"`) are accepted.
///
/// # Errors
/// Returns `RoomError::InvalidTime` for anything else.
pub fn parse_time(s: &str) -> Result<u16> {
    let invalid = || RoomError::InvalidTime(s.to_string());

    let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
    let hours = parse_component(hours).ok_or_else(invalid)?;
    let minutes = parse_component(minutes).ok_or_else(invalid)?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Parse the end of a window: like [`parse_time`], but also accepts
/// `"24:00"` as the end of the day (1440).
pub fn parse_end_time(s: &str) -> Result<u16> {
    if s.trim() == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    parse_time(s)
}

fn parse_component(part: &str) -> Option<u16> {
    // `u16::from_str` accepts a leading '+', which is not a valid clock digit.
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Format minutes since midnight as zero-padded `"HH:MM"`.
pub fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Half-open overlap test between `[a_start, a_end)` and `[b_start, b_end)`.
///
/// Adjacent intervals where one ends exactly when the other starts do NOT
/// overlap. Every conflict decision in the engine goes through this function.
pub fn overlaps(a_start: u16, a_end: u16, b_start: u16, b_end: u16) -> bool {
    a_start < b_end && a_end > b_start
}

/// A validated half-open interval of minutes within one day.
///
/// Construction guarantees `start < end <= 1440`, so an empty or inverted
/// window can never reach the resolver.
///
/// Serializes as the occupancy log's compound form, `"HH:MM - HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeWindow {
    start: u16,
    end: u16,
}

impl TimeWindow {
    /// # Errors
    /// Returns `RoomError::InvalidWindow` unless `start < end <= 1440`.
    pub fn new(start: u16, end: u16) -> Result<Self> {
        if start >= end || end > MINUTES_PER_DAY {
            return Err(RoomError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a window from two `"HH:MM"` strings; `end` may be `"24:00"`.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_time(start)?, parse_end_time(end)?)
    }

    /// Decode the occupancy log's `"HH:MM - HH:MM"` field.
    pub fn parse_range(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once(" - ")
            .ok_or_else(|| RoomError::InvalidTime(s.to_string()))?;
        Self::parse(start, end)
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            format_minutes(self.start),
            format_minutes(self.end)
        )
    }
}

impl TryFrom<String> for TimeWindow {
    type Error = RoomError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse_range(&value)
    }
}

impl From<TimeWindow> for String {
    fn from(window: TimeWindow) -> Self {
        window.to_string()
    }
}

/// Parse a strictly zero-padded `"YYYY-MM-DD"` date key.
///
/// # Errors
/// Returns `RoomError::InvalidDate` for any other shape or an impossible date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let invalid = || RoomError::InvalidDate(s.to_string());

    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid())
}

/// Serde adapter for `NaiveDate` fields stored as `"YYYY-MM-DD"` keys.
pub(crate) mod date_key {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(de::Error::custom)
    }
}
