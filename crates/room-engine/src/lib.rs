//! # room-engine
//!
//! Answers "which rooms in a building are free during this window on this date,
//! and what occupies the rest?" and "what does this room's week look like?".
//!
//! The engine is a pure, synchronous layer over two immutable inputs: a room
//! catalog (building name → ordered room names) and an occupancy index (the
//! ingested occupancy log). Every query returns a freshly built value; nothing
//! is cached or mutated between calls, so a single [`Snapshot`] can serve
//! concurrent callers.
//!
//! ## Modules
//!
//! - [`time`] — `"HH:MM"` parsing, half-open overlap test, [`TimeWindow`]
//! - [`catalog`] — Room catalog and building id → name directory
//! - [`occupancy`] — Occupancy records, JSON Lines ingestion, filtered lookup
//! - [`availability`] — Per-room availability report for one query
//! - [`weekly`] — Monday-anchored 7-day occupancy view of one room
//! - [`snapshot`] — Immutable catalog + index bundle shared across queries
//! - [`error`] — Error types

pub mod availability;
pub mod catalog;
pub mod error;
pub mod occupancy;
pub mod snapshot;
pub mod time;
pub mod weekly;

pub use availability::{resolve, AvailabilityReport, Query, RoomAvailability};
pub use catalog::{BuildingDirectory, RoomCatalog};
pub use error::RoomError;
pub use occupancy::{OccupancyIndex, OccupancyRecord};
pub use snapshot::Snapshot;
pub use time::{format_minutes, overlaps, parse_time, TimeWindow};
pub use weekly::{week_range, week_view, DayBucket, WeekView};
