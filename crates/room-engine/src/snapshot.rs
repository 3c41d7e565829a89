//! Immutable bundle of everything a query reads.
//!
//! A snapshot is built once from the loaded sources and then only borrowed.
//! Reloading means building a new snapshot and swapping it in (e.g. behind an
//! `Arc`); queries already running keep the one they started with.

use chrono::NaiveDate;

use crate::availability::{self, AvailabilityReport, Query};
use crate::catalog::{BuildingDirectory, RoomCatalog};
use crate::error::Result;
use crate::occupancy::OccupancyIndex;
use crate::weekly::{self, WeekView};

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub catalog: RoomCatalog,
    pub index: OccupancyIndex,
    pub directory: BuildingDirectory,
}

impl Snapshot {
    pub fn new(catalog: RoomCatalog, index: OccupancyIndex, directory: BuildingDirectory) -> Self {
        Self {
            catalog,
            index,
            directory,
        }
    }

    /// Build a snapshot from a catalog document and an occupancy log, deriving
    /// the building directory from the log's `building_name` fields.
    pub fn from_sources(catalog_json: &str, occupancy_jsonl: &str) -> Result<Self> {
        let catalog = RoomCatalog::from_json(catalog_json)?;
        let index = OccupancyIndex::from_jsonl(occupancy_jsonl)?;
        let directory = BuildingDirectory::from_records(index.records());
        Ok(Self::new(catalog, index, directory))
    }

    /// Catalog name for a building id; empty when the id is unknown.
    pub fn building_name_of(&self, building_id: &str) -> &str {
        self.directory.name_of(building_id).unwrap_or_default()
    }

    /// Resolve availability, looking the building name up in the directory.
    pub fn resolve(&self, query: &Query) -> AvailabilityReport {
        let building_name = self.building_name_of(&query.building_id);
        availability::resolve(&self.catalog, &self.index, building_name, query)
    }

    /// Resolve availability with an explicitly supplied catalog name.
    pub fn resolve_as(&self, building_name: &str, query: &Query) -> AvailabilityReport {
        availability::resolve(&self.catalog, &self.index, building_name, query)
    }

    pub fn week_view(&self, room_name: &str, building_id: &str, anchor: NaiveDate) -> WeekView {
        weekly::week_view(&self.index, room_name, building_id, anchor)
    }
}
