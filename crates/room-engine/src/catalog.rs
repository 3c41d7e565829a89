//! Room catalog and building directory.
//!
//! The catalog is the authoritative list of rooms per building, keyed by the
//! building's display name. Occupancy records reference buildings by an
//! external id instead, so the [`BuildingDirectory`] supplies the id → name
//! resolution the resolver is given as input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::occupancy::OccupancyRecord;

/// Building display name → ordered room names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCatalog {
    buildings: BTreeMap<String, Vec<String>>,
}

impl RoomCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog document of the form `{"Hall A": ["101", "102"], ...}`.
    ///
    /// # Errors
    /// Returns `RoomError::Catalog` if the document is not such an object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace a building's room list.
    pub fn insert<I, S>(&mut self, building: impl Into<String>, rooms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.buildings
            .insert(building.into(), rooms.into_iter().map(Into::into).collect());
    }

    /// Rooms of a building in catalog order.
    ///
    /// An unknown building yields an empty slice, not an error.
    pub fn rooms_of(&self, building: &str) -> &[String] {
        self.buildings
            .get(building)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Building names, sorted.
    pub fn buildings(&self) -> Vec<&str> {
        self.buildings.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}

impl<K, V, S> FromIterator<(K, V)> for RoomCatalog
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut catalog = RoomCatalog::new();
        for (building, rooms) in iter {
            catalog.insert(building, rooms);
        }
        catalog
    }
}

/// Building id → building display name, ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingDirectory {
    names: BTreeMap<String, String>,
}

impl BuildingDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, building_id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(building_id.into(), name.into());
    }

    /// Derive the directory from the `building_name` carried by occupancy
    /// records. The first name seen for an id wins; later disagreeing names
    /// are logged and ignored.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a OccupancyRecord>) -> Self {
        let mut directory = BuildingDirectory::new();
        for record in records {
            let Some(name) = record.building_name.as_deref() else {
                continue;
            };
            match directory.names.get(&record.building_id) {
                Some(existing) if existing != name => {
                    warn!(
                        building_id = %record.building_id,
                        kept = %existing,
                        ignored = %name,
                        "conflicting building names for one id"
                    );
                }
                Some(_) => {}
                None => directory.insert(record.building_id.clone(), name),
            }
        }
        directory
    }

    /// Display name for a building id, if known.
    pub fn name_of(&self, building_id: &str) -> Option<&str> {
        self.names.get(building_id).map(String::as_str)
    }

    /// `(id, name)` pairs sorted by name, then id.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .names
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
