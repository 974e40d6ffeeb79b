//! Building Geometry
//!
//! The static, read-only document describing buildings, their floors and the
//! units on each floor.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs, io,
    num::ParseIntError,
    path::Path,
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

mod index;

pub use index::{IndexedUnit, UnitIndex};

/// Unit identifier shared by the geometry document and the data store.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UnitId(pub i64);

impl Display for UnitId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for UnitId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Occupancy status of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    /// Open for a tenant.
    Available,

    /// Occupied.
    Taken,

    /// Held for someone.
    Reserved,
}

impl UnitStatus {
    /// Lowercase identifier, also used as the CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Taken => "taken",
            Self::Reserved => "reserved",
        }
    }

    /// Human-readable badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Taken => "Taken",
            Self::Reserved => "Reserved",
        }
    }
}

impl Display for UnitStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Per-status unit tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Available units.
    pub available: usize,

    /// Taken units.
    pub taken: usize,

    /// Reserved units.
    pub reserved: usize,
}

impl StatusCounts {
    /// Count each status in `statuses`.
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = UnitStatus>,
    {
        statuses
            .into_iter()
            .fold(Self::default(), |mut counts, status| {
                match status {
                    UnitStatus::Available => counts.available += 1,
                    UnitStatus::Taken => counts.taken += 1,
                    UnitStatus::Reserved => counts.reserved += 1,
                }

                counts
            })
    }

    /// Units counted.
    pub fn total(&self) -> usize {
        self.available + self.taken + self.reserved
    }
}

/// A unit as described by the geometry document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UnitGeometry {
    /// Unit identifier.
    pub id: UnitId,

    /// Display number; the document may store it as a string or a number.
    #[serde(deserialize_with = "string_or_number")]
    pub unit_number: String,

    /// Occupancy status.
    pub status: UnitStatus,
}

/// One floor of a building.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Floor {
    /// Floor number as labelled, `1` for the ground floor.
    pub floor_number: i32,

    /// Units on this floor, in display order.
    #[serde(default)]
    pub units: Vec<UnitGeometry>,
}

impl Floor {
    /// Status tallies for this floor.
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(self.units.iter().map(|unit| unit.status))
    }
}

/// A building and its floors, bottom floor first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Building {
    /// Building name.
    pub name: String,

    /// Floors, bottom first.
    #[serde(default)]
    pub floors: Vec<Floor>,
}

impl Building {
    /// All units in floor order.
    pub fn units(&self) -> impl Iterator<Item = &UnitGeometry> {
        self.floors.iter().flat_map(|floor| floor.units.iter())
    }

    /// Ids of every unit in the building.
    pub fn unit_ids(&self) -> Vec<UnitId> {
        self.units().map(|unit| unit.id).collect()
    }

    /// Status tallies across the building.
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(self.units().map(|unit| unit.status))
    }
}

/// Geometry document loading errors.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The file could not be read.
    #[error("failed to read geometry document: {0}")]
    Io(#[from] io::Error),

    /// The file is not a valid document.
    #[error("failed to parse geometry document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The whole geometry document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeometryDocument {
    /// Buildings, in landing page order.
    #[serde(default)]
    pub buildings: Vec<Building>,
}

impl GeometryDocument {
    /// Read and parse the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeometryError> {
        let contents = fs::read_to_string(path)?;

        Self::from_json(&contents)
    }

    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid document.
    pub fn from_json(json: &str) -> Result<Self, GeometryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The building at `index`, if any.
    pub fn building(&self, index: usize) -> Option<&Building> {
        self.buildings.get(index)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Integer(number) => number.to_string(),
        Raw::Float(number) => number.to_string(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use testresult::TestResult;

    use super::*;

    pub(crate) const SAMPLE_DOCUMENT: &str = r#"{
        "buildings": [
            {
                "name": "Tower A",
                "floors": [
                    {
                        "floor_number": 1,
                        "units": [
                            { "id": 1, "unit_number": "101", "status": "available" },
                            { "id": 2, "unit_number": "102", "status": "taken" }
                        ]
                    },
                    {
                        "floor_number": 2,
                        "units": [
                            { "id": 7, "unit_number": 201, "status": "available" },
                            { "id": 8, "unit_number": "202", "status": "reserved" }
                        ]
                    }
                ]
            },
            {
                "name": "Tower B",
                "floors": [
                    {
                        "floor_number": 1,
                        "units": [
                            { "id": 20, "unit_number": "B-101", "status": "taken" }
                        ]
                    }
                ]
            }
        ]
    }"#;

    pub(crate) fn sample_document() -> GeometryDocument {
        GeometryDocument::from_json(SAMPLE_DOCUMENT).unwrap_or_default()
    }

    #[test]
    fn parses_buildings_floors_and_units() -> TestResult {
        let document = GeometryDocument::from_json(SAMPLE_DOCUMENT)?;

        assert_eq!(document.buildings.len(), 2);

        let tower = document.building(0).ok_or("missing building")?;

        assert_eq!(tower.name, "Tower A");
        assert_eq!(tower.floors.len(), 2);
        assert_eq!(tower.unit_ids(), vec![UnitId(1), UnitId(2), UnitId(7), UnitId(8)]);

        Ok(())
    }

    #[test]
    fn numeric_unit_numbers_are_read_as_text() -> TestResult {
        let document = GeometryDocument::from_json(SAMPLE_DOCUMENT)?;
        let unit = document
            .building(0)
            .and_then(|building| building.units().find(|unit| unit.id == UnitId(7)))
            .ok_or("missing unit")?;

        assert_eq!(unit.unit_number, "201");

        Ok(())
    }

    #[test]
    fn counts_tally_each_status() {
        let document = sample_document();
        let counts = document.building(0).map(Building::counts).unwrap_or_default();

        assert_eq!(
            counts,
            StatusCounts {
                available: 2,
                taken: 1,
                reserved: 1
            }
        );
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = GeometryDocument::from_json(
            r#"{"buildings":[{"name":"X","floors":[{"floor_number":1,"units":[{"id":1,"unit_number":"1","status":"demolished"}]}]}]}"#,
        );

        assert!(matches!(result, Err(GeometryError::Parse(_))));
    }

    #[test]
    fn missing_building_is_none() {
        assert!(sample_document().building(9).is_none());
    }

    #[test]
    fn unit_id_parses_from_path_text() -> TestResult {
        assert_eq!(" 7 ".parse::<UnitId>()?, UnitId(7));
        assert!("seven".parse::<UnitId>().is_err());

        Ok(())
    }
}
