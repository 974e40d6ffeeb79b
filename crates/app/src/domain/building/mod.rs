//! Building Directory
//!
//! Landing cards and floor diagrams. Both are pure functions of the geometry
//! document and, for diagrams, the detail/registration overlay.

use crate::domain::{
    geometry::{Building, GeometryDocument, StatusCounts},
    units::{Unit, UnitOverlay},
};

/// Message shown when a building index does not resolve.
pub const BUILDING_NOT_FOUND: &str = "Building not found.";

/// Landing page card for one building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingCard {
    /// Position in the document, used in the building URL.
    pub index: usize,

    /// Building name.
    pub name: String,

    /// Number of floors.
    pub floors: usize,

    /// Number of units.
    pub units: usize,

    /// Building-wide status tallies.
    pub counts: StatusCounts,
}

impl BuildingCard {
    /// e.g. `12 Floors · 96 Units`.
    pub fn subtitle(&self) -> String {
        format!("{} Floors · {} Units", self.floors, self.units)
    }
}

/// One card per building, in document order.
pub fn landing_cards(document: &GeometryDocument) -> Vec<BuildingCard> {
    document
        .buildings
        .iter()
        .enumerate()
        .map(|(index, building)| {
            let counts = building.counts();

            BuildingCard {
                index,
                name: building.name.clone(),
                floors: building.floors.len(),
                units: counts.total(),
                counts,
            }
        })
        .collect()
}

/// One floor of a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorRow {
    /// Floor number.
    pub floor_number: i32,

    /// Status tallies for this floor.
    pub counts: StatusCounts,

    /// Units with their overlay merged in.
    pub units: Vec<Unit>,
}

impl FloorRow {
    /// Floor label, e.g. `F3`.
    pub fn label(&self) -> String {
        format!("F{}", self.floor_number)
    }
}

/// A building's floors, top floor first, with per-floor and building-wide
/// tallies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingDiagram {
    /// Position in the document.
    pub index: usize,

    /// Building name, shown as the rooftop label.
    pub name: String,

    /// Building-wide status tallies, for the legend.
    pub counts: StatusCounts,

    /// Floors, top first.
    pub floors: Vec<FloorRow>,
}

impl BuildingDiagram {
    /// Diagram of `building` with `overlay` merged into its units.
    pub fn build(index: usize, building: &Building, overlay: &UnitOverlay) -> Self {
        let floors = building
            .floors
            .iter()
            .rev()
            .map(|floor| FloorRow {
                floor_number: floor.floor_number,
                counts: floor.counts(),
                units: floor.units.iter().map(|unit| overlay.unit(unit)).collect(),
            })
            .collect();

        Self {
            index,
            name: building.name.clone(),
            counts: building.counts(),
            floors,
        }
    }
}

/// Hover text for a unit cell, e.g. `Unit 201 — available`.
pub fn unit_tooltip(unit: &Unit) -> String {
    format!("Unit {} — {}", unit.unit_number, unit.status)
}
