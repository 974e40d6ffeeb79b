//! Flattened Unit Index

use rustc_hash::FxHashMap;

use crate::domain::geometry::{GeometryDocument, UnitGeometry, UnitId};

/// A unit together with where it sits in the geometry document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedUnit {
    /// The unit as listed in the document.
    pub unit: UnitGeometry,

    /// Position of its building in the document.
    pub building_index: usize,

    /// Name of its building.
    pub building_name: String,

    /// Floor it is on.
    pub floor_number: i32,
}

impl IndexedUnit {
    /// Roster label, e.g. `Tower A F2 — Unit 201`.
    pub fn label(&self) -> String {
        format!(
            "{} F{} — Unit {}",
            self.building_name, self.floor_number, self.unit.unit_number
        )
    }

    /// Unit picker label, e.g. `Tower A — F2 — Unit 201`.
    pub fn option_label(&self) -> String {
        format!(
            "{} — F{} — Unit {}",
            self.building_name, self.floor_number, self.unit.unit_number
        )
    }
}

/// Every unit of every building, in document order, addressable by id.
///
/// Built once from the geometry document at start-up.
#[derive(Debug, Clone, Default)]
pub struct UnitIndex {
    units: Vec<IndexedUnit>,
    positions: FxHashMap<UnitId, usize>,
}

impl UnitIndex {
    /// Index every unit of `document`, in document order.
    pub fn build(document: &GeometryDocument) -> Self {
        let units: Vec<IndexedUnit> = document
            .buildings
            .iter()
            .enumerate()
            .flat_map(|(building_index, building)| {
                building.floors.iter().flat_map(move |floor| {
                    floor.units.iter().map(move |unit| IndexedUnit {
                        unit: unit.clone(),
                        building_index,
                        building_name: building.name.clone(),
                        floor_number: floor.floor_number,
                    })
                })
            })
            .collect();

        // First occurrence wins when the document repeats an id.
        let mut positions = FxHashMap::default();

        for (position, indexed) in units.iter().enumerate() {
            positions.entry(indexed.unit.id).or_insert(position);
        }

        Self { units, positions }
    }

    /// The unit with `id`, if the document has it.
    pub fn get(&self, id: UnitId) -> Option<&IndexedUnit> {
        self.positions
            .get(&id)
            .and_then(|position| self.units.get(*position))
    }

    /// Units in document order.
    pub fn iter(&self) -> impl Iterator<Item = &IndexedUnit> {
        self.units.iter()
    }

    /// Number of indexed units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the document has no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
