//! Unit Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    geometry::{UnitGeometry, UnitId, UnitStatus},
    units::{data::UnitDetailsUpdate, records::UnitDetailsRecord},
};

/// Layout of a unit, as offered by the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    /// Studio.
    #[serde(rename = "Studio")]
    Studio,

    /// One bedroom.
    #[serde(rename = "1-Bedroom")]
    OneBedroom,

    /// Two bedrooms.
    #[serde(rename = "2-Bedroom")]
    TwoBedroom,

    /// Two bedrooms and a den.
    #[serde(rename = "2-Bedroom + Den")]
    TwoBedroomDen,

    /// Penthouse.
    #[serde(rename = "Penthouse")]
    Penthouse,
}

impl UnitType {
    /// Every type, in the order the edit form lists them.
    pub const ALL: [Self; 5] = [
        Self::Studio,
        Self::OneBedroom,
        Self::TwoBedroom,
        Self::TwoBedroomDen,
        Self::Penthouse,
    ];

    /// Label as stored and displayed.
    pub fn label(self) -> &'static str {
        match self {
            Self::Studio => "Studio",
            Self::OneBedroom => "1-Bedroom",
            Self::TwoBedroom => "2-Bedroom",
            Self::TwoBedroomDen => "2-Bedroom + Den",
            Self::Penthouse => "Penthouse",
        }
    }

    /// Type for a stored label, ignoring surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();

        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl Display for UnitType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// A unit with its stored details merged over the geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Unit identifier.
    pub id: UnitId,

    /// Number shown on the diagram, e.g. `201`.
    pub unit_number: String,

    /// Occupancy status from the geometry document.
    pub status: UnitStatus,

    /// Owner name.
    pub owner: Option<String>,

    /// Monthly asking rent.
    pub rent_price: Option<u64>,

    /// Unit layout.
    pub unit_type: Option<UnitType>,

    /// Public photo URLs, in display order.
    pub photos: Vec<String>,

    /// Public video URL.
    pub video: Option<String>,

    /// At least one registration exists for this unit.
    pub has_tenant: bool,
}

impl Unit {
    /// Unit with geometry fields only and no details.
    pub fn from_geometry(geometry: &UnitGeometry) -> Self {
        Self {
            id: geometry.id,
            unit_number: geometry.unit_number.clone(),
            status: geometry.status,
            owner: None,
            rent_price: None,
            unit_type: None,
            photos: Vec::new(),
            video: None,
            has_tenant: false,
        }
    }

    /// Overlay stored details. A stored field wins only when it is present:
    /// non-null owner and rent, non-empty type, video and photo list.
    pub fn merge_details(&mut self, details: &UnitDetailsRecord) {
        if let Some(owner) = &details.owner {
            self.owner = Some(owner.clone());
        }

        if let Some(rent_price) = details.rent_price {
            self.rent_price = Some(rent_price);
        }

        if let Some(label) = details.unit_type.as_deref().filter(|label| !label.is_empty()) {
            match UnitType::from_label(label) {
                Some(kind) => self.unit_type = Some(kind),
                None => debug!("ignoring unknown unit type {label:?} for unit {}", self.id),
            }
        }

        if let Some(photos) = details.photos.as_ref().filter(|photos| !photos.is_empty()) {
            self.photos.clone_from(photos);
        }

        if let Some(video) = details.video.as_ref().filter(|video| !video.is_empty()) {
            self.video = Some(video.clone());
        }
    }

    /// Reflect a successful save.
    pub fn apply_update(&mut self, update: &UnitDetailsUpdate) {
        self.owner = Some(update.owner.clone());
        self.rent_price = update.rent_price;
        self.unit_type = Some(update.unit_type);
        self.photos.clone_from(&update.photos);
        self.video.clone_from(&update.video);
    }

    /// Asking rent as displayed, e.g. `₱2,500/mo`. Zero is treated as unset.
    pub fn rent_label(&self) -> Option<String> {
        self.rent_price
            .filter(|rent| *rent > 0)
            .map(|rent| format!("₱{}/mo", group_thousands(rent)))
    }

    /// Owner as displayed; blank owners are treated as unset.
    pub fn owner_label(&self) -> Option<&str> {
        self.owner.as_deref().filter(|owner| !owner.is_empty())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    grouped
}
