//! Edit form draft.

use crate::domain::{
    geometry::UnitId,
    units::{Unit, UnitType, data::UnitDetailsUpdate},
};

/// Saving with a blank owner.
pub const OWNER_REQUIRED: &str = "Owner name is required.";
/// Saving with a rent that is not a whole number.
pub const RENT_NOT_WHOLE: &str = "Rent must be a whole number.";

/// The edit form as last submitted. Uploads and failed saves round-trip it so
/// nothing typed is lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDraft {
    /// Owner name as typed.
    pub owner: String,

    /// Asking rent as typed.
    pub rent: String,

    /// Selected unit type.
    pub unit_type: UnitType,

    /// Photo URLs, including uploads not saved yet.
    pub photos: Vec<String>,

    /// Video URL, including an upload not saved yet.
    pub video: Option<String>,
}

impl UnitDraft {
    /// Start a draft from the unit's current details. Unset types start as
    /// the first option.
    pub fn from_unit(unit: &Unit) -> Self {
        Self {
            owner: unit.owner.clone().unwrap_or_default(),
            rent: unit
                .rent_price
                .filter(|rent| *rent > 0)
                .map(|rent| rent.to_string())
                .unwrap_or_default(),
            unit_type: unit.unit_type.unwrap_or(UnitType::Studio),
            photos: unit.photos.clone(),
            video: unit.video.clone(),
        }
    }

    /// Drop blank photo and video entries.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.photos = self
            .photos
            .into_iter()
            .map(|photo| photo.trim().to_string())
            .filter(|photo| !photo.is_empty())
            .collect();
        self.video = self
            .video
            .map(|video| video.trim().to_string())
            .filter(|video| !video.is_empty());

        self
    }

    /// Validate the draft into the row written on save.
    ///
    /// # Errors
    ///
    /// Returns the inline message for a blank owner or a rent that is not a
    /// whole number.
    pub fn validate(&self, unit_id: UnitId) -> Result<UnitDetailsUpdate, &'static str> {
        let owner = self.owner.trim();

        if owner.is_empty() {
            return Err(OWNER_REQUIRED);
        }

        let rent = self.rent.trim();
        let rent_price = if rent.is_empty() {
            None
        } else {
            Some(rent.parse::<u64>().map_err(|_invalid| RENT_NOT_WHOLE)?)
        };

        let draft = self.clone().normalized();

        Ok(UnitDetailsUpdate {
            unit_id,
            owner: owner.to_string(),
            rent_price,
            unit_type: self.unit_type,
            photos: draft.photos,
            video: draft.video,
        })
    }
}
