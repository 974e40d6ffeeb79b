//! Unit Detail Data

use serde::Serialize;

use crate::domain::{geometry::UnitId, units::models::UnitType};

/// Everything the edit form writes for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitDetailsUpdate {
    /// Upsert key.
    pub unit_id: UnitId,

    /// Owner name, trimmed and non-empty.
    pub owner: String,

    /// Monthly asking rent.
    pub rent_price: Option<u64>,

    /// Unit layout.
    pub unit_type: UnitType,

    /// Public photo URLs, in display order.
    pub photos: Vec<String>,

    /// Public video URL.
    pub video: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn serializes_as_store_columns() -> TestResult {
        let update = UnitDetailsUpdate {
            unit_id: UnitId(7),
            owner: "Jane Doe".to_string(),
            rent_price: Some(2500),
            unit_type: UnitType::Studio,
            photos: Vec::new(),
            video: None,
        };

        assert_eq!(
            serde_json::to_value(&update)?,
            json!({
                "unit_id": 7,
                "owner": "Jane Doe",
                "rent_price": 2500,
                "unit_type": "Studio",
                "photos": [],
                "video": null,
            })
        );

        Ok(())
    }
}
