//! Unit Detail Records

use jiff::Timestamp;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::geometry::UnitId;

/// A `unit_details` row. Every column but the key may be null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UnitDetailsRecord {
    /// Unit the details belong to
    pub unit_id: UnitId,

    /// Owner name
    #[serde(default)]
    pub owner: Option<String>,

    /// Monthly asking rent, `None` unless stored as a whole, non-negative number
    #[serde(default, deserialize_with = "whole_rent")]
    pub rent_price: Option<u64>,

    /// Unit type label
    #[serde(default)]
    pub unit_type: Option<String>,

    /// Public photo URLs, in display order
    #[serde(default)]
    pub photos: Option<Vec<String>>,

    /// Public video URL
    #[serde(default)]
    pub video: Option<String>,

    /// Last save
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// Other writers may store fractional or negative rents; such a value is
/// dropped instead of failing the whole batch.
fn whole_rent<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value.as_ref().and_then(Value::as_number).and_then(|number| {
        number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|rent| rent.is_finite() && *rent >= 0.0 && rent.fract() == 0.0)
                .and_then(|rent| format!("{rent:.0}").parse().ok())
        })
    }))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_sparse_row() -> TestResult {
        let record: UnitDetailsRecord = serde_json::from_str(
            r#"{"unit_id":7,"owner":null,"rent_price":null,"unit_type":"","photos":null,"video":null,"updated_at":null}"#,
        )?;

        assert_eq!(record.unit_id, UnitId(7));
        assert_eq!(record.owner, None);
        assert_eq!(record.unit_type.as_deref(), Some(""));
        assert_eq!(record.photos, None);

        Ok(())
    }

    #[test]
    fn odd_rents_do_not_fail_the_batch() -> TestResult {
        let records: Vec<UnitDetailsRecord> = serde_json::from_str(
            r#"[
                {"unit_id":7,"rent_price":2500},
                {"unit_id":8,"rent_price":1999.5},
                {"unit_id":9,"rent_price":-5},
                {"unit_id":10,"rent_price":3000.0},
                {"unit_id":11,"rent_price":"cheap"},
                {"unit_id":12}
            ]"#,
        )?;

        let rents: Vec<_> = records.iter().map(|record| record.rent_price).collect();

        assert_eq!(
            rents,
            vec![Some(2500), None, None, Some(3000), None, None],
            "only whole, non-negative rents survive"
        );

        Ok(())
    }
}
