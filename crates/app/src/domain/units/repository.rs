//! Unit Details Repository

use jiff::Timestamp;
use serde::Serialize;

use crate::{
    backend::{AccessToken, BackendClient, BackendError, Query},
    domain::{
        geometry::UnitId,
        units::{data::UnitDetailsUpdate, records::UnitDetailsRecord},
    },
};

const TABLE: &str = "unit_details";

#[derive(Debug, Serialize)]
struct UnitDetailsRow<'a> {
    #[serde(flatten)]
    update: &'a UnitDetailsUpdate,

    updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub(crate) struct BackendUnitsRepository {
    client: BackendClient,
}

impl BackendUnitsRepository {
    #[must_use]
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub(crate) async fn details_for(
        &self,
        units: &[UnitId],
    ) -> Result<Vec<UnitDetailsRecord>, BackendError> {
        let query = Query::table(TABLE)
            .select("*")
            .in_list("unit_id", units.iter().copied());

        self.client.select(&query, None).await
    }

    pub(crate) async fn upsert_details(
        &self,
        token: &AccessToken,
        update: &UnitDetailsUpdate,
    ) -> Result<(), BackendError> {
        let row = UnitDetailsRow {
            update,
            updated_at: Timestamp::now(),
        };

        self.client
            .upsert(&Query::table(TABLE).on_conflict("unit_id"), &row, Some(token))
            .await
    }

    pub(crate) async fn ping(&self) -> Result<(), BackendError> {
        let query = Query::table(TABLE).select("unit_id").limit(1);

        let _rows: Vec<serde_json::Value> = self.client.select(&query, None).await?;

        Ok(())
    }
}
