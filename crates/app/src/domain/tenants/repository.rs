//! Tenants Repository

use serde::Deserialize;

use crate::{
    backend::{AccessToken, BackendClient, BackendError, Order, Query},
    domain::{
        geometry::UnitId,
        mobile::Mobile,
        tenants::{
            data::NewTenant,
            records::{TenantId, TenantRecord},
        },
    },
};

const TABLE: &str = "tenants";

#[derive(Debug, Deserialize)]
struct UnitRef {
    unit_id: UnitId,
}

/// Backend-backed registrations repository.
#[derive(Debug, Clone)]
pub(crate) struct BackendTenantsRepository {
    client: BackendClient,
}

impl BackendTenantsRepository {
    #[must_use]
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub(crate) async fn list_tenants(
        &self,
        token: &AccessToken,
    ) -> Result<Vec<TenantRecord>, BackendError> {
        let query = Query::table(TABLE)
            .select("*")
            .order("created_at", Order::Ascending);

        self.client.select(&query, Some(token)).await
    }

    pub(crate) async fn find_registration(
        &self,
        mobile: &Mobile,
        unit: UnitId,
    ) -> Result<Option<TenantRecord>, BackendError> {
        let query = Query::table(TABLE)
            .select("*")
            .eq("mobile", mobile)
            .eq("unit_id", unit)
            .limit(1);

        let records: Vec<TenantRecord> = self.client.select(&query, None).await?;

        Ok(records.into_iter().next())
    }

    pub(crate) async fn registered_unit_ids(
        &self,
        units: &[UnitId],
    ) -> Result<Vec<UnitId>, BackendError> {
        let query = Query::table(TABLE)
            .select("unit_id")
            .in_list("unit_id", units.iter().copied());

        let rows: Vec<UnitRef> = self.client.select(&query, None).await?;

        Ok(rows.into_iter().map(|row| row.unit_id).collect())
    }

    pub(crate) async fn create_tenant(
        &self,
        token: &AccessToken,
        tenant: &NewTenant,
    ) -> Result<Option<TenantRecord>, BackendError> {
        let created: Vec<TenantRecord> = self.client.insert(TABLE, tenant, Some(token)).await?;

        Ok(created.into_iter().next())
    }

    pub(crate) async fn delete_tenant(
        &self,
        token: &AccessToken,
        id: TenantId,
    ) -> Result<(), BackendError> {
        self.client
            .delete(&Query::table(TABLE).eq("id", id), Some(token))
            .await
    }
}
