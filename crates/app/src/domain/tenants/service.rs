//! Tenants service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashSet;

use crate::{
    backend::{AccessToken, BackendClient},
    domain::{
        geometry::UnitId,
        mobile::Mobile,
        tenants::{
            data::NewTenant,
            errors::TenantsServiceError,
            records::{TenantId, TenantRecord},
            repository::BackendTenantsRepository,
        },
    },
};

/// [`TenantsService`] over the `tenants` table.
#[derive(Debug, Clone)]
pub struct BackendTenantsService {
    repository: BackendTenantsRepository,
}

impl BackendTenantsService {
    /// Tenants service sharing `client`.
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self {
            repository: BackendTenantsRepository::new(client),
        }
    }
}

#[async_trait]
impl TenantsService for BackendTenantsService {
    async fn list_tenants(
        &self,
        token: &AccessToken,
    ) -> Result<Vec<TenantRecord>, TenantsServiceError> {
        self.repository
            .list_tenants(token)
            .await
            .map_err(Into::into)
    }

    async fn find_registration(
        &self,
        mobile: &Mobile,
        unit: UnitId,
    ) -> Result<Option<TenantRecord>, TenantsServiceError> {
        self.repository
            .find_registration(mobile, unit)
            .await
            .map_err(Into::into)
    }

    async fn registered_units(
        &self,
        units: &[UnitId],
    ) -> Result<FxHashSet<UnitId>, TenantsServiceError> {
        if units.is_empty() {
            return Ok(FxHashSet::default());
        }

        let ids = self.repository.registered_unit_ids(units).await?;

        Ok(ids.into_iter().collect())
    }

    async fn create_tenant(
        &self,
        token: &AccessToken,
        tenant: NewTenant,
    ) -> Result<TenantRecord, TenantsServiceError> {
        self.repository
            .create_tenant(token, &tenant)
            .await?
            .ok_or(TenantsServiceError::NotFound)
    }

    async fn delete_tenant(
        &self,
        token: &AccessToken,
        id: TenantId,
    ) -> Result<(), TenantsServiceError> {
        self.repository
            .delete_tenant(token, id)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// Registration persistence operations.
pub trait TenantsService: Send + Sync {
    /// Lists every registration, oldest first.
    async fn list_tenants(
        &self,
        token: &AccessToken,
    ) -> Result<Vec<TenantRecord>, TenantsServiceError>;

    /// Finds the registration binding `mobile` to `unit`, if any.
    async fn find_registration(
        &self,
        mobile: &Mobile,
        unit: UnitId,
    ) -> Result<Option<TenantRecord>, TenantsServiceError>;

    /// Which of `units` have at least one registration.
    async fn registered_units(
        &self,
        units: &[UnitId],
    ) -> Result<FxHashSet<UnitId>, TenantsServiceError>;

    /// Creates a registration.
    async fn create_tenant(
        &self,
        token: &AccessToken,
        tenant: NewTenant,
    ) -> Result<TenantRecord, TenantsServiceError>;

    /// Deletes a registration. Accounts are left untouched.
    async fn delete_tenant(&self, token: &AccessToken, id: TenantId)
    -> Result<(), TenantsServiceError>;
}
