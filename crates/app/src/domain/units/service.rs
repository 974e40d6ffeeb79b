//! Units service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    backend::{AccessToken, BackendClient},
    domain::{
        geometry::UnitId,
        units::{
            data::UnitDetailsUpdate, errors::UnitsServiceError, records::UnitDetailsRecord,
            repository::BackendUnitsRepository,
        },
    },
};

/// [`UnitsService`] over the `unit_details` table.
#[derive(Debug, Clone)]
pub struct BackendUnitsService {
    repository: BackendUnitsRepository,
}

impl BackendUnitsService {
    /// Units service sharing `client`.
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self {
            repository: BackendUnitsRepository::new(client),
        }
    }
}

#[async_trait]
impl UnitsService for BackendUnitsService {
    async fn details_for(
        &self,
        units: &[UnitId],
    ) -> Result<Vec<UnitDetailsRecord>, UnitsServiceError> {
        if units.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self.repository.details_for(units).await?)
    }

    async fn save_details(
        &self,
        token: &AccessToken,
        update: UnitDetailsUpdate,
    ) -> Result<(), UnitsServiceError> {
        Ok(self.repository.upsert_details(token, &update).await?)
    }

    async fn ping(&self) -> Result<(), UnitsServiceError> {
        Ok(self.repository.ping().await?)
    }
}

#[automock]
#[async_trait]
/// Unit detail persistence.
pub trait UnitsService: Send + Sync {
    /// Stored details for any of `units` that have them.
    async fn details_for(
        &self,
        units: &[UnitId],
    ) -> Result<Vec<UnitDetailsRecord>, UnitsServiceError>;

    /// Insert or replace the details of one unit, keyed by unit id.
    async fn save_details(
        &self,
        token: &AccessToken,
        update: UnitDetailsUpdate,
    ) -> Result<(), UnitsServiceError>;

    /// One-row read used to report backend connectivity.
    async fn ping(&self) -> Result<(), UnitsServiceError>;
}
