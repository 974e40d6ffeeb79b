//! Profiles service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashSet;

use crate::{
    backend::{AccessToken, BackendClient},
    domain::{
        mobile::Mobile,
        profiles::{errors::ProfilesServiceError, repository::BackendProfilesRepository},
    },
};

/// [`ProfilesService`] over the `profiles` table.
#[derive(Debug, Clone)]
pub struct BackendProfilesService {
    repository: BackendProfilesRepository,
}

impl BackendProfilesService {
    /// Profiles service sharing `client`.
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self {
            repository: BackendProfilesRepository::new(client),
        }
    }
}

#[async_trait]
impl ProfilesService for BackendProfilesService {
    async fn has_account(&self, mobile: &Mobile) -> Result<bool, ProfilesServiceError> {
        Ok(self.repository.count_by_mobile(mobile).await? > 0)
    }

    async fn account_mobiles(
        &self,
        token: &AccessToken,
    ) -> Result<FxHashSet<Mobile>, ProfilesServiceError> {
        let mobiles = self.repository.mobiles(token).await?;

        Ok(mobiles
            .iter()
            .map(|mobile| Mobile::normalize(mobile))
            .collect())
    }
}

/// Account existence lookups.
#[automock]
#[async_trait]
pub trait ProfilesService: Send + Sync {
    /// Whether an account has already been created for `mobile`.
    async fn has_account(&self, mobile: &Mobile) -> Result<bool, ProfilesServiceError>;

    /// Mobiles of every created account.
    async fn account_mobiles(
        &self,
        token: &AccessToken,
    ) -> Result<FxHashSet<Mobile>, ProfilesServiceError>;
}
