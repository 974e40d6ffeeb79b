//! App Context

use std::sync::Arc;

use reqwest::Url;
use thiserror::Error;

use crate::{
    auth::{AuthService, BackendAuthService},
    backend::{BackendClient, BackendConfig},
    domain::{
        geometry::UnitIndex,
        media::{BackendMediaService, MediaBuckets, MediaService},
        modal::UnitModal,
        profiles::{BackendProfilesService, ProfilesService},
        roster::Roster,
        tenants::{BackendTenantsService, TenantsService},
        units::{BackendUnitsService, UnitsService},
    },
};

/// Failure building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The backend URL does not parse.
    #[error("invalid backend url {url:?}: {reason}")]
    InvalidBackendUrl {
        /// The configured URL.
        url: String,

        /// Why it does not parse.
        reason: String,
    },

    /// The public API key is blank.
    #[error("backend anon key is empty")]
    MissingAnonKey,
}

/// Every backend-backed service, sharing one HTTP client.
#[derive(Clone)]
pub struct AppContext {
    /// Hosted authentication.
    pub auth: Arc<dyn AuthService>,

    /// Tenant registrations.
    pub tenants: Arc<dyn TenantsService>,

    /// Account profiles.
    pub profiles: Arc<dyn ProfilesService>,

    /// Unit details.
    pub units: Arc<dyn UnitsService>,

    /// Photo and video storage.
    pub media: Arc<dyn MediaService>,
}

impl AppContext {
    /// Build application context for the backend at `config.url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL does not parse or the key is empty.
    pub fn from_backend(config: BackendConfig, buckets: MediaBuckets) -> Result<Self, AppInitError> {
        if let Err(error) = Url::parse(&config.url) {
            return Err(AppInitError::InvalidBackendUrl {
                url: config.url,
                reason: error.to_string(),
            });
        }

        if config.anon_key.trim().is_empty() {
            return Err(AppInitError::MissingAnonKey);
        }

        let client = BackendClient::new(config);

        Ok(Self {
            auth: Arc::new(BackendAuthService::new(client.clone())),
            tenants: Arc::new(BackendTenantsService::new(client.clone())),
            profiles: Arc::new(BackendProfilesService::new(client.clone())),
            units: Arc::new(BackendUnitsService::new(client.clone())),
            media: Arc::new(BackendMediaService::new(client, buckets)),
        })
    }

    /// Unit modal flow over these services.
    pub fn modal(&self, index: Arc<UnitIndex>) -> UnitModal {
        UnitModal::new(
            index,
            Arc::clone(&self.auth),
            Arc::clone(&self.tenants),
            Arc::clone(&self.profiles),
            Arc::clone(&self.units),
            Arc::clone(&self.media),
        )
    }

    /// Admin roster over these services.
    pub fn roster(&self, index: Arc<UnitIndex>) -> Roster {
        Roster::new(index, Arc::clone(&self.tenants), Arc::clone(&self.profiles))
    }
}
