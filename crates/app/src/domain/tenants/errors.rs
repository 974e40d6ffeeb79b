//! Tenants service errors.

use thiserror::Error;

use crate::backend::BackendError;

/// Tenant service error variants.
#[derive(Debug, Error)]
pub enum TenantsServiceError {
    /// The mobile number is already registered for that unit.
    #[error("registration already exists")]
    AlreadyExists,

    /// Registration was not found.
    #[error("registration not found")]
    NotFound,

    /// Underlying backend error.
    #[error("backend error")]
    Backend(#[source] BackendError),
}

impl TenantsServiceError {
    /// Message suitable for showing inline next to a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::AlreadyExists => "This mobile number is already registered.".to_string(),
            Self::NotFound => "Registration not found.".to_string(),
            Self::Backend(source) => source.user_message(),
        }
    }
}

impl From<BackendError> for TenantsServiceError {
    fn from(error: BackendError) -> Self {
        if error.is_unique_violation() {
            return Self::AlreadyExists;
        }

        Self::Backend(error)
    }
}
