//! Profiles service errors.

use thiserror::Error;

use crate::backend::BackendError;

/// Profiles service error variants.
#[derive(Debug, Error)]
pub enum ProfilesServiceError {
    /// Transport or backend failure.
    #[error("backend error")]
    Backend(#[from] BackendError),
}

impl ProfilesServiceError {
    /// Message suitable for showing inline next to a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend(source) => source.user_message(),
        }
    }
}
