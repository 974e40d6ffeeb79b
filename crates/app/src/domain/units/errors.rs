//! Units service errors.

use thiserror::Error;

use crate::backend::BackendError;

/// Units service error variants.
#[derive(Debug, Error)]
pub enum UnitsServiceError {
    /// Transport or backend failure.
    #[error("backend error")]
    Backend(#[from] BackendError),
}

impl UnitsServiceError {
    /// Message suitable for showing inline next to a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend(source) => source.user_message(),
        }
    }
}
