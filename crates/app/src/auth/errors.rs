//! Auth service errors.

use thiserror::Error;

use crate::backend::BackendError;

/// Auth service error variants.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Email and password did not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The access token is expired or unknown.
    #[error("session expired or invalid")]
    Unauthorized,

    /// Sign-up succeeded but returned no session.
    #[error("account created without a session")]
    SessionUnavailable,

    /// Request refused by the auth service, with its message.
    #[error("{0}")]
    Rejected(String),

    /// Transport or unexpected backend failure.
    #[error("backend error")]
    Backend(#[source] BackendError),
}

impl AuthServiceError {
    /// Message suitable for showing inline next to a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid login credentials".to_string(),
            Self::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            Self::SessionUnavailable => {
                "Account created, but no session was issued. Please log in.".to_string()
            }
            Self::Rejected(message) => message.clone(),
            Self::Backend(source) => source.user_message(),
        }
    }
}

impl From<BackendError> for AuthServiceError {
    fn from(error: BackendError) -> Self {
        if error.is_unauthorized() {
            return Self::Unauthorized;
        }

        match &error {
            BackendError::Api {
                status, message, ..
            } if (400..500).contains(status) => Self::Rejected(message.clone()),
            BackendError::Api { .. } | BackendError::Http(_) => Self::Backend(error),
        }
    }
}
