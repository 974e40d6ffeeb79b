//! Administrator gate.
//!
//! A single configured email is allowed into the roster page. This only
//! decides what the UI offers; the backend's access rules decide what the
//! administrator's token may actually read and write.

use thiserror::Error;
use tracing::warn;

use crate::{
    auth::{AuthService, AuthUser, Session},
    backend::AccessToken,
};

/// Why an administrator login was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminLoginError {
    /// Email or password left blank.
    #[error("Please enter email and password.")]
    MissingCredentials,

    /// The auth service rejected the credentials.
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// Signed in, but not as the administrator.
    #[error("This account does not have admin access.")]
    NotAdmin,
}

/// Decides which signed-in account may use the roster page.
#[derive(Debug, Clone)]
pub struct AdminGate {
    admin_email: String,
}

impl AdminGate {
    /// Gate for `admin_email`. An empty email admits nobody.
    pub fn new(admin_email: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
        }
    }

    /// Whether `user` is the configured administrator.
    pub fn is_admin(&self, user: &AuthUser) -> bool {
        !self.admin_email.is_empty()
            && user
                .email
                .as_deref()
                .is_some_and(|email| email.eq_ignore_ascii_case(&self.admin_email))
    }

    /// Sign in and keep the session only if it belongs to the administrator.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input, rejected credentials, or a
    /// non-administrator account (which is signed out again).
    pub async fn login(
        &self,
        auth: &dyn AuthService,
        email: &str,
        password: &str,
    ) -> Result<Session, AdminLoginError> {
        let email = email.trim();

        if email.is_empty() || password.is_empty() {
            return Err(AdminLoginError::MissingCredentials);
        }

        let session = auth
            .sign_in(email, password)
            .await
            .map_err(|_rejected| AdminLoginError::InvalidCredentials)?;

        if !self.is_admin(&session.user) {
            if let Err(error) = auth.sign_out(&session.access_token).await {
                warn!("failed to sign out non-admin session: {error}");
            }

            return Err(AdminLoginError::NotAdmin);
        }

        Ok(session)
    }

    /// Resolve an existing administrator session, if `token` still is one.
    pub async fn resume(&self, auth: &dyn AuthService, token: &AccessToken) -> Option<Session> {
        let user = auth.current_user(token).await.ok()?;

        self.is_admin(&user).then(|| Session {
            access_token: token.clone(),
            user,
        })
    }
}
