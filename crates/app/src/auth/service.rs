//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    auth::{AuthServiceError, AuthUser, Session, SignUpMetadata},
    backend::{AccessToken, BackendClient, BackendError},
};

/// [`AuthService`] over the hosted auth endpoints.
#[derive(Debug, Clone)]
pub struct BackendAuthService {
    client: BackendClient,
}

impl BackendAuthService {
    /// Auth service sharing `client`.
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for BackendAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthServiceError> {
        let payload = self
            .client
            .sign_in_with_password(email, password)
            .await
            .map_err(|error| match error {
                BackendError::Api { status: 400, .. } => AuthServiceError::InvalidCredentials,
                other => AuthServiceError::from(other),
            })?;

        Ok(Session {
            access_token: AccessToken::new(payload.access_token),
            user: payload.user.into(),
        })
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: SignUpMetadata,
    ) -> Result<Session, AuthServiceError> {
        let payload = self.client.sign_up(email, password, &metadata).await?;

        match (payload.access_token, payload.user) {
            (Some(token), Some(user)) => Ok(Session {
                access_token: AccessToken::new(token),
                user: user.into(),
            }),
            _ => {
                debug!("sign-up for {email} returned no session");

                Err(AuthServiceError::SessionUnavailable)
            }
        }
    }

    async fn sign_out(&self, token: &AccessToken) -> Result<(), AuthServiceError> {
        self.client.sign_out(token).await.map_err(Into::into)
    }

    async fn current_user(&self, token: &AccessToken) -> Result<AuthUser, AuthServiceError> {
        self.client
            .get_user(token)
            .await
            .map(Into::into)
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// Hosted authentication operations.
pub trait AuthService: Send + Sync {
    /// Sign in with an email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthServiceError>;

    /// Create an account and sign it in.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: SignUpMetadata,
    ) -> Result<Session, AuthServiceError>;

    /// End the session behind `token`.
    async fn sign_out(&self, token: &AccessToken) -> Result<(), AuthServiceError>;

    /// Resolve the user behind `token`.
    async fn current_user(&self, token: &AccessToken) -> Result<AuthUser, AuthServiceError>;
}
