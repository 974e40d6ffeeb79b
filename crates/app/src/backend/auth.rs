//! Hosted auth endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::backend::{AccessToken, BackendClient, BackendError};

/// User object as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserPayload {
    /// User id.
    pub id: Uuid,

    /// Login email.
    #[serde(default)]
    pub email: Option<String>,

    /// Arbitrary metadata supplied at sign-up.
    #[serde(default)]
    pub user_metadata: Value,
}

/// A token grant returned by sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionPayload {
    /// Bearer token.
    pub access_token: String,

    /// Signed-in user.
    pub user: UserPayload,
}

/// Sign-up response; the session is absent when email confirmation is
/// required by the project.
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpPayload {
    /// Bearer token, when a session was started.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Created user, when a session was started.
    #[serde(default)]
    pub user: Option<UserPayload>,
}

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

impl BackendClient {
    /// Exchange an email and password for a session.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or rejected credentials.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionPayload, BackendError> {
        let request = self
            .request(Method::POST, "auth/v1/token", None)
            .query(&[("grant_type", "password")])
            .json(&PasswordGrant { email, password });

        Ok(Self::send(request).await?.json().await?)
    }

    /// Create an account carrying `data` as user metadata.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or when the account is rejected.
    pub async fn sign_up<D>(
        &self,
        email: &str,
        password: &str,
        data: &D,
    ) -> Result<SignUpPayload, BackendError>
    where
        D: Serialize + ?Sized,
    {
        let body = json!({
            "email": email,
            "password": password,
            "data": data,
        });

        let request = self
            .request(Method::POST, "auth/v1/signup", None)
            .json(&body);

        Ok(Self::send(request).await?.json().await?)
    }

    /// Revoke the session behind `token`.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure.
    pub async fn sign_out(&self, token: &AccessToken) -> Result<(), BackendError> {
        let request = self.request(Method::POST, "auth/v1/logout", Some(token));

        Self::send(request).await?;

        Ok(())
    }

    /// Look up the user behind `token`.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an expired/invalid token.
    pub async fn get_user(&self, token: &AccessToken) -> Result<UserPayload, BackendError> {
        let request = self.request(Method::GET, "auth/v1/user", Some(token));

        Ok(Self::send(request).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn sign_up_without_session_parses() -> TestResult {
        let payload: SignUpPayload = serde_json::from_str(
            r#"{"user":{"id":"00000000-0000-0000-0000-000000000001","email":"5015551001@tenant.bw","user_metadata":{"unit_id":7}}}"#,
        )?;

        assert!(payload.access_token.is_none());
        assert_eq!(
            payload.user.and_then(|user| user.email),
            Some("5015551001@tenant.bw".to_string())
        );

        Ok(())
    }

    #[test]
    fn session_payload_parses_user_metadata() -> TestResult {
        let payload: SessionPayload = serde_json::from_str(
            r#"{"access_token":"jwt","token_type":"bearer","expires_in":3600,"user":{"id":"00000000-0000-0000-0000-000000000001","user_metadata":{"unit_id":"7","mobile":"5015551001"}}}"#,
        )?;

        assert_eq!(payload.access_token, "jwt");
        assert_eq!(payload.user.email, None);
        assert_eq!(payload.user.user_metadata["mobile"], "5015551001");

        Ok(())
    }
}
