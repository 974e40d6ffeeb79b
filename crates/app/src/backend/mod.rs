//! Backend-as-a-service client.
//!
//! Thin HTTP client for the hosted auth (`auth/v1`), REST data
//! (`rest/v1`) and object storage (`storage/v1`) endpoints.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use zeroize::Zeroizing;

pub mod auth;
pub mod rest;
pub mod storage;

pub use rest::{Order, Query};

/// Postgres error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Configuration for connecting to the backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project base URL, e.g. `"https://project.example.co"`.
    pub url: String,

    /// Public (anonymous) API key.
    pub anon_key: String,
}

/// Bearer token for a signed-in user.
#[derive(Clone)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Wrap a raw bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    /// The raw token, for headers and cookies.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("AccessToken(***)")
    }
}

impl PartialEq for AccessToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for AccessToken {}

/// HTTP client for the backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendConfig,
    http: Client,
}

impl BackendClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build a request authenticated as `token`, or anonymously.
    fn request(&self, method: Method, path: &str, token: Option<&AccessToken>) -> RequestBuilder {
        let bearer = token.map_or(self.config.anon_key.as_str(), AccessToken::expose);

        self.http
            .request(method, self.endpoint(path))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(bearer)
    }

    async fn send(request: RequestBuilder) -> Result<Response, BackendError> {
        let response = request.send().await?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        Err(BackendError::from_response(status, &text))
    }
}

/// Errors that can occur when communicating with the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx response.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,

        /// Backend error code, e.g. `23505`.
        code: Option<String>,

        /// Backend-provided message.
        message: String,
    },
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<Value>,
    error_code: Option<String>,
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl BackendError {
    /// Build an error from a failed response's status and body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

        let code = parsed.error_code.or_else(|| match parsed.code {
            Some(Value::String(code)) => Some(code),
            Some(Value::Number(code)) => Some(code.to_string()),
            _ => None,
        });

        let message = parsed
            .message
            .or(parsed.msg)
            .or(parsed.error_description)
            .or(parsed.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("request failed with status {status}")
                } else {
                    body.trim().to_string()
                }
            });

        Self::Api {
            status,
            code,
            message,
        }
    }

    /// HTTP status, when the request got a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(source) => source.status().map(|status| status.as_u16()),
            Self::Api { status, .. } => Some(*status),
        }
    }

    /// Backend error code, when one was reported.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Http(_) => None,
            Self::Api { code, .. } => code.as_deref(),
        }
    }

    /// Message suitable for showing inline next to a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(source) => format!("Backend unreachable: {source}"),
            Self::Api { message, .. } => message.clone(),
        }
    }

    /// Whether a uniqueness constraint rejected the write.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Http(_) => false,
            Self::Api { code, message, .. } => {
                code.as_deref() == Some(UNIQUE_VIOLATION)
                    || message.contains("unique")
                    || message.contains("duplicate")
            }
        }
    }

    /// Whether the token was missing, expired or not allowed.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
