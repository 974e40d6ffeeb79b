//! Backend connectivity check.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::{
    backend::BackendError,
    domain::units::{UnitsService, UnitsServiceError},
};

/// Outcome of a one-row read of the unit details table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum BackendStatus {
    /// The check succeeded.
    Connected,

    /// The backend answered with an error.
    Degraded(String),

    /// The backend could not be reached.
    Unreachable(String),

    /// No backend URL or key was configured.
    NotConfigured,
}

impl BackendStatus {
    /// Check `units`, or report [`Self::NotConfigured`] without one.
    pub async fn check(units: Option<&dyn UnitsService>) -> Self {
        let Some(units) = units else {
            return Self::NotConfigured;
        };

        match units.ping().await {
            Ok(()) => Self::Connected,
            Err(UnitsServiceError::Backend(BackendError::Http(source))) => {
                Self::Unreachable(source.to_string())
            }
            Err(UnitsServiceError::Backend(error)) => Self::Degraded(error.user_message()),
        }
    }

    /// Whether the last check succeeded.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    /// CSS modifier for the indicator.
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Connected => "ok",
            Self::NotConfigured => "warn",
            Self::Degraded(_) | Self::Unreachable(_) => "error",
        }
    }
}

impl Display for BackendStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Connected => f.write_str("✓ Backend connected"),
            Self::Degraded(message) => write!(f, "⚠ DB: {message}"),
            Self::Unreachable(message) => write!(f, "✗ Backend unreachable: {message}"),
            Self::NotConfigured => f.write_str("⚠ Backend not configured"),
        }
    }
}
