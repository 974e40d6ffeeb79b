//! Auth data models.

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    backend::{AccessToken, auth::UserPayload},
    domain::{geometry::UnitId, mobile::Mobile},
};

/// An authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Auth service user id.
    pub id: Uuid,

    /// Login email, synthetic for tenants.
    pub email: Option<String>,

    /// Unit this account was created for, from the user metadata.
    pub unit_id: Option<UnitId>,

    /// Normalized mobile from the user metadata.
    pub mobile: Option<String>,
}

impl From<UserPayload> for AuthUser {
    fn from(payload: UserPayload) -> Self {
        let unit_id = match payload.user_metadata.get("unit_id") {
            Some(Value::Number(number)) => number.as_i64().map(UnitId),
            Some(Value::String(text)) => text.parse().ok(),
            _ => None,
        };

        let mobile = payload
            .user_metadata
            .get("mobile")
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            id: payload.id,
            email: payload.email,
            unit_id,
            mobile,
        }
    }
}

/// A signed-in user and the token proving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token for backend calls.
    pub access_token: AccessToken,

    /// The user behind the token.
    pub user: AuthUser,
}

impl Session {
    /// A session may edit a unit only when its embedded unit id matches.
    pub fn can_edit(&self, unit: UnitId) -> bool {
        self.user.unit_id == Some(unit)
    }
}

/// Metadata attached to a tenant account at sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpMetadata {
    /// Unit the account may edit.
    pub unit_id: UnitId,

    /// Registered mobile number.
    pub mobile: Mobile,
}
