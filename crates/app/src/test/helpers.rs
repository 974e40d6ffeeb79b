//! Test Helpers

use jiff::Timestamp;
use uuid::Uuid;

use crate::{
    auth::{AuthUser, Session},
    backend::AccessToken,
    domain::{
        geometry::UnitId,
        tenants::records::{TenantId, TenantRecord},
    },
};

pub(crate) const TENANT_TOKEN: &str = "tenant-jwt";

pub(crate) fn tenant_record(n: u128, mobile: &str, unit: i64) -> TenantRecord {
    TenantRecord {
        id: TenantId(Uuid::from_u128(n)),
        mobile: mobile.to_string(),
        unit_id: UnitId(unit),
        created_at: "2024-05-01T10:00:00Z"
            .parse::<Timestamp>()
            .unwrap_or(Timestamp::UNIX_EPOCH),
    }
}

pub(crate) fn tenant_user(unit: i64) -> AuthUser {
    AuthUser {
        id: Uuid::from_u128(0xA11CE),
        email: Some("5015551001@tenant.bw".to_string()),
        unit_id: Some(UnitId(unit)),
        mobile: Some("5015551001".to_string()),
    }
}

pub(crate) fn tenant_session(unit: i64) -> Session {
    Session {
        access_token: AccessToken::new(TENANT_TOKEN),
        user: tenant_user(unit),
    }
}
