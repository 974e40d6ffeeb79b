//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use bayport_app::{
    auth::{AdminGate, AuthUser, MockAuthService, Session},
    backend::AccessToken,
    context::AppContext,
    domain::{
        geometry::{GeometryDocument, UnitId},
        media::MockMediaService,
        profiles::MockProfilesService,
        tenants::{
            MockTenantsService,
            records::{TenantId, TenantRecord},
        },
        units::MockUnitsService,
    },
};

use crate::{router::app_router, state::State};

pub(crate) const SAMPLE_GEOMETRY: &str = r#"{
    "buildings": [
        {
            "name": "Tower A",
            "floors": [
                {
                    "floor_number": 1,
                    "units": [
                        { "id": 1, "unit_number": "101", "status": "available" },
                        { "id": 2, "unit_number": "102", "status": "taken" }
                    ]
                },
                {
                    "floor_number": 2,
                    "units": [
                        { "id": 7, "unit_number": "201", "status": "available" },
                        { "id": 8, "unit_number": "202", "status": "reserved" }
                    ]
                }
            ]
        },
        {
            "name": "Tower B",
            "floors": [
                {
                    "floor_number": 1,
                    "units": [
                        { "id": 20, "unit_number": "B-101", "status": "taken" }
                    ]
                }
            ]
        }
    ]
}"#;

pub(crate) const ADMIN_EMAIL: &str = "admin@example.com";
pub(crate) const TENANT_TOKEN: &str = "tenant-jwt";
pub(crate) const ADMIN_TOKEN: &str = "admin-jwt";

fn geometry() -> GeometryDocument {
    GeometryDocument::from_json(SAMPLE_GEOMETRY).unwrap_or_default()
}

/// Mocked backend services. Calls without a matching expectation panic.
pub(crate) struct Mocks {
    pub(crate) auth: MockAuthService,
    pub(crate) tenants: MockTenantsService,
    pub(crate) profiles: MockProfilesService,
    pub(crate) units: MockUnitsService,
    pub(crate) media: MockMediaService,
}

impl Mocks {
    pub(crate) fn new() -> Self {
        Self {
            auth: MockAuthService::new(),
            tenants: MockTenantsService::new(),
            profiles: MockProfilesService::new(),
            units: MockUnitsService::new(),
            media: MockMediaService::new(),
        }
    }

    /// Answer overlay lookups with no details and `registered` units.
    pub(crate) fn with_registrations(mut self, registered: &[i64]) -> Self {
        let registered: Vec<UnitId> = registered.iter().copied().map(UnitId).collect();

        self.units
            .expect_details_for()
            .returning(|_| Ok(Vec::new()));
        self.tenants
            .expect_registered_units()
            .returning(move |_| Ok(registered.iter().copied().collect()));

        self
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        let app = AppContext {
            auth: Arc::new(self.auth),
            tenants: Arc::new(self.tenants),
            profiles: Arc::new(self.profiles),
            units: Arc::new(self.units),
            media: Arc::new(self.media),
        };

        State::new("Bayport West", geometry(), AdminGate::new(ADMIN_EMAIL), Some(app))
            .into_shared()
    }
}

/// State for a server running without a backend.
pub(crate) fn offline_state() -> Arc<State> {
    State::new("Bayport West", geometry(), AdminGate::new(ADMIN_EMAIL), None).into_shared()
}

pub(crate) fn service(state: Arc<State>) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(app_router()))
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

pub(crate) fn admin_user() -> AuthUser {
    AuthUser {
        id: Uuid::from_u128(0xAD),
        email: Some(ADMIN_EMAIL.to_string()),
        unit_id: None,
        mobile: None,
    }
}

/// `name=value` cookie header for a request.
pub(crate) fn cookie(name: &str, value: &str) -> String {
    format!("{name}={value}")
}

pub(crate) fn tenant_record(n: u128, mobile: &str, unit: i64) -> TenantRecord {
    TenantRecord {
        id: TenantId(Uuid::from_u128(n)),
        mobile: mobile.to_string(),
        unit_id: UnitId(unit),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
