//! Tenant Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::geometry::UnitId;

/// Registration identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(pub Uuid);

impl Display for TenantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Tenant Registration Record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TenantRecord {
    /// Unique registration identifier.
    pub id: TenantId,

    /// Mobile number as stored.
    pub mobile: String,

    /// Unit this registration grants edit eligibility for.
    pub unit_id: UnitId,

    /// Registration timestamp.
    pub created_at: Timestamp,
}
