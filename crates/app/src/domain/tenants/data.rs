//! Tenant Data

use serde::Serialize;

use crate::domain::{geometry::UnitId, mobile::Mobile};

/// New Registration Data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTenant {
    /// Normalized mobile number.
    pub mobile: Mobile,

    /// Unit the mobile number may claim.
    pub unit_id: UnitId,
}
