//! Roster errors.

use thiserror::Error;

use crate::domain::tenants::TenantsServiceError;

/// Roster failures, displayed as the inline message shown to the
/// administrator.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Mobile field left blank.
    #[error("Please enter a mobile number.")]
    MobileRequired,

    /// No unit selected, or one outside the geometry document.
    #[error("Please select a unit.")]
    UnitRequired,

    /// Fewer than [`crate::domain::mobile::MIN_MOBILE_LEN`] characters after normalization.
    #[error("Mobile number seems too short.")]
    MobileTooShort,

    /// Removal submitted without confirmation.
    #[error("Please confirm the removal.")]
    NotConfirmed,

    /// Registrations could not be listed.
    #[error("Error loading tenants: {}", .0.user_message())]
    Load(#[source] TenantsServiceError),

    /// A registration write failed.
    #[error("{}", .0.user_message())]
    Tenants(#[from] TenantsServiceError),
}
