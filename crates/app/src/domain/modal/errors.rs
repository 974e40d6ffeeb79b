//! Modal errors.
//!
//! Validation and backend failures are shown inline through the state itself;
//! these are the failures that end the request instead.

use thiserror::Error;

use crate::{auth::AuthServiceError, domain::geometry::UnitId};

/// Modal failures that cannot be shown inside the modal.
#[derive(Debug, Error)]
pub enum ModalError {
    /// The unit is not in the geometry document.
    #[error("unit {0} not found")]
    UnknownUnit(UnitId),

    /// No session, or a session for another unit, on an edit-scoped request.
    #[error("session may not edit unit {0}")]
    Forbidden(UnitId),

    /// The auth service failed while resolving the session.
    #[error("failed to resolve session")]
    Session(#[source] AuthServiceError),
}
