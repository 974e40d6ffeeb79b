//! Backend Status Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use bayport_app::domain::units::BackendStatus;

use crate::extensions::*;

/// Backend connectivity response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatusResponse {
    /// `connected`, `degraded`, `unreachable` or `not_configured`
    pub status: String,

    /// Indicator text as shown on the building page
    pub message: String,

    pub connected: bool,
}

impl From<BackendStatus> for StatusResponse {
    fn from(status: BackendStatus) -> Self {
        let name = match status {
            BackendStatus::Connected => "connected",
            BackendStatus::Degraded(_) => "degraded",
            BackendStatus::Unreachable(_) => "unreachable",
            BackendStatus::NotConfigured => "not_configured",
        };

        Self {
            status: name.to_string(),
            message: status.to_string(),
            connected: status.is_connected(),
        }
    }
}

/// Backend status handler
///
/// Checks the unit details table with a one-row read.
#[endpoint(tags("health"), summary = "Backend connectivity")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StatusResponse>, StatusError> {
    let state = depot.site()?;

    let status = BackendStatus::check(state.units()).await;

    Ok(Json(status.into()))
}
