//! Healthcheck Handler
//!
//! Liveness only: answers from the loaded geometry document and never calls
//! the backend. `/status` checks connectivity.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Always `ok` once the server is answering
    pub status: String,

    /// `backend` when a backend is configured, `geometry_only` otherwise
    pub mode: String,

    /// Buildings in the geometry document
    pub buildings: usize,

    /// Units across every building
    pub units: usize,
}

/// Healthcheck handler
#[endpoint(tags("health"), summary = "Liveness and loaded directory")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.site()?;

    let mode = if state.backend.is_some() {
        "backend"
    } else {
        "geometry_only"
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        mode: mode.to_string(),
        buildings: state.geometry.buildings.len(),
        units: state.index.len(),
    }))
}
