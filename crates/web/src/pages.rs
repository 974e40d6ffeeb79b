//! Landing and building pages.

use salvo::prelude::*;
use tracing::warn;

use bayport_app::domain::{
    building::{BuildingDiagram, landing_cards},
    units::{BackendStatus, UnitOverlay},
};

use crate::{
    extensions::*,
    views::{
        building::{building_not_found, building_page},
        landing::landing_page,
    },
};

#[handler]
pub(crate) async fn landing(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.site()?;

    Ok(Text::Html(landing_page(
        &state.site_name,
        landing_cards(&state.geometry),
    )))
}

/// Building diagram with the detail/registration overlay, degrading to
/// geometry only when the backend is missing or failing.
#[handler]
pub(crate) async fn building(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    let state = depot.site()?;

    let Some((index, found)) = req
        .param::<usize>("index")
        .and_then(|index| Some((index, state.geometry.building(index)?)))
    else {
        res.status_code(StatusCode::NOT_FOUND);

        return Ok(Text::Html(building_not_found(&state.site_name)));
    };

    let (overlay, status) = match &state.backend {
        Some(backend) => {
            let ids = found.unit_ids();

            let (overlay, status) = tokio::join!(
                UnitOverlay::load(
                    backend.app.units.as_ref(),
                    backend.app.tenants.as_ref(),
                    &ids
                ),
                BackendStatus::check(state.units()),
            );

            let overlay = overlay.unwrap_or_else(|error| {
                warn!("unit overlay unavailable, showing geometry only: {error}");

                UnitOverlay::default()
            });

            (overlay, status)
        }
        None => (UnitOverlay::default(), BackendStatus::NotConfigured),
    };

    let diagram = BuildingDiagram::build(index, found, &overlay);

    Ok(Text::Html(building_page(&state.site_name, diagram, status)))
}
