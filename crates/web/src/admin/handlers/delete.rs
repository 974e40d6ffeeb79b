//! Remove Tenant Handler

use salvo::prelude::*;
use uuid::Uuid;

use bayport_app::domain::{roster::RosterError, tenants::records::TenantId};

use crate::{
    admin::{admin_session, back_to_admin, page, roster_page},
    extensions::*,
    views::admin::{AdminView, Flash, RosterPage},
};

/// Remove a registration once the administrator has confirmed it; the first
/// request only asks for that confirmation.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.site()?;

    let id = req
        .param::<Uuid>("id")
        .map(TenantId)
        .ok_or_else(|| StatusError::not_found().brief("Unknown registration"))?;

    let Some(backend) = &state.backend else {
        res.render(page(state, AdminView::Unavailable));

        return Ok(());
    };

    let Some(session) = admin_session(state, backend, req).await else {
        back_to_admin(res);

        return Ok(());
    };

    let confirmed = req.form::<bool>("confirmed").await.unwrap_or(false);

    let roster = match backend
        .roster
        .remove(&session.access_token, id, confirmed)
        .await
    {
        Ok(()) => {
            let flash = Flash::Success("Registration removed.".to_string());

            roster_page(backend, &session, Some(flash)).await
        }
        Err(RosterError::NotConfirmed) => {
            let roster = roster_page(backend, &session, None).await;
            let confirm = roster
                .rows
                .as_ref()
                .ok()
                .and_then(|rows| rows.iter().find(|row| row.id == id).cloned());

            RosterPage { confirm, ..roster }
        }
        Err(error) => roster_page(backend, &session, Some(Flash::Error(error.to_string()))).await,
    };

    res.render(page(state, AdminView::Roster(roster)));

    Ok(())
}
