//! Open Modal Handler

use salvo::prelude::*;

use bayport_app::domain::modal::ModalState;

use crate::{
    extensions::*,
    session::{self, TENANT_COOKIE},
    units::{errors::into_status_error, fragment, offline, unit_param},
};

/// Open the modal in `edit` for the unit's own session, `view` otherwise.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    let state = depot.site()?;
    let unit_id = unit_param(req)?;

    let step = match &state.backend {
        Some(backend) => backend
            .modal
            .open(unit_id, session::token(req, TENANT_COOKIE).as_ref())
            .await
            .map_err(into_status_error)?,
        None => offline(state, unit_id, ModalState::View)?,
    };

    Ok(fragment(res, step))
}
