//! Login Handler

use salvo::prelude::*;

use bayport_app::domain::modal::ModalState;

use crate::{
    extensions::*,
    units::{errors::into_status_error, fragment, offline, unit_param},
};

/// `view → login`, which stays in `view` for units nobody is registered to.
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
            .request_login(unit_id)
            .await
            .map_err(into_status_error)?,
        None => offline(state, unit_id, ModalState::View)?,
    };

    Ok(fragment(res, step))
}
