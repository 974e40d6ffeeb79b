//! Save Handler

use salvo::prelude::*;

use bayport_app::domain::modal::{ModalState, SERVICE_UNAVAILABLE};

use crate::{
    extensions::*,
    session::{self, TENANT_COOKIE},
    units::{
        errors::into_status_error,
        forms::{draft_from, form_data},
        fragment, offline, unit_param,
    },
};

/// Validate and persist the edit form.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    let state = depot.site()?;
    let unit_id = unit_param(req)?;
    let token = session::token(req, TENANT_COOKIE);
    let draft = draft_from(form_data(req).await?);

    let step = match &state.backend {
        Some(backend) => backend
            .modal
            .save(unit_id, token.as_ref(), draft)
            .await
            .map_err(into_status_error)?,
        None => offline(
            state,
            unit_id,
            ModalState::Edit {
                draft,
                error: Some(SERVICE_UNAVAILABLE.to_string()),
                notice: None,
            },
        )?,
    };

    Ok(fragment(res, step))
}
