//! Video Upload Handler

use salvo::prelude::*;

use bayport_app::domain::modal::{ModalState, SERVICE_UNAVAILABLE};

use crate::{
    extensions::*,
    session::{self, TENANT_COOKIE},
    units::{
        errors::into_status_error,
        forms::{MAX_UPLOAD_BYTES, draft_from, form_data, media_files},
        fragment, offline, unit_param,
    },
};

/// Upload one video and answer with the edit form pointing at it.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    let state = depot.site()?;
    let unit_id = unit_param(req)?;
    let token = session::token(req, TENANT_COOKIE);

    req.set_secure_max_size(MAX_UPLOAD_BYTES);

    let form = form_data(req).await?;
    let draft = draft_from(form);
    let file = media_files(form, "file")
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| StatusError::bad_request().brief("No video file selected."))?;

    let step = match &state.backend {
        Some(backend) => backend
            .modal
            .upload_video(unit_id, token.as_ref(), draft, file)
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
