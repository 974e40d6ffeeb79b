//! Password Handler

use salvo::prelude::*;
use zeroize::Zeroizing;

use bayport_app::domain::{
    mobile::Mobile,
    modal::{ModalState, SERVICE_UNAVAILABLE},
};

use crate::{
    extensions::*,
    units::{errors::into_status_error, fragment, offline, unit_param},
};

/// Sign in a returning tenant.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    let state = depot.site()?;
    let unit_id = unit_param(req)?;

    let mobile = Mobile::normalize(&req.form::<String>("mobile").await.unwrap_or_default());
    let password = Zeroizing::new(req.form::<String>("password").await.unwrap_or_default());

    let step = match &state.backend {
        Some(backend) => backend
            .modal
            .submit_password(unit_id, mobile, &password)
            .await
            .map_err(into_status_error)?,
        None => offline(
            state,
            unit_id,
            ModalState::Password {
                mobile,
                error: Some(SERVICE_UNAVAILABLE.to_string()),
            },
        )?,
    };

    Ok(fragment(res, step))
}
