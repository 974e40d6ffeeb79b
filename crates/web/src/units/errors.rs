//! Modal Errors

use salvo::http::StatusError;
use tracing::error;

use bayport_app::domain::modal::ModalError;

pub(super) fn into_status_error(error: ModalError) -> StatusError {
    match error {
        ModalError::UnknownUnit(unit) => {
            StatusError::not_found().brief(format!("Unit {unit} not found"))
        }
        ModalError::Forbidden(_) => {
            StatusError::forbidden().brief("Please log in to edit this unit.")
        }
        ModalError::Session(source) => {
            error!("failed to resolve session: {source}");

            StatusError::internal_server_error()
        }
    }
}
