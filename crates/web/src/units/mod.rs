//! Unit Modal
//!
//! Every route answers with the modal body for the resulting state, which
//! the client script swaps into the open dialog.

mod errors;
mod forms;
mod handlers;

pub(crate) use handlers::*;

use salvo::prelude::*;

use bayport_app::domain::{
    geometry::UnitId,
    modal::{ModalState, SessionChange, Step},
    units::Unit,
};

use crate::{session, state::State, views::modal::modal_fragment};

fn unit_param(req: &Request) -> Result<UnitId, StatusError> {
    req.param::<i64>("unit")
        .map(UnitId)
        .ok_or_else(|| StatusError::not_found().brief("Unknown unit"))
}

/// The step for a server running without a backend: geometry only, in
/// whatever state the caller decided on.
fn offline(state: &State, unit_id: UnitId, modal: ModalState) -> Result<Step, StatusError> {
    let indexed = state
        .index
        .get(unit_id)
        .ok_or_else(|| StatusError::not_found().brief("Unknown unit"))?;

    Ok(Step {
        unit: Unit::from_geometry(&indexed.unit),
        state: modal,
        session: SessionChange::Unchanged,
    })
}

/// Render the step, persisting whatever it did to the session.
fn fragment(res: &mut Response, step: Step) -> Text<String> {
    session::apply(res, &step.session);

    Text::Html(modal_fragment(step.unit, step.state))
}
