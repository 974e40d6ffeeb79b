//! Admin Page Handler

use salvo::prelude::*;

use crate::{
    admin::{admin_session, page, roster_page},
    extensions::*,
    session::{self, ADMIN_COOKIE},
    views::admin::AdminView,
};

/// The roster for a signed-in administrator, the login form otherwise.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    let state = depot.site()?;

    let Some(backend) = &state.backend else {
        return Ok(page(state, AdminView::Unavailable));
    };

    let Some(session) = admin_session(state, backend, req).await else {
        if session::token(req, ADMIN_COOKIE).is_some() {
            session::clear(res, ADMIN_COOKIE);
        }

        return Ok(page(state, AdminView::Login { error: None }));
    };

    let roster = roster_page(backend, &session, None).await;

    Ok(page(state, AdminView::Roster(roster)))
}
