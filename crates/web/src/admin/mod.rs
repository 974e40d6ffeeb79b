//! Admin
//!
//! The tenant roster behind the administrator login. Every roster action
//! re-checks the admin session cookie; the backend's access rules still have
//! the final say over what the token may do.

mod handlers;

pub(crate) use handlers::*;

use salvo::prelude::*;

use bayport_app::auth::Session;

use crate::{
    session::{self, ADMIN_COOKIE},
    state::{Backend, State},
    views::admin::{AdminView, Flash, RosterPage, admin_page},
};

/// The administrator session behind the request's cookie, if it still is
/// one.
async fn admin_session(state: &State, backend: &Backend, req: &Request) -> Option<Session> {
    let token = session::token(req, ADMIN_COOKIE)?;

    state.admin.resume(backend.app.auth.as_ref(), &token).await
}

/// Roster page contents for `session`, with the current registrations.
async fn roster_page(backend: &Backend, session: &Session, flash: Option<Flash>) -> RosterPage {
    RosterPage {
        admin_email: session.user.email.clone().unwrap_or_default(),
        units: backend.roster.unit_options(),
        rows: backend
            .roster
            .list(&session.access_token)
            .await
            .map_err(|error| error.to_string()),
        flash,
        ..RosterPage::default()
    }
}

fn page(state: &State, admin: AdminView) -> Text<String> {
    Text::Html(admin_page(&state.site_name, admin))
}

/// Back to the roster page, which asks for a login when the session is gone.
fn back_to_admin(res: &mut Response) {
    res.render(Redirect::other("/admin"));
}
