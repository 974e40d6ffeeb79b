//! Session cookies.
//!
//! The tenant and administrator sessions each keep their access token in an
//! HttpOnly cookie of their own.

use salvo::{
    http::cookie::{Cookie, SameSite},
    prelude::{Request, Response},
};

use bayport_app::{backend::AccessToken, domain::modal::SessionChange};

pub(crate) const TENANT_COOKIE: &str = "bw_session";
pub(crate) const ADMIN_COOKIE: &str = "bw_admin_session";

/// The access token stored under `name`, if any.
pub(crate) fn token(req: &Request, name: &str) -> Option<AccessToken> {
    req.cookie(name)
        .map(Cookie::value)
        .filter(|value| !value.is_empty())
        .map(AccessToken::new)
}

pub(crate) fn store(res: &mut Response, name: &'static str, token: &AccessToken) {
    let cookie = Cookie::build((name, token.expose().to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    res.add_cookie(cookie);
}

pub(crate) fn clear(res: &mut Response, name: &'static str) {
    let mut cookie = Cookie::build((name, "")).path("/").http_only(true).build();

    cookie.make_removal();

    res.add_cookie(cookie);
}

/// Persist whatever a modal step did to the tenant session.
pub(crate) fn apply(res: &mut Response, change: &SessionChange) {
    match change {
        SessionChange::Unchanged => {}
        SessionChange::Started(session) => store(res, TENANT_COOKIE, &session.access_token),
        SessionChange::Ended => clear(res, TENANT_COOKIE),
    }
}
