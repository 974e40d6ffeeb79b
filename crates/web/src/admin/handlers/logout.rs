//! Admin Logout Handler

use salvo::prelude::*;
use tracing::warn;

use crate::{
    admin::back_to_admin,
    extensions::*,
    session::{self, ADMIN_COOKIE},
};

#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.site()?;

    if let (Some(backend), Some(token)) = (&state.backend, session::token(req, ADMIN_COOKIE)) {
        if let Err(error) = backend.app.auth.sign_out(&token).await {
            warn!("failed to sign out administrator: {error}");
        }
    }

    session::clear(res, ADMIN_COOKIE);
    back_to_admin(res);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::{http::cookie::Cookie, test::TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{ADMIN_TOKEN, Mocks, cookie, service};

    use super::*;

    #[tokio::test]
    async fn logout_signs_out_and_clears_cookie() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .auth
            .expect_sign_out()
            .once()
            .withf(|token| token.expose() == ADMIN_TOKEN)
            .return_once(|_| Ok(()));

        let res = TestClient::post("http://example.com/admin/logout")
            .add_header("cookie", cookie(ADMIN_COOKIE, ADMIN_TOKEN), true)
            .send(&service(mocks.into_state()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(res.cookie(ADMIN_COOKIE).map(Cookie::value), Some(""));

        Ok(())
    }
}
