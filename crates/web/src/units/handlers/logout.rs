//! Logout Handler

use salvo::prelude::*;

use bayport_app::domain::modal::{ModalState, SessionChange};

use crate::{
    extensions::*,
    session::{self, TENANT_COOKIE},
    units::{errors::into_status_error, fragment, offline, unit_param},
};

/// End the tenant session and return to `view`.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    let state = depot.site()?;
    let unit_id = unit_param(req)?;
    let token = session::token(req, TENANT_COOKIE);

    let step = match &state.backend {
        Some(backend) => backend
            .modal
            .logout(unit_id, token.as_ref())
            .await
            .map_err(into_status_error)?,
        None => {
            let mut step = offline(state, unit_id, ModalState::View)?;

            step.session = SessionChange::Ended;

            step
        }
    };

    Ok(fragment(res, step))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::cookie::Cookie,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use bayport_app::auth::AuthServiceError;

    use crate::test_helpers::{Mocks, TENANT_TOKEN, cookie, offline_state, service};

    use super::*;

    #[tokio::test]
    async fn logout_signs_out_and_clears_cookie() -> TestResult {
        let mut mocks = Mocks::new().with_registrations(&[7]);

        mocks
            .auth
            .expect_sign_out()
            .once()
            .withf(|token| token.expose() == TENANT_TOKEN)
            .return_once(|_| Ok(()));

        let mut res = TestClient::post("http://example.com/units/7/modal/logout")
            .add_header("cookie", cookie(TENANT_COOKIE, TENANT_TOKEN), true)
            .send(&service(mocks.into_state()))
            .await;

        assert_eq!(res.cookie(TENANT_COOKIE).map(Cookie::value), Some(""));
        assert!(res.take_string().await?.contains("data-state=\"view\""));

        Ok(())
    }

    #[tokio::test]
    async fn failed_sign_out_still_clears_cookie() -> TestResult {
        let mut mocks = Mocks::new().with_registrations(&[7]);

        mocks
            .auth
            .expect_sign_out()
            .once()
            .return_once(|_| Err(AuthServiceError::Unauthorized));

        let res = TestClient::post("http://example.com/units/7/modal/logout")
            .add_header("cookie", cookie(TENANT_COOKIE, TENANT_TOKEN), true)
            .send(&service(mocks.into_state()))
            .await;

        assert_eq!(res.cookie(TENANT_COOKIE).map(Cookie::value), Some(""));

        Ok(())
    }

    #[tokio::test]
    async fn offline_logout_clears_cookie() -> TestResult {
        let res = TestClient::post("http://example.com/units/7/modal/logout")
            .add_header("cookie", cookie(TENANT_COOKIE, TENANT_TOKEN), true)
            .send(&service(offline_state()))
            .await;

        assert_eq!(res.cookie(TENANT_COOKIE).map(Cookie::value), Some(""));

        Ok(())
    }
}
