//! Admin Login Handler

use salvo::prelude::*;
use tracing::info;
use zeroize::Zeroizing;

use crate::{
    admin::{back_to_admin, page},
    extensions::*,
    session::{self, ADMIN_COOKIE},
    views::admin::AdminView,
};

/// Sign in, keeping the session only for the administrator account.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.site()?;

    let Some(backend) = &state.backend else {
        res.render(page(state, AdminView::Unavailable));

        return Ok(());
    };

    let email = req.form::<String>("email").await.unwrap_or_default();
    let password = Zeroizing::new(req.form::<String>("password").await.unwrap_or_default());

    match state
        .admin
        .login(backend.app.auth.as_ref(), &email, &password)
        .await
    {
        Ok(session) => {
            info!("administrator signed in");

            session::store(res, ADMIN_COOKIE, &session.access_token);
            back_to_admin(res);
        }
        Err(error) => {
            res.status_code(StatusCode::UNAUTHORIZED);
            res.render(page(
                state,
                AdminView::Login {
                    error: Some(error.to_string()),
                },
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::{cookie::Cookie, header::LOCATION},
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use bayport_app::{
        auth::{AuthServiceError, Session},
        backend::AccessToken,
    };

    use crate::test_helpers::{ADMIN_TOKEN, Mocks, admin_user, service, tenant_session};

    use super::*;

    #[tokio::test]
    async fn admin_login_sets_cookie_and_redirects() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .auth
            .expect_sign_in()
            .once()
            .withf(|email, password| email == "admin@example.com" && password == "hunter22")
            .return_once(|_, _| {
                Ok(Session {
                    access_token: AccessToken::new(ADMIN_TOKEN),
                    user: admin_user(),
                })
            });

        let res = TestClient::post("http://example.com/admin/login")
            .form(&[("email", "admin@example.com"), ("password", "hunter22")])
            .send(&service(mocks.into_state()))
            .await;

        let location = res.headers().get(LOCATION).and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location, Some("/admin"));
        assert_eq!(res.cookie(ADMIN_COOKIE).map(Cookie::value), Some(ADMIN_TOKEN));

        Ok(())
    }

    #[tokio::test]
    async fn empty_fields_are_rejected_inline() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.auth.expect_sign_in().never();

        let mut res = TestClient::post("http://example.com/admin/login")
            .form(&[("email", ""), ("password", "")])
            .send(&service(mocks.into_state()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert!(
            res.take_string()
                .await?
                .contains("Please enter email and password.")
        );

        Ok(())
    }

    #[tokio::test]
    async fn bad_credentials_are_rejected_inline() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .auth
            .expect_sign_in()
            .once()
            .return_once(|_, _| Err(AuthServiceError::InvalidCredentials));

        let mut res = TestClient::post("http://example.com/admin/login")
            .form(&[("email", "admin@example.com"), ("password", "wrong")])
            .send(&service(mocks.into_state()))
            .await;

        assert!(res.cookie(ADMIN_COOKIE).is_none());
        assert!(res.take_string().await?.contains("Invalid credentials."));

        Ok(())
    }

    #[tokio::test]
    async fn tenant_account_is_refused() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .auth
            .expect_sign_in()
            .once()
            .return_once(|_, _| Ok(tenant_session(7)));
        mocks.auth.expect_sign_out().once().return_once(|_| Ok(()));

        let mut res = TestClient::post("http://example.com/admin/login")
            .form(&[("email", "5015551001@tenant.bw"), ("password", "secret")])
            .send(&service(mocks.into_state()))
            .await;

        assert!(res.cookie(ADMIN_COOKIE).is_none());
        assert!(
            res.take_string()
                .await?
                .contains("This account does not have admin access.")
        );

        Ok(())
    }
}
