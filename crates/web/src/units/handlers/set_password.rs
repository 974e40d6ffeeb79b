//! Set Password Handler

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

/// Create the account for the pending mobile.
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
    let confirmation = Zeroizing::new(req.form::<String>("confirm").await.unwrap_or_default());

    let step = match &state.backend {
        Some(backend) => backend
            .modal
            .submit_new_password(unit_id, mobile, &password, &confirmation)
            .await
            .map_err(into_status_error)?,
        None => offline(
            state,
            unit_id,
            ModalState::SetPassword {
                mobile,
                error: Some(SERVICE_UNAVAILABLE.to_string()),
            },
        )?,
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

    use bayport_app::domain::geometry::UnitId;

    use crate::{
        session::TENANT_COOKIE,
        test_helpers::{Mocks, TENANT_TOKEN, service, tenant_record, tenant_session},
    };

    #[tokio::test]
    async fn matching_passwords_create_account_and_session() -> TestResult {
        let mut mocks = Mocks::new().with_registrations(&[7]);

        mocks
            .tenants
            .expect_find_registration()
            .once()
            .return_once(|_, _| Ok(Some(tenant_record(1, "5015551001", 7))));
        mocks
            .auth
            .expect_sign_up()
            .once()
            .withf(|email, password, metadata| {
                email == "5015551001@tenant.bw"
                    && password == "secret"
                    && metadata.unit_id == UnitId(7)
                    && metadata.mobile.as_str() == "5015551001"
            })
            .return_once(|_, _, _| Ok(tenant_session(7)));

        let mut res = TestClient::post("http://example.com/units/7/modal/set-password")
            .form(&[
                ("mobile", "5015551001"),
                ("password", "secret"),
                ("confirm", "secret"),
            ])
            .send(&service(mocks.into_state()))
            .await;

        assert_eq!(
            res.cookie(TENANT_COOKIE).map(Cookie::value),
            Some(TENANT_TOKEN)
        );
        assert!(res.take_string().await?.contains("data-state=\"edit\""));

        Ok(())
    }

    #[tokio::test]
    async fn mismatched_passwords_stay_without_backend_calls() -> TestResult {
        let mut mocks = Mocks::new().with_registrations(&[7]);

        mocks.tenants.expect_find_registration().never();
        mocks.auth.expect_sign_up().never();

        let mut res = TestClient::post("http://example.com/units/7/modal/set-password")
            .form(&[
                ("mobile", "5015551001"),
                ("password", "secret"),
                ("confirm", "secreT"),
            ])
            .send(&service(mocks.into_state()))
            .await;

        assert!(res.cookie(TENANT_COOKIE).is_none());

        let body = res.take_string().await?;

        assert!(body.contains("data-state=\"set-password\""));
        assert!(body.contains("Passwords do not match."));

        Ok(())
    }

    #[tokio::test]
    async fn short_password_is_rejected() -> TestResult {
        let mut mocks = Mocks::new().with_registrations(&[7]);

        mocks.auth.expect_sign_up().never();

        let body = TestClient::post("http://example.com/units/7/modal/set-password")
            .form(&[("mobile", "5015551001"), ("password", "abc"), ("confirm", "abc")])
            .send(&service(mocks.into_state()))
            .await
            .take_string()
            .await?;

        assert!(body.contains("Password must be at least 6 characters."));

        Ok(())
    }
}
