//! Submit Mobile Handler

use salvo::prelude::*;

use bayport_app::domain::modal::{ModalState, SERVICE_UNAVAILABLE};

use crate::{
    extensions::*,
    units::{errors::into_status_error, fragment, offline, unit_param},
};

/// Check the mobile against this unit's registrations.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    let state = depot.site()?;
    let unit_id = unit_param(req)?;
    let raw = req.form::<String>("mobile").await.unwrap_or_default();

    let step = match &state.backend {
        Some(backend) => backend
            .modal
            .submit_mobile(unit_id, &raw)
            .await
            .map_err(into_status_error)?,
        None => offline(
            state,
            unit_id,
            ModalState::Login {
                error: Some(SERVICE_UNAVAILABLE.to_string()),
            },
        )?,
    };

    Ok(fragment(res, step))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bayport_app::domain::geometry::UnitId;

    use crate::test_helpers::{Mocks, offline_state, service, tenant_record};

    #[tokio::test]
    async fn new_account_continues_to_set_password() -> TestResult {
        let mut mocks = Mocks::new().with_registrations(&[7]);

        mocks
            .tenants
            .expect_find_registration()
            .once()
            .withf(|mobile, unit| mobile.as_str() == "5015551001" && *unit == UnitId(7))
            .return_once(|_, _| Ok(Some(tenant_record(1, "5015551001", 7))));
        mocks
            .profiles
            .expect_has_account()
            .once()
            .return_once(|_| Ok(false));

        let body = TestClient::post("http://example.com/units/7/modal/mobile")
            .form(&[("mobile", "(501) 555-1001")])
            .send(&service(mocks.into_state()))
            .await
            .take_string()
            .await?;

        assert!(body.contains("data-state=\"set-password\""));
        assert!(body.contains("value=\"5015551001\""));

        Ok(())
    }

    #[tokio::test]
    async fn existing_account_continues_to_password() -> TestResult {
        let mut mocks = Mocks::new().with_registrations(&[7]);

        mocks
            .tenants
            .expect_find_registration()
            .once()
            .return_once(|_, _| Ok(Some(tenant_record(1, "5015551001", 7))));
        mocks
            .profiles
            .expect_has_account()
            .once()
            .return_once(|_| Ok(true));

        let body = TestClient::post("http://example.com/units/7/modal/mobile")
            .form(&[("mobile", "5015551001")])
            .send(&service(mocks.into_state()))
            .await
            .take_string()
            .await?;

        assert!(body.contains("data-state=\"password\""));

        Ok(())
    }

    #[tokio::test]
    async fn unregistered_mobile_stays_in_login() -> TestResult {
        let mut mocks = Mocks::new().with_registrations(&[7]);

        mocks
            .tenants
            .expect_find_registration()
            .once()
            .return_once(|_, _| Ok(None));
        mocks.profiles.expect_has_account().never();

        let body = TestClient::post("http://example.com/units/7/modal/mobile")
            .form(&[("mobile", "5015559999")])
            .send(&service(mocks.into_state()))
            .await
            .take_string()
            .await?;

        assert!(body.contains("data-state=\"login\""));
        assert!(body.contains("This number is not registered for this unit."));

        Ok(())
    }

    #[tokio::test]
    async fn blank_mobile_is_rejected_without_lookup() -> TestResult {
        let mut mocks = Mocks::new().with_registrations(&[7]);

        mocks.tenants.expect_find_registration().never();

        let body = TestClient::post("http://example.com/units/7/modal/mobile")
            .form(&[("mobile", "  ")])
            .send(&service(mocks.into_state()))
            .await
            .take_string()
            .await?;

        assert!(body.contains("Please enter your mobile number."));

        Ok(())
    }

    #[tokio::test]
    async fn offline_submit_is_unavailable() -> TestResult {
        let body = TestClient::post("http://example.com/units/7/modal/mobile")
            .form(&[("mobile", "5015551001")])
            .send(&service(offline_state()))
            .await
            .take_string()
            .await?;

        assert!(body.contains("Service unavailable. Please try again later."));

        Ok(())
    }
}
