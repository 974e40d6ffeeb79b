//! Register Tenant Handler

use salvo::prelude::*;

use bayport_app::domain::geometry::UnitId;

use crate::{
    admin::{admin_session, back_to_admin, page, roster_page},
    extensions::*,
    views::admin::{AdminView, Flash, RosterPage},
};

/// Register a mobile for a unit.
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

    let Some(session) = admin_session(state, backend, req).await else {
        back_to_admin(res);

        return Ok(());
    };

    let raw_mobile = req.form::<String>("mobile").await.unwrap_or_default();
    let unit = req.form::<i64>("unit").await.map(UnitId);

    let roster = match backend
        .roster
        .add(&session.access_token, &raw_mobile, unit)
        .await
    {
        Ok(message) => roster_page(backend, &session, Some(Flash::Success(message))).await,
        Err(error) => RosterPage {
            mobile: raw_mobile,
            selected: unit,
            ..roster_page(backend, &session, Some(Flash::Error(error.to_string()))).await
        },
    };

    res.render(page(state, AdminView::Roster(roster)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::LOCATION,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use bayport_app::{
        backend::BackendError,
        domain::{mobile::Mobile, tenants::TenantsServiceError},
    };

    use crate::{
        session::ADMIN_COOKIE,
        test_helpers::{ADMIN_TOKEN, Mocks, admin_user, cookie, service, tenant_record},
    };

    use super::*;

    fn signed_in() -> Mocks {
        let mut mocks = Mocks::new();

        mocks
            .auth
            .expect_current_user()
            .once()
            .return_once(|_| Ok(admin_user()));
        mocks
            .profiles
            .expect_account_mobiles()
            .returning(|_| Ok(Default::default()));

        mocks
    }

    #[tokio::test]
    async fn add_registers_and_reloads_roster() -> TestResult {
        let mut mocks = signed_in();

        mocks
            .tenants
            .expect_create_tenant()
            .once()
            .withf(|token, tenant| {
                token.expose() == ADMIN_TOKEN
                    && tenant.mobile == Mobile::normalize("501-555-1001")
                    && tenant.unit_id == UnitId(7)
            })
            .return_once(|_, _| Ok(tenant_record(1, "5015551001", 7)));
        mocks
            .tenants
            .expect_list_tenants()
            .once()
            .return_once(|_| Ok(vec![tenant_record(1, "5015551001", 7)]));

        let body = TestClient::post("http://example.com/admin/tenants")
            .add_header("cookie", cookie(ADMIN_COOKIE, ADMIN_TOKEN), true)
            .form(&[("mobile", "501-555-1001"), ("unit", "7")])
            .send(&service(mocks.into_state()))
            .await
            .take_string()
            .await?;

        assert!(body.contains("Tenant 501-555-1001 registered successfully."));
        assert!(body.contains("Tower A F2 — Unit 201"));

        Ok(())
    }

    #[tokio::test]
    async fn missing_unit_keeps_the_typed_mobile() -> TestResult {
        let mut mocks = signed_in();

        mocks.tenants.expect_create_tenant().never();
        mocks
            .tenants
            .expect_list_tenants()
            .once()
            .return_once(|_| Ok(Vec::new()));

        let body = TestClient::post("http://example.com/admin/tenants")
            .add_header("cookie", cookie(ADMIN_COOKIE, ADMIN_TOKEN), true)
            .form(&[("mobile", "5015551001"), ("unit", "")])
            .send(&service(mocks.into_state()))
            .await
            .take_string()
            .await?;

        assert!(body.contains("Please select a unit."));
        assert!(body.contains("value=\"5015551001\""));
        assert!(body.contains("No tenants registered yet."));

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_is_reported_as_already_registered() -> TestResult {
        let mut mocks = signed_in();

        mocks.tenants.expect_create_tenant().once().return_once(|_, _| {
            Err(TenantsServiceError::from(BackendError::from_response(
                409,
                r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#,
            )))
        });
        mocks
            .tenants
            .expect_list_tenants()
            .once()
            .return_once(|_| Ok(Vec::new()));

        let body = TestClient::post("http://example.com/admin/tenants")
            .add_header("cookie", cookie(ADMIN_COOKIE, ADMIN_TOKEN), true)
            .form(&[("mobile", "5015551001"), ("unit", "7")])
            .send(&service(mocks.into_state()))
            .await
            .take_string()
            .await?;

        assert!(body.contains("This mobile number is already registered."));

        Ok(())
    }

    #[tokio::test]
    async fn add_without_session_redirects_to_login() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.tenants.expect_create_tenant().never();

        let res = TestClient::post("http://example.com/admin/tenants")
            .form(&[("mobile", "5015551001"), ("unit", "7")])
            .send(&service(mocks.into_state()))
            .await;

        let location = res.headers().get(LOCATION).and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location, Some("/admin"));

        Ok(())
    }
}
