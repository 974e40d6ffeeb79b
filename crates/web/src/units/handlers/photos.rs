//! Photo Upload Handler

use salvo::prelude::*;

use bayport_app::domain::modal::{ModalState, SERVICE_UNAVAILABLE};

use crate::{
    extensions::*,
    session::{self, TENANT_COOKIE},
    units::{
        errors::into_status_error,
        forms::{MAX_UPLOAD_BYTES, draft_from, form_data, media_files},
        fragment, offline, unit_param,
    },
};

/// Upload the selected photos and answer with the edit form carrying their
/// URLs. The unit record is only written on save.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    let state = depot.site()?;
    let unit_id = unit_param(req)?;
    let token = session::token(req, TENANT_COOKIE);

    req.set_secure_max_size(MAX_UPLOAD_BYTES);

    let form = form_data(req).await?;
    let draft = draft_from(form);
    let files = media_files(form, "files").await?;

    let step = match &state.backend {
        Some(backend) => backend
            .modal
            .upload_photos(unit_id, token.as_ref(), draft, files)
            .await
            .map_err(into_status_error)?,
        None => offline(
            state,
            unit_id,
            ModalState::Edit {
                draft,
                error: Some(SERVICE_UNAVAILABLE.to_string()),
                notice: None,
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

    use crate::test_helpers::{Mocks, TENANT_TOKEN, cookie, offline_state, service, tenant_user};

    use super::*;

    #[tokio::test]
    async fn no_files_returns_draft_untouched() -> TestResult {
        let mut mocks = Mocks::new().with_registrations(&[7]);

        mocks
            .auth
            .expect_current_user()
            .once()
            .return_once(|_| Ok(tenant_user(7)));
        mocks.media.expect_upload_photos().never();

        let body = TestClient::post("http://example.com/units/7/photos")
            .add_header("cookie", cookie(TENANT_COOKIE, TENANT_TOKEN), true)
            .form(&[
                ("owner", "Jane Doe"),
                ("photos", "https://cdn.example/unit-photos/7/1_front.jpg"),
            ])
            .send(&service(mocks.into_state()))
            .await
            .take_string()
            .await?;

        assert!(body.contains("data-state=\"edit\""));
        assert!(body.contains("https://cdn.example/unit-photos/7/1_front.jpg"));

        Ok(())
    }

    #[tokio::test]
    async fn multipart_files_reach_the_uploader() -> TestResult {
        let mut mocks = Mocks::new().with_registrations(&[7]);

        mocks
            .auth
            .expect_current_user()
            .once()
            .return_once(|_| Ok(tenant_user(7)));
        mocks
            .media
            .expect_upload_photos()
            .once()
            .withf(|_, unit, files| {
                *unit == UnitId(7)
                    && files.len() == 1
                    && files.first().is_some_and(|file| {
                        file.name == "front door.jpg"
                            && file.content_type.as_deref() == Some("image/jpeg")
                            && file.bytes == b"JPEGDATA"
                    })
            })
            .return_once(|_, _, _| {
                Ok(vec![
                    "https://cdn.example/unit-photos/7/1700000000000_front_door.jpg".to_string(),
                ])
            });

        let boundary = "bayport-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"owner\"\r\n\r\n\
             Jane Doe\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"files\"; filename=\"front door.jpg\"\r\n\
             Content-Type: image/jpeg\r\n\r\n\
             JPEGDATA\r\n\
             --{boundary}--\r\n"
        );

        let body = TestClient::post("http://example.com/units/7/photos")
            .add_header("cookie", cookie(TENANT_COOKIE, TENANT_TOKEN), true)
            .add_header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
                true,
            )
            .body(body)
            .send(&service(mocks.into_state()))
            .await
            .take_string()
            .await?;

        assert!(body.contains("1 photo(s) uploaded successfully."));
        assert!(body.contains("1700000000000_front_door.jpg"));

        Ok(())
    }

    #[tokio::test]
    async fn upload_without_session_is_forbidden() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.media.expect_upload_photos().never();

        let res = TestClient::post("http://example.com/units/7/photos")
            .form(&[("owner", "Jane Doe")])
            .send(&service(mocks.into_state()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn offline_upload_is_unavailable() -> TestResult {
        let body = TestClient::post("http://example.com/units/7/photos")
            .form(&[("owner", "Jane Doe")])
            .send(&service(offline_state()))
            .await
            .take_string()
            .await?;

        assert!(body.contains("Service unavailable. Please try again later."));

        Ok(())
    }
}
