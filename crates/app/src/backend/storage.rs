//! Object storage endpoints.

use reqwest::{Method, header::CONTENT_TYPE};

use crate::backend::{AccessToken, BackendClient, BackendError};

impl BackendClient {
    /// Upload `bytes` to `bucket` at `path`, overwriting any existing object
    /// when `upsert` is set.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a rejected upload.
    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
        upsert: bool,
        token: Option<&AccessToken>,
    ) -> Result<(), BackendError> {
        let request = self
            .request(
                Method::POST,
                &format!("storage/v1/object/{bucket}/{path}"),
                token,
            )
            .header("x-upsert", if upsert { "true" } else { "false" })
            .header(
                CONTENT_TYPE,
                content_type.unwrap_or("application/octet-stream"),
            )
            .body(bytes);

        Self::send(request).await?;

        Ok(())
    }

    /// Public URL of the object at `path` in `bucket`.
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        self.endpoint(&format!("storage/v1/object/public/{bucket}/{path}"))
    }
}
