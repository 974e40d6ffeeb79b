//! Media service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    backend::{AccessToken, BackendClient},
    domain::{
        geometry::UnitId,
        media::{MediaBuckets, MediaError, MediaFile, check_video_size, object_path},
    },
};

/// [`MediaService`] over the object storage endpoints.
#[derive(Debug, Clone)]
pub struct BackendMediaService {
    client: BackendClient,
    buckets: MediaBuckets,
}

impl BackendMediaService {
    /// Media service storing into `buckets`.
    #[must_use]
    pub fn new(client: BackendClient, buckets: MediaBuckets) -> Self {
        Self { client, buckets }
    }

    async fn store(
        &self,
        token: &AccessToken,
        bucket: &str,
        unit: UnitId,
        file: MediaFile,
    ) -> Result<String, MediaError> {
        let path = object_path(unit, Timestamp::now().as_millisecond(), &file.name);

        debug!("uploading {} bytes to {bucket}/{path}", file.bytes.len());

        self.client
            .upload(
                bucket,
                &path,
                file.bytes,
                file.content_type.as_deref(),
                true,
                Some(token),
            )
            .await?;

        Ok(self.client.public_url(bucket, &path))
    }
}

#[async_trait]
impl MediaService for BackendMediaService {
    async fn upload_photos(
        &self,
        token: &AccessToken,
        unit: UnitId,
        files: Vec<MediaFile>,
    ) -> Result<Vec<String>, MediaError> {
        let mut urls = Vec::with_capacity(files.len());

        for file in files {
            urls.push(self.store(token, &self.buckets.photos, unit, file).await?);
        }

        Ok(urls)
    }

    async fn upload_video(
        &self,
        token: &AccessToken,
        unit: UnitId,
        file: MediaFile,
    ) -> Result<String, MediaError> {
        check_video_size(file.size())?;

        self.store(token, &self.buckets.videos, unit, file).await
    }
}

#[automock]
#[async_trait]
/// Unit media uploads.
pub trait MediaService: Send + Sync {
    /// Upload photos in order, returning their public URLs. The first failure
    /// aborts the rest of the batch.
    async fn upload_photos(
        &self,
        token: &AccessToken,
        unit: UnitId,
        files: Vec<MediaFile>,
    ) -> Result<Vec<String>, MediaError>;

    /// Upload a single video of at most 100 MB, returning its public URL.
    async fn upload_video(
        &self,
        token: &AccessToken,
        unit: UnitId,
        file: MediaFile,
    ) -> Result<String, MediaError>;
}
