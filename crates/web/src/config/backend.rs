//! Backend Config

use clap::Args;

use bayport_app::{backend::BackendConfig, domain::media::MediaBuckets};

/// Hosted backend settings. Without a URL and key the site runs in
/// geometry-only mode.
#[derive(Debug, Args)]
pub struct BackendArgs {
    /// Backend project URL
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Backend public (anonymous) API key
    #[arg(long, env = "BACKEND_ANON_KEY", hide_env_values = true)]
    pub backend_anon_key: Option<String>,

    /// Storage bucket for unit photos
    #[arg(long, env = "PHOTO_BUCKET", default_value = "unit-photos")]
    pub photo_bucket: String,

    /// Storage bucket for unit videos
    #[arg(long, env = "VIDEO_BUCKET", default_value = "unit-videos")]
    pub video_bucket: String,
}

impl BackendArgs {
    /// Connection settings, when both the URL and key are set.
    pub fn backend_config(&self) -> Option<BackendConfig> {
        let url = self.backend_url.as_deref().map(str::trim)?;
        let anon_key = self.backend_anon_key.as_deref().map(str::trim)?;

        if url.is_empty() || anon_key.is_empty() {
            return None;
        }

        Some(BackendConfig {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    pub fn buckets(&self) -> MediaBuckets {
        MediaBuckets {
            photos: self.photo_bucket.clone(),
            videos: self.video_bucket.clone(),
        }
    }
}
