//! Media upload errors.

use thiserror::Error;

use crate::backend::BackendError;

/// Media upload error variants.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The video exceeds [`super::MAX_VIDEO_BYTES`].
    #[error("Video too large. Max size is 100 MB.")]
    VideoTooLarge,

    /// Storage rejected the upload.
    #[error("Upload error: {}", .0.user_message())]
    Upload(#[from] BackendError),
}
