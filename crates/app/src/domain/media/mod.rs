//! Unit Media
//!
//! Photos and videos are uploaded to object storage under the unit's id and
//! referenced from the edit draft by public URL. Nothing is persisted on the
//! unit until the draft is saved.

pub mod errors;
pub mod service;

pub use errors::MediaError;
pub use service::*;

use crate::domain::geometry::UnitId;

/// Largest accepted video, in bytes.
pub const MAX_VIDEO_BYTES: u64 = 100 * 1024 * 1024;

/// Storage buckets for unit media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBuckets {
    /// Bucket for unit photos.
    pub photos: String,

    /// Bucket for unit videos.
    pub videos: String,
}

impl Default for MediaBuckets {
    fn default() -> Self {
        Self {
            photos: "unit-photos".to_string(),
            videos: "unit-videos".to_string(),
        }
    }
}

/// An uploaded file, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// File name as submitted by the browser.
    pub name: String,

    /// Submitted MIME type, if any.
    pub content_type: Option<String>,

    /// File contents.
    pub bytes: Vec<u8>,
}

impl MediaFile {
    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Replace every character outside `[A-Za-z0-9._-]` with `_`.
pub fn safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Storage path of an upload: `<unit>/<millis>_<safe name>`.
pub fn object_path(unit: UnitId, uploaded_at_ms: i64, name: &str) -> String {
    format!("{unit}/{uploaded_at_ms}_{}", safe_file_name(name))
}

/// Reject videos over [`MAX_VIDEO_BYTES`].
///
/// # Errors
///
/// Returns [`MediaError::VideoTooLarge`] when `size` exceeds the limit.
pub fn check_video_size(size: u64) -> Result<(), MediaError> {
    if size > MAX_VIDEO_BYTES {
        return Err(MediaError::VideoTooLarge);
    }

    Ok(())
}
