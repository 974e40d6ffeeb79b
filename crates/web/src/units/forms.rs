//! Edit form parsing.

use salvo::{
    http::form::{FilePart, FormData},
    prelude::{Request, StatusError},
};

use bayport_app::domain::{media::MediaFile, modal::UnitDraft, units::UnitType};

use crate::extensions::*;

/// Upper bound for an upload request, above the video limit so oversized
/// videos still reach the inline size check.
pub(super) const MAX_UPLOAD_BYTES: usize = 128 * 1024 * 1024;

/// The submitted form, urlencoded or multipart.
pub(super) async fn form_data(req: &mut Request) -> Result<&FormData, StatusError> {
    req.form_data().await.or_400("Invalid form submission.")
}

/// The edit draft as submitted. Unknown unit types fall back to the first
/// option.
pub(super) fn draft_from(form: &FormData) -> UnitDraft {
    let field = |name: &str| form.fields.get(name).cloned().unwrap_or_default();

    UnitDraft {
        owner: field("owner"),
        rent: field("rent"),
        unit_type: form
            .fields
            .get("unit_type")
            .and_then(|label| UnitType::from_label(label))
            .unwrap_or(UnitType::Studio),
        photos: form.fields.get_vec("photos").cloned().unwrap_or_default(),
        video: form.fields.get("video").cloned(),
    }
    .normalized()
}

/// Every non-empty file submitted under `name`.
pub(super) async fn media_files(form: &FormData, name: &str) -> Result<Vec<MediaFile>, StatusError> {
    let Some(parts) = form.files.get_vec(name) else {
        return Ok(Vec::new());
    };

    let mut files = Vec::with_capacity(parts.len());

    for part in parts.iter().filter(|part| part.size() > 0) {
        files.push(media_file(part).await?);
    }

    Ok(files)
}

async fn media_file(part: &FilePart) -> Result<MediaFile, StatusError> {
    let bytes = tokio::fs::read(part.path())
        .await
        .or_500("failed to read uploaded file")?;

    Ok(MediaFile {
        name: part.name().unwrap_or("upload").to_string(),
        content_type: part.content_type().map(|mime| mime.to_string()),
        bytes,
    })
}
