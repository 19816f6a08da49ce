//! Media handlers
//!
//! Uploads arrive as multipart forms with the image in the `file` field.

use axum::extract::{Multipart, State};
use blog_core::MediaId;
use blog_service::dto::MediaResponse;
use blog_service::{MediaService, MediaUpload};
use tracing::debug;

use crate::extractors::{ApiPath, AuthUser};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Multipart field carrying the upload
pub const UPLOAD_FIELD: &str = "file";

/// POST /media
pub async fn upload_media(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    multipart: Multipart,
) -> ApiResult<Created<MediaResponse>> {
    let upload = read_upload(multipart).await?;

    let service = MediaService::new(state.services());
    let media = service.upload(&caller, upload).await?;
    Ok(Created(media))
}

/// DELETE /media/{media_id}
pub async fn delete_media(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(media_id): ApiPath<MediaId>,
) -> ApiResult<NoContent> {
    let service = MediaService::new(state.services());
    service.delete_media(&caller, media_id).await?;
    Ok(NoContent)
}

/// Pull the `file` field out of the form, skipping anything else
async fn read_upload(mut multipart: Multipart) -> ApiResult<MediaUpload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_body(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        let original_filename = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?;

        return Ok(MediaUpload {
            original_filename,
            mime_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(ApiError::invalid_body("No file provided"))
}
