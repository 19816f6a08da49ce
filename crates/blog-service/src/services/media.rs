//! Media service
//!
//! Image uploads: type and size checks, storage, and owner-scoped deletion.

use blog_core::entities::is_allowed_media_type;
use blog_core::text::storage_filename;
use blog_core::{Action, Caller, DomainError, Media, MediaId};
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::dto::MediaResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// An uploaded file as received from the client
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub original_filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Media service
pub struct MediaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MediaService<'a> {
    /// Create a new MediaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate, store and record an upload
    #[instrument(
        skip(self, upload),
        fields(user_id = %caller.user_id, mime_type = %upload.mime_type, size = upload.bytes.len())
    )]
    pub async fn upload(&self, caller: &Caller, upload: MediaUpload) -> ServiceResult<MediaResponse> {
        caller.authorize(Action::UploadMedia)?;

        if !is_allowed_media_type(&upload.mime_type) {
            return Err(DomainError::UnsupportedMediaType(upload.mime_type).into());
        }

        let max_bytes = self.ctx.storage().max_file_size_bytes();
        let size = u64::try_from(upload.bytes.len()).unwrap_or(u64::MAX);
        if size > max_bytes {
            return Err(DomainError::FileTooLarge { max_bytes }.into());
        }
        if upload.bytes.is_empty() {
            return Err(ServiceError::validation("File is empty"));
        }

        let id = MediaId::new();
        let now = Utc::now();
        let filename = storage_filename(id, now.timestamp_millis(), &upload.original_filename);
        let url = format!(
            "{}/{}",
            self.ctx.storage().public_url.trim_end_matches('/'),
            filename
        );

        self.ctx.media_store().put(&filename, &upload.bytes).await?;

        let media = Media {
            id,
            user_id: caller.user_id,
            filename,
            original_filename: upload.original_filename,
            url,
            size: i64::try_from(size).unwrap_or(i64::MAX),
            mime_type: upload.mime_type,
            created_at: now,
        };

        if let Err(e) = self.ctx.media_repo().create(&media).await {
            // Do not leave an unreferenced file behind
            if let Err(cleanup) = self.ctx.media_store().remove(&media.filename).await {
                warn!(error = %cleanup, filename = %media.filename, "Failed to clean up stored file");
            }
            return Err(e.into());
        }

        info!(media_id = %media.id, filename = %media.filename, "Media uploaded");

        Ok(media.into())
    }

    /// The caller's uploads, newest first
    #[instrument(skip(self))]
    pub async fn get_my_media(&self, caller: &Caller) -> ServiceResult<Vec<MediaResponse>> {
        let media = self.ctx.media_repo().find_by_user(caller.user_id).await?;
        Ok(media.into_iter().map(MediaResponse::from).collect())
    }

    /// Delete an upload (its owner or an admin)
    #[instrument(skip(self))]
    pub async fn delete_media(&self, caller: &Caller, media_id: MediaId) -> ServiceResult<()> {
        let media = self
            .ctx
            .media_repo()
            .find_by_id(media_id)
            .await?
            .ok_or(DomainError::MediaNotFound(media_id))?;

        caller.authorize(Action::DeleteMedia {
            owner_id: media.user_id,
        })?;

        self.ctx.media_store().remove(&media.filename).await?;
        self.ctx.media_repo().delete(media_id).await?;

        info!(media_id = %media_id, "Media deleted");

        Ok(())
    }
}
