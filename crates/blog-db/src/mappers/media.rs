//! Media entity <-> model mapper

use blog_core::entities::Media;
use blog_core::value_objects::{MediaId, UserId};

use crate::models::MediaModel;

/// Convert MediaModel to Media entity
impl From<MediaModel> for Media {
    fn from(model: MediaModel) -> Self {
        Media {
            id: MediaId::from_uuid(model.id),
            user_id: UserId::from_uuid(model.user_id),
            filename: model.filename,
            original_filename: model.original_filename,
            url: model.url,
            size: model.size,
            mime_type: model.mime_type,
            created_at: model.created_at,
        }
    }
}
