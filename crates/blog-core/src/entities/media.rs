//! Media entity - an uploaded image

use chrono::{DateTime, Utc};

use crate::value_objects::{MediaId, UserId};

/// MIME types accepted for upload
pub const ALLOWED_MEDIA_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Default upload ceiling (5 MiB)
pub const DEFAULT_MAX_MEDIA_BYTES: u64 = 5 * 1024 * 1024;

/// Media entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub id: MediaId,
    pub user_id: UserId,
    /// Name under which the file is stored
    pub filename: String,
    /// Name the file was uploaded with
    pub original_filename: String,
    pub url: String,
    pub size: i64,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}

impl Media {
    /// Check if user owns this file
    #[inline]
    pub fn is_owner(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Check a MIME type against [`ALLOWED_MEDIA_TYPES`]
pub fn is_allowed_media_type(mime_type: &str) -> bool {
    ALLOWED_MEDIA_TYPES.contains(&mime_type)
}
