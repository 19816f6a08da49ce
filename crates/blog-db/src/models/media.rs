//! Media database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for media table
#[derive(Debug, Clone, FromRow)]
pub struct MediaModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub filename: String,
    pub original_filename: String,
    pub url: String,
    pub size: i64,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}
