//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub status: String,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Published post joined with its author
#[derive(Debug, Clone, FromRow)]
pub struct PublicPostModel {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub author_id: Uuid,
    pub author_name: String,
    pub author_bio: Option<String>,
    pub author_avatar_url: Option<String>,
}

/// Category row keyed by the post it is attached to
#[derive(Debug, Clone, FromRow)]
pub struct PostCategoryModel {
    pub post_id: Uuid,
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}
