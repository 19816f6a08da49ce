//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Ids are UUIDs and serialize as strings.

use std::collections::HashMap;

use blog_core::{
    CategoryId, CommentId, MediaId, PostId, PostStatus, ReactionCounts, ReactionKind,
    ToggleAction, UserId,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Post Responses
// ============================================================================

/// Post as seen by its author or an admin, drafts included
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub author_id: UserId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author fields shown next to public posts
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: UserId,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// Category reference attached to a public post
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRefResponse {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

/// Published post as shown to readers
#[derive(Debug, Clone, Serialize)]
pub struct PublicPostResponse {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub published_at: DateTime<Utc>,
    /// Minutes
    pub reading_time: u32,
    pub author: AuthorResponse,
    pub categories: Vec<CategoryRefResponse>,
}

/// A page of public posts
#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PublicPostResponse>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

/// A page of public posts by one author
#[derive(Debug, Clone, Serialize)]
pub struct AuthorPostsResponse {
    pub posts: Vec<PublicPostResponse>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    /// None when the author does not exist
    pub author: Option<AuthorResponse>,
}

// ============================================================================
// Category Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CommentAuthorResponse {
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Comment with its replies, oldest first
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub parent_id: Option<CommentId>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: CommentAuthorResponse,
    pub replies: Vec<CommentResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentCountResponse {
    pub count: i64,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Outcome of a toggle together with the post's fresh counts
#[derive(Debug, Clone, Serialize)]
pub struct ToggleReactionResponse {
    pub action: ToggleAction,
    pub kind: Option<ReactionKind>,
    pub counts: ReactionCounts,
}

/// Counts keyed by post id; every requested post has an entry
#[derive(Debug, Clone, Serialize)]
pub struct BatchReactionsResponse {
    pub counts: HashMap<PostId, ReactionCounts>,
}

// ============================================================================
// Media Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MediaResponse {
    pub id: MediaId,
    pub user_id: UserId,
    pub filename: String,
    pub original_filename: String,
    pub url: String,
    pub size: i64,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
