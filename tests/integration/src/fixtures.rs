//! Test fixtures and data generators
//!
//! Request bodies and the slices of response bodies the tests look at.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Mixed with the process id so reruns against the same database do not
/// collide on slugs.
pub fn unique_suffix() -> String {
    format!("{}-{}", std::process::id(), COUNTER.fetch_add(1, Ordering::SeqCst))
}

// ============================================================================
// Posts
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CreatePostRequest {
    pub fn draft() -> Self {
        Self {
            title: format!("Integration Post {}", unique_suffix()),
            content: "<p>Written by the integration tests.</p>".to_string(),
            status: None,
        }
    }

    pub fn published() -> Self {
        Self {
            status: Some("published".to_string()),
            ..Self::draft()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub status: String,
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct PublicPostResponse {
    pub id: String,
    pub slug: String,
    pub reading_time: u32,
    pub author: AuthorRef,
    pub categories: Vec<CategoryRef>,
}

#[derive(Debug, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PublicPostResponse>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Deserialize)]
pub struct AuthorPostsResponse {
    pub posts: Vec<PublicPostResponse>,
    pub total: i64,
    pub author: Option<AuthorRef>,
}

// ============================================================================
// Categories
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

impl CreateCategoryRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Category {}", unique_suffix()),
            description: Some("Created by the integration tests".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
}

// ============================================================================
// Comments
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl CreateCommentRequest {
    pub fn root(content: &str) -> Self {
        Self {
            content: content.to_string(),
            parent_id: None,
        }
    }

    pub fn reply(content: &str, parent_id: &str) -> Self {
        Self {
            content: content.to_string(),
            parent_id: Some(parent_id.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub parent_id: Option<String>,
    pub content: String,
    pub replies: Vec<CommentResponse>,
}

#[derive(Debug, Deserialize)]
pub struct CommentCountResponse {
    pub count: i64,
}

// ============================================================================
// Reactions
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ReactionCounts {
    pub like: u64,
    pub heart: u64,
    pub fire: u64,
    pub clap: u64,
    pub total: u64,
    pub user_reaction: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleReactionResponse {
    pub action: String,
    pub kind: Option<String>,
    pub counts: ReactionCounts,
}

#[derive(Debug, Serialize)]
pub struct BatchReactionsRequest {
    pub post_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchReactionsResponse {
    pub counts: HashMap<String, ReactionCounts>,
}

// ============================================================================
// Media
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct MediaResponse {
    pub id: String,
    pub filename: String,
    pub original_filename: String,
    pub url: String,
    pub size: i64,
    pub mime_type: String,
}

/// A tiny but well-formed PNG signature followed by padding
pub fn png_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&[0; 64]);
    bytes
}
