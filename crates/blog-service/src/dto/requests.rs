//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use blog_core::{CommentId, PostId, PostStatus};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,

    /// Generated from the content when absent
    #[validate(length(max = 500, message = "Excerpt must be at most 500 characters"))]
    pub excerpt: Option<String>,

    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    pub featured_image: Option<String>,

    /// Defaults to draft
    pub status: Option<PostStatus>,
}

/// Update post request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: Option<String>,

    #[validate(length(max = 500, message = "Excerpt must be at most 500 characters"))]
    pub excerpt: Option<String>,

    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    pub featured_image: Option<String>,

    pub status: Option<PostStatus>,
}

// ============================================================================
// Category Requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Update category request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(max = 5000, message = "Comment must be at most 5000 characters"))]
    pub content: String,

    /// Comment being replied to
    pub parent_id: Option<CommentId>,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Batch reaction counts request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BatchReactionsRequest {
    #[validate(length(max = 100, message = "At most 100 posts per batch"))]
    pub post_ids: Vec<PostId>,
}
