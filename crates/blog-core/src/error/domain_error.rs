//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CategoryId, CommentId, MediaId, PostId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("No published post with slug: {0}")]
    PostSlugNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    #[error("Parent comment not found: {0}")]
    ParentCommentNotFound(CommentId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("Category not found: {0}")]
    CategorySlugNotFound(String),

    #[error("Media not found: {0}")]
    MediaNotFound(MediaId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Cannot derive a slug from: {0:?}")]
    InvalidSlug(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Replies may nest at most {max} levels deep")]
    ReplyTooDeep { max: usize },

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("File too large: max {max_bytes} bytes")]
    FileTooLarge { max_bytes: u64 },

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Missing permission: {0}")]
    Forbidden(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Slug already in use: {0}")]
    SlugAlreadyExists(String),

    #[error("Category already exists: {0}")]
    CategoryAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) | Self::PostSlugNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ParentCommentNotFound(_) => "UNKNOWN_PARENT_COMMENT",
            Self::CategoryNotFound(_) | Self::CategorySlugNotFound(_) => "UNKNOWN_CATEGORY",
            Self::MediaNotFound(_) => "UNKNOWN_MEDIA",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::InvalidSlug(_) => "INVALID_SLUG",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::ReplyTooDeep { .. } => "REPLY_TOO_DEEP",
            Self::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",

            // Authentication / Authorization
            Self::Unauthenticated => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",

            // Conflict
            Self::SlugAlreadyExists(_) => "SLUG_ALREADY_EXISTS",
            Self::CategoryAlreadyExists(_) => "CATEGORY_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PostNotFound(_)
                | Self::PostSlugNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ParentCommentNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::CategorySlugNotFound(_)
                | Self::MediaNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyContent
                | Self::InvalidSlug(_)
                | Self::ContentTooLong { .. }
                | Self::ReplyTooDeep { .. }
                | Self::UnsupportedMediaType(_)
                | Self::FileTooLarge { .. }
        )
    }

    /// Check if the caller is not signed in
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::SlugAlreadyExists(_) | Self::CategoryAlreadyExists(_)
        )
    }
}
