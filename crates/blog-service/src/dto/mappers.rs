//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blog_core::entities::{
    AuthorSummary, Category, CategorySummary, Comment, Media, Post, PublicPost,
};

use super::responses::{
    AuthorResponse, CategoryRefResponse, CategoryResponse, CommentAuthorResponse, CommentResponse,
    MediaResponse, PostResponse, PublicPostResponse,
};

// ============================================================================
// Post Mappers
// ============================================================================

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            title: post.title,
            slug: post.slug,
            content: post.content,
            excerpt: post.excerpt,
            featured_image: post.featured_image,
            status: post.status,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<AuthorSummary> for AuthorResponse {
    fn from(author: AuthorSummary) -> Self {
        Self {
            id: author.id,
            name: author.name,
            bio: author.bio,
            avatar_url: author.avatar_url,
        }
    }
}

impl From<CategorySummary> for CategoryRefResponse {
    fn from(category: CategorySummary) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
        }
    }
}

impl From<PublicPost> for PublicPostResponse {
    fn from(post: PublicPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            content: post.content,
            excerpt: post.excerpt,
            featured_image: post.featured_image,
            published_at: post.published_at,
            reading_time: post.reading_time,
            author: post.author.into(),
            categories: post.categories.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Category Mappers
// ============================================================================

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            created_at: category.created_at,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            parent_id: comment.parent_id,
            content: comment.content,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            author: CommentAuthorResponse {
                name: comment.author.name,
                avatar_url: comment.author.avatar_url,
            },
            replies: comment.replies.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Media Mappers
// ============================================================================

impl From<Media> for MediaResponse {
    fn from(media: Media) -> Self {
        Self {
            id: media.id,
            user_id: media.user_id,
            filename: media.filename,
            original_filename: media.original_filename,
            url: media.url,
            size: media.size,
            mime_type: media.mime_type,
            created_at: media.created_at,
        }
    }
}
