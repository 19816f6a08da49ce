//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::aggregates::ReactionTransition;
use crate::entities::{
    Category, CommentRecord, Media, NewComment, Post, PostPage, PublicPost, Reaction, ReactionKind,
    User,
};
use crate::error::DomainError;
use crate::value_objects::{CategoryId, CommentId, MediaId, PostId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Page selection for listing queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    /// Clamp to a valid page (>= 1) and limit (1..=100)
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, Self::MAX_LIMIT),
        }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID, in any status
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// All posts by an author, newest first
    async fn find_by_author(&self, author_id: UserId) -> RepoResult<Vec<Post>>;

    /// Create a new post; a taken slug yields `SlugAlreadyExists`
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post with its comments, reactions and category links
    async fn delete(&self, id: PostId) -> RepoResult<()>;

    /// Published post by slug
    async fn find_published_by_slug(&self, slug: &str) -> RepoResult<Option<PublicPost>>;

    /// Most recently published posts
    async fn find_recent_published(&self, limit: u32) -> RepoResult<Vec<PublicPost>>;

    /// Page through all published posts, newest first
    async fn list_published(&self, page: PageRequest) -> RepoResult<PostPage>;

    /// Page through published posts in a category
    async fn list_published_by_category(
        &self,
        category_id: CategoryId,
        page: PageRequest,
    ) -> RepoResult<PostPage>;

    /// Page through published posts by an author
    async fn list_published_by_author(
        &self,
        author_id: UserId,
        page: PageRequest,
    ) -> RepoResult<PostPage>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>>;

    /// Find category by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>>;

    /// All categories, newest first
    async fn list_all(&self) -> RepoResult<Vec<Category>>;

    /// Categories attached to a post
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Category>>;

    /// Create a category; a taken name or slug yields `CategoryAlreadyExists`
    async fn create(&self, category: &Category) -> RepoResult<()>;

    /// Update an existing category
    async fn update(&self, category: &Category) -> RepoResult<()>;

    /// Delete a category and its post links
    async fn delete(&self, id: CategoryId) -> RepoResult<()>;

    /// Attach a category to a post (no-op if already attached)
    async fn link_post(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<()>;

    /// Detach a category from a post
    async fn unlink_post(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a single comment with its author
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<CommentRecord>>;

    /// All comments of a post with authors, oldest first
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<CommentRecord>>;

    /// Insert a comment and return it joined with its author
    async fn create(&self, comment: &NewComment) -> RepoResult<CommentRecord>;

    /// Delete a comment
    async fn delete(&self, id: CommentId) -> RepoResult<()>;

    /// Number of comments on a post
    async fn count_by_post(&self, post_id: PostId) -> RepoResult<i64>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// All reactions on a post
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Reaction>>;

    /// All reactions on any of the given posts
    async fn find_by_posts(&self, post_ids: &[PostId]) -> RepoResult<Vec<Reaction>>;

    /// The user's reaction on a post, if any
    async fn find_by_user(&self, post_id: PostId, user_id: UserId) -> RepoResult<Option<Reaction>>;

    /// Toggle the user's reaction atomically and report the write performed
    ///
    /// Implementations must hold the single-reaction-per-(post, user)
    /// invariant even under concurrent toggles.
    async fn toggle(
        &self,
        post_id: PostId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> RepoResult<ReactionTransition>;
}

// ============================================================================
// Media Repository
// ============================================================================

#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Find media by ID
    async fn find_by_id(&self, id: MediaId) -> RepoResult<Option<Media>>;

    /// Media uploaded by a user, newest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Media>>;

    /// Record an uploaded file
    async fn create(&self, media: &Media) -> RepoResult<()>;

    /// Delete a media record
    async fn delete(&self, id: MediaId) -> RepoResult<()>;
}
