//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod category;
pub mod comment;
pub mod context;
pub mod error;
pub mod feed;
pub mod media;
pub mod post;
pub mod public;
pub mod reaction;

// Re-export all services for convenience
pub use category::CategoryService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feed::{FeedService, FEED_CACHE_CONTROL, FEED_CONTENT_TYPE, FEED_ITEM_LIMIT};
pub use media::{MediaService, MediaUpload};
pub use post::PostService;
pub use public::{PublicService, RECENT_POSTS_LIMIT};
pub use reaction::ReactionService;
