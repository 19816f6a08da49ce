//! # blog-service
//!
//! Application layer containing business logic, services, DTOs and the
//! media store used for uploads.

pub mod dto;
pub mod services;
pub mod storage;

pub use services::{
    CategoryService, CommentService, FeedService, MediaService, MediaUpload, PostService,
    PublicService, ReactionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, FEED_CACHE_CONTROL, FEED_CONTENT_TYPE, FEED_ITEM_LIMIT, RECENT_POSTS_LIMIT,
};
pub use storage::{LocalMediaStore, MediaStore};
