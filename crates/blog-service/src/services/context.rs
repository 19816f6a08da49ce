//! Service context - dependency container for services
//!
//! Holds all repositories, the media store, and site settings needed by services.

use std::sync::Arc;

use blog_common::{SiteConfig, StorageConfig};
use blog_core::traits::{
    CategoryRepository, CommentRepository, MediaRepository, PostRepository, ReactionRepository,
    UserRepository,
};

use crate::storage::MediaStore;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories (the persistence gateway)
/// - The media store for uploaded files
/// - Site metadata for feeds and storage limits for uploads
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    media_repo: Arc<dyn MediaRepository>,

    // Storage
    media_store: Arc<dyn MediaStore>,

    // Settings
    site: SiteConfig,
    storage: StorageConfig,
}

impl ServiceContext {
    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the media repository
    pub fn media_repo(&self) -> &dyn MediaRepository {
        self.media_repo.as_ref()
    }

    // === Storage ===

    pub fn media_store(&self) -> &dyn MediaStore {
        self.media_store.as_ref()
    }

    // === Settings ===

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("media_store", &"...")
            .field("site", &self.site)
            .field("storage", &self.storage)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    media_repo: Option<Arc<dyn MediaRepository>>,
    media_store: Option<Arc<dyn MediaStore>>,
    site: Option<SiteConfig>,
    storage: Option<StorageConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn media_repo(mut self, repo: Arc<dyn MediaRepository>) -> Self {
        self.media_repo = Some(repo);
        self
    }

    pub fn media_store(mut self, store: Arc<dyn MediaStore>) -> Self {
        self.media_store = Some(store);
        self
    }

    pub fn site(mut self, site: SiteConfig) -> Self {
        self.site = Some(site);
        self
    }

    pub fn storage(mut self, storage: StorageConfig) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the ServiceContext
    ///
    /// Site and storage settings fall back to their defaults.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository or the media store is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            post_repo: self.post_repo.ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            category_repo: self.category_repo.ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            comment_repo: self.comment_repo.ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            reaction_repo: self.reaction_repo.ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            media_repo: self.media_repo.ok_or_else(|| ServiceError::validation("media_repo is required"))?,
            media_store: self.media_store.ok_or_else(|| ServiceError::validation("media_store is required"))?,
            site: self.site.unwrap_or_default(),
            storage: self.storage.unwrap_or_default(),
        })
    }
}
